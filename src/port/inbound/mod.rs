//! Inbound (driving) ports consumed by inbound adapters.
//!
//! Both the HTTP service and the `estimate` CLI command go through
//! [`PlanPickup`].

pub mod planner;

pub use planner::{PickupPlan, PickupRequest, PlanPickup};
