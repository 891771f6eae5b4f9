//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod planner;

pub use planner::{LookupTimeouts, PickupPlanner, ValidatedRequest, DEFAULT_LOOKUP_TIMEOUT};
