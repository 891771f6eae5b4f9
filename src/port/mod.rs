//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture. Outbound
//! ports are implemented by the provider adapters; the inbound port is what
//! the HTTP and CLI surfaces drive.
//!
//! ```text
//!        ┌──────────┐   ┌──────────┐
//!        │   HTTP   │   │   CLI    │
//!        └────┬─────┘   └────┬─────┘
//!             └──── PlanPickup ┘
//!                      │
//!              ┌───────┴────────┐
//!              │ PickupPlanner  │
//!              └───┬────────┬───┘
//!        FlightLookup      RouteEstimator
//!     ┌────────┴──────┐   ┌────┴──────────┐
//!     │ FlightAware   │   │ Google Maps   │
//!     │ AviationStack │   │ Fixed         │
//!     └───────────────┘   └───────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::{PickupPlan, PickupRequest, PlanPickup};
pub use outbound::{FlightLookup, RouteEstimator};
