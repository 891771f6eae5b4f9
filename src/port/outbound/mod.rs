//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod flight;
pub mod route;

pub use flight::FlightLookup;
pub use route::RouteEstimator;
