//! Outbound adapters (driven side).

pub mod flight;
pub mod route;
