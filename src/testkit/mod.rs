//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`port`] - Stub [`FlightLookup`](crate::port::FlightLookup) and
//!   [`RouteEstimator`](crate::port::RouteEstimator) implementations that
//!   count calls and can be delayed.
//! - [`domain`] - Builders for flights, airports and requests.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod port;
