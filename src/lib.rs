//! Curbside - work out when to leave home to pick someone up at the airport.
//!
//! Given a flight number, a starting address and a few situational hints
//! (how busy the airport is, whether it is a holiday, whether the traveller
//! checked bags), curbside looks up the flight's arrival, estimates how long
//! the traveller takes to reach the curb, asks a maps provider for the drive
//! time and returns the moment to leave.
//!
//! # Architecture
//!
//! The crate is laid out hexagonally:
//!
//! - [`domain`] - Egress model, departure calculator and value types. Pure.
//! - [`port`] - `FlightLookup` and `RouteEstimator` (outbound), `PlanPickup`
//!   (inbound).
//! - [`application`] - `PickupPlanner`, which validates a request and drives
//!   both lookups with timeouts.
//! - [`adapter`] - FlightAware, AviationStack, Google Distance Matrix and a
//!   fixed drive time on the outbound side; the axum API and clap CLI on the
//!   inbound side.
//! - [`infrastructure`] - Configuration, wiring, health checks and server
//!   bootstrap.
//!
//! # Example
//!
//! ```no_run
//! use curbside::infrastructure::config::{Config, Credentials};
//! use curbside::infrastructure::factory::build_planner;
//! use curbside::port::{PickupRequest, PlanPickup};
//!
//! # async fn run() -> curbside::error::Result<()> {
//! let config = Config::parse_toml("")?;
//! let planner = build_planner(&config, &Credentials::from_env())?;
//! let plan = planner
//!     .plan(PickupRequest {
//!         flight: "AA100".into(),
//!         address: "1 Market St, San Francisco, CA".into(),
//!         airport_busy: "major-hub".into(),
//!         holiday: "no".into(),
//!         checked_bags: "yes".into(),
//!     })
//!     .await?;
//! println!("leave at {}", plan.estimate.leave_time);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
