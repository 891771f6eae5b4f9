//! Component factory functions.
//!
//! Each factory turns configuration plus [`Credentials`] into a port
//! implementation, logging which provider was selected.

mod flight;
mod route;

pub use flight::build_flight_lookup;
pub use route::build_route_estimator;

use std::sync::Arc;

use reqwest::Client;

use crate::application::planner::{LookupTimeouts, PickupPlanner};
use crate::error::Result;
use crate::infrastructure::config::{Config, Credentials};

/// Shared HTTP client for all provider adapters.
pub fn build_http_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("curbside/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Wire the planner from configuration and credentials.
#[allow(clippy::result_large_err)]
pub fn build_planner(config: &Config, credentials: &Credentials) -> Result<PickupPlanner> {
    let client = build_http_client()?;
    let flights = build_flight_lookup(config, credentials, &client);
    let routes = build_route_estimator(config, credentials, &client);
    let estimator = config.estimator()?;

    Ok(PickupPlanner::new(flights, routes, estimator).with_timeouts(LookupTimeouts {
        flight: config.flight.timeout(),
        route: config.route.timeout(),
    }))
}

/// Same wiring with caller-supplied ports (used by tests and embedders).
#[allow(clippy::result_large_err)]
pub fn build_planner_with(
    config: &Config,
    flights: Arc<dyn crate::port::FlightLookup>,
    routes: Arc<dyn crate::port::RouteEstimator>,
) -> Result<PickupPlanner> {
    Ok(
        PickupPlanner::new(flights, routes, config.estimator()?).with_timeouts(LookupTimeouts {
            flight: config.flight.timeout(),
            route: config.route.timeout(),
        }),
    )
}
