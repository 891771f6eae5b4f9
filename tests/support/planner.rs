use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use curbside::application::{LookupTimeouts, PickupPlanner};
use curbside::infrastructure::factory::build_planner_with;
use curbside::testkit::config::default_config;
use curbside::testkit::domain::utc;
use curbside::testkit::port::{StubFlightLookup, StubRouteEstimator};

/// Noon on the shared test date: before the fixtures' afternoon arrivals.
pub fn noon() -> DateTime<Utc> {
    utc(12, 0)
}

/// Planner over stubs with default parameters and the clock fixed at noon.
pub fn planner(flights: &Arc<StubFlightLookup>, routes: &Arc<StubRouteEstimator>) -> PickupPlanner {
    build_planner_with(&default_config(), flights.clone(), routes.clone())
        .expect("default config builds")
        .with_clock(noon)
}

/// Same as [`planner`] with short timeouts for timeout tests.
pub fn impatient_planner(
    flights: &Arc<StubFlightLookup>,
    routes: &Arc<StubRouteEstimator>,
) -> PickupPlanner {
    planner(flights, routes).with_timeouts(LookupTimeouts {
        flight: Duration::from_millis(50),
        route: Duration::from_millis(50),
    })
}
