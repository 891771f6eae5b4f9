//! Pickup planner: the request orchestrator.
//!
//! Validates the raw request, looks up the flight, asks for the drive time to
//! the flight's destination airport and runs the departure estimate.
//!
//! ```text
//! PickupRequest ──validate──> FlightLookup ──airport──> RouteEstimator
//!                                   │                         │
//!                                   └──── DepartureEstimator ─┘
//!                                                │
//!                                           PickupPlan
//! ```
//!
//! The route lookup needs the airport returned by the flight lookup, so the
//! two provider calls run one after the other. Each is bounded by its own
//! timeout; any failure fails the whole request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::domain::error::DomainError;
use crate::domain::{Address, DepartureEstimator, FlightNumber, SituationalModifiers};
use crate::error::{Error, ErrorKind, Operation, Result};
use crate::port::{FlightLookup, PickupPlan, PickupRequest, PlanPickup, RouteEstimator};

/// Default bound on each provider call.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-operation timeouts for the provider calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTimeouts {
    pub flight: Duration,
    pub route: Duration,
}

impl Default for LookupTimeouts {
    fn default() -> Self {
        Self {
            flight: DEFAULT_LOOKUP_TIMEOUT,
            route: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub flight: FlightNumber,
    pub address: Address,
    pub modifiers: SituationalModifiers,
}

impl TryFrom<&PickupRequest> for ValidatedRequest {
    type Error = DomainError;

    fn try_from(request: &PickupRequest) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            flight: FlightNumber::parse(&request.flight)?,
            address: Address::parse(&request.address)?,
            modifiers: SituationalModifiers::parse(
                &request.airport_busy,
                &request.holiday,
                &request.checked_bags,
            )?,
        })
    }
}

/// Orchestrates the provider lookups and the departure estimate.
///
/// Cheap to share: hold it in an `Arc` and call [`PlanPickup::plan`] from
/// any number of tasks.
pub struct PickupPlanner {
    flights: Arc<dyn FlightLookup>,
    routes: Arc<dyn RouteEstimator>,
    estimator: DepartureEstimator,
    timeouts: LookupTimeouts,
    clock: fn() -> DateTime<Utc>,
}

impl PickupPlanner {
    pub fn new(
        flights: Arc<dyn FlightLookup>,
        routes: Arc<dyn RouteEstimator>,
        estimator: DepartureEstimator,
    ) -> Self {
        Self {
            flights,
            routes,
            estimator,
            timeouts: LookupTimeouts::default(),
            clock: Utc::now,
        }
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: LookupTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Replace the wall clock used for the `is_past` flag.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn estimator(&self) -> &DepartureEstimator {
        &self.estimator
    }

    pub fn timeouts(&self) -> LookupTimeouts {
        self.timeouts
    }

    /// Plan for a request that has already been validated.
    pub async fn plan_validated(&self, request: ValidatedRequest) -> Result<PickupPlan> {
        let ValidatedRequest {
            flight,
            address,
            modifiers,
        } = request;

        let arrival = bounded(
            Operation::FlightLookup,
            self.timeouts.flight,
            self.flights.lookup(&flight),
        )
        .await?;
        let arrival_time = arrival.arrival_time()?;
        debug!(
            flight = %flight,
            provider = self.flights.name(),
            airport = %arrival.airport.code,
            arrival = %arrival_time,
            "Flight resolved"
        );

        let route = bounded(
            Operation::RouteLookup,
            self.timeouts.route,
            self.routes.drive_time(&address, &arrival.airport),
        )
        .await?;
        debug!(
            provider = self.routes.name(),
            drive_minutes = route.minutes(),
            "Drive time resolved"
        );

        let estimate =
            self.estimator
                .estimate(arrival_time, modifiers, route.minutes(), (self.clock)())?;

        info!(
            flight = %flight,
            airport = %arrival.airport.code,
            airport_busy = %modifiers.airport_busy,
            holiday = %modifiers.holiday,
            checked_bags = %modifiers.checked_bags,
            drive_minutes = estimate.drive_time_minutes,
            leave_time = %estimate.leave_time,
            is_past = estimate.is_past,
            "Departure estimated"
        );

        Ok(PickupPlan {
            flight,
            airport: arrival.airport,
            estimate,
        })
    }
}

#[async_trait]
impl PlanPickup for PickupPlanner {
    async fn plan(&self, request: PickupRequest) -> Result<PickupPlan> {
        let validated = ValidatedRequest::try_from(&request)?;
        let result = self.plan_validated(validated).await;
        if let Err(e) = &result {
            if e.kind() == ErrorKind::Internal {
                error!(error = %e, flight = %request.flight, "Estimate failed");
            } else {
                info!(error = %e, kind = %e.kind(), flight = %request.flight, "Estimate rejected");
            }
        }
        result
    }
}

async fn bounded<T>(
    operation: Operation,
    limit: Duration,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            operation,
            limit,
        }),
    }
}
