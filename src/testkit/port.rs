//! Stub port implementations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Address, Airport, FlightArrival, FlightNumber, RouteDuration};
use crate::error::{LookupError, Result};
use crate::port::{FlightLookup, RouteEstimator};

/// Flight lookup that returns a canned response.
pub struct StubFlightLookup {
    response: std::result::Result<FlightArrival, LookupError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubFlightLookup {
    /// Always returns `arrival`, with the flight number rewritten to the
    /// one requested.
    pub fn returning(arrival: FlightArrival) -> Self {
        Self {
            response: Ok(arrival),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: LookupError) -> Self {
        Self {
            response: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep before answering.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlightLookup for StubFlightLookup {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn lookup(&self, flight: &FlightNumber) -> Result<FlightArrival> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            Ok(arrival) => Ok(FlightArrival {
                flight_number: flight.clone(),
                ..arrival.clone()
            }),
            Err(e) => Err(e.clone().into()),
        }
    }
}

/// Route estimator that returns a canned duration.
pub struct StubRouteEstimator {
    response: std::result::Result<i64, LookupError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubRouteEstimator {
    pub fn minutes(minutes: i64) -> Self {
        Self {
            response: Ok(minutes),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: LookupError) -> Self {
        Self {
            response: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteEstimator for StubRouteEstimator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn drive_time(&self, _origin: &Address, _destination: &Airport) -> Result<RouteDuration> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            // Negative canned values surface as a contract error.
            Ok(minutes) => Ok(RouteDuration::from_minutes(*minutes)?),
            Err(e) => Err(e.clone().into()),
        }
    }
}
