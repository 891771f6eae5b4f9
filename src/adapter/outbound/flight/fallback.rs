//! Ordered fallback across flight providers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::unavailable;
use crate::domain::{FlightArrival, FlightNumber};
use crate::error::Result;
use crate::port::FlightLookup;

/// Tries each provider in order and returns the first usable arrival.
///
/// An answer without any arrival time counts as a failure, as does a
/// provider that exceeds the per-attempt timeout. When every provider fails,
/// the last provider's error is returned unchanged.
pub struct FallbackFlightLookup {
    providers: Vec<Arc<dyn FlightLookup>>,
    attempt_timeout: Option<Duration>,
}

impl FallbackFlightLookup {
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn FlightLookup>>) -> Self {
        Self {
            providers,
            attempt_timeout: None,
        }
    }

    /// Bound each provider call separately.
    #[must_use]
    pub fn with_attempt_timeout(mut self, limit: Duration) -> Self {
        self.attempt_timeout = Some(limit);
        self
    }

    async fn attempt(
        &self,
        provider: &dyn FlightLookup,
        flight: &FlightNumber,
    ) -> Result<FlightArrival> {
        let arrival = match self.attempt_timeout {
            Some(limit) => tokio::time::timeout(limit, provider.lookup(flight))
                .await
                .map_err(|_| {
                    unavailable(flight, format!("{} timed out after {limit:?}", provider.name()))
                })??,
            None => provider.lookup(flight).await?,
        };
        if arrival.arrival_time().is_err() {
            return Err(unavailable(flight, "no arrival time"));
        }
        Ok(arrival)
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

#[async_trait]
impl FlightLookup for FallbackFlightLookup {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn lookup(&self, flight: &FlightNumber) -> Result<FlightArrival> {
        let mut last_error = None;
        for provider in &self.providers {
            match self.attempt(provider.as_ref(), flight).await {
                Ok(arrival) => return Ok(arrival),
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        flight = %flight,
                        error = %e,
                        "Flight provider failed"
                    );
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| unavailable(flight, "no flight provider configured")))
    }
}
