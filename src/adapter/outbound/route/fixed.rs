//! Constant drive time.

use async_trait::async_trait;

use crate::domain::{Address, Airport, RouteDuration};
use crate::error::Result;
use crate::port::RouteEstimator;

/// Drive time used when no maps provider is configured.
pub const DEFAULT_FALLBACK_MINUTES: u32 = 30;

/// Route estimator that ignores its inputs and returns a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoute {
    minutes: u32,
}

impl FixedRoute {
    #[must_use]
    pub const fn new(minutes: u32) -> Self {
        Self { minutes }
    }
}

impl Default for FixedRoute {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_MINUTES)
    }
}

#[async_trait]
impl RouteEstimator for FixedRoute {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn drive_time(&self, _origin: &Address, _destination: &Airport) -> Result<RouteDuration> {
        Ok(RouteDuration::from_minutes(i64::from(self.minutes))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_minutes() {
        let route = FixedRoute::new(42);
        let address = Address::parse("1 Main St").unwrap();
        let duration = route
            .drive_time(&address, &Airport::new("SFO", "San Francisco"))
            .await
            .unwrap();
        assert_eq!(duration.minutes(), 42);
    }

    #[test]
    fn default_is_thirty_minutes() {
        assert_eq!(FixedRoute::default().minutes, 30);
    }
}
