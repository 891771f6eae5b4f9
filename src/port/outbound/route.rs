//! Drive time port.

use async_trait::async_trait;

use crate::domain::{Address, Airport, RouteDuration};
use crate::error::Result;

/// Estimates the current driving time from an address to an airport.
///
/// Results reflect traffic at request time and are never cached.
#[async_trait]
pub trait RouteEstimator: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns [`LookupError::RouteUnresolvable`] when no driving route
    /// exists or the provider rejects the request.
    ///
    /// [`LookupError::RouteUnresolvable`]: crate::error::LookupError::RouteUnresolvable
    async fn drive_time(&self, origin: &Address, destination: &Airport) -> Result<RouteDuration>;
}
