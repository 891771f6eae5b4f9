//! Flight status port.

use async_trait::async_trait;

use crate::domain::{FlightArrival, FlightNumber};
use crate::error::Result;

/// Resolves a flight designator to its arrival data and destination airport.
///
/// # Errors
///
/// Implementations return [`LookupError::FlightNotFound`] when the provider
/// has no record of the flight and [`LookupError::FlightDataUnavailable`] when
/// the provider fails or answers without usable data.
///
/// [`LookupError::FlightNotFound`]: crate::error::LookupError::FlightNotFound
/// [`LookupError::FlightDataUnavailable`]: crate::error::LookupError::FlightDataUnavailable
#[async_trait]
pub trait FlightLookup: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    async fn lookup(&self, flight: &FlightNumber) -> Result<FlightArrival>;
}
