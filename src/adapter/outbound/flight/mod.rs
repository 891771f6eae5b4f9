//! Flight status adapters.
//!
//! Implementations of [`FlightLookup`](crate::port::FlightLookup) for
//! FlightAware AeroAPI and AviationStack, plus [`FallbackFlightLookup`] which
//! tries several providers in order.

pub mod aviationstack;
pub mod fallback;
pub mod flightaware;

pub use aviationstack::AviationStack;
pub use fallback::FallbackFlightLookup;
pub use flightaware::FlightAware;

use crate::domain::FlightNumber;
use crate::error::{Error, LookupError};

fn unavailable(flight: &FlightNumber, reason: impl Into<String>) -> Error {
    Error::Lookup(LookupError::FlightDataUnavailable {
        flight: flight.to_string(),
        reason: reason.into(),
    })
}

fn not_found(flight: &FlightNumber) -> Error {
    Error::Lookup(LookupError::FlightNotFound {
        flight: flight.to_string(),
    })
}
