//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! They are returned by parsing constructors (`FlightNumber::parse`,
//! `Address::parse`, the modifier `FromStr` impls) and by the egress and
//! departure computations.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use curbside::domain::error::DomainError;
//! use curbside::domain::AirportBusy;
//!
//! let result = "huge-hub".parse::<AirportBusy>();
//!
//! assert!(matches!(
//!     result,
//!     Err(DomainError::InvalidModifier { field: "airport_busy", .. })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A situational modifier was outside its enumerated domain.
    #[error("invalid value '{value}' for {field} (expected one of: {expected})")]
    InvalidModifier {
        /// Name of the modifier field.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Accepted values, comma separated.
        expected: &'static str,
    },

    /// Drive duration is negative or beyond any plausible drive.
    #[error("drive duration must be between 0 and {max} minutes, got {minutes} minutes", max = crate::domain::route::MAX_DRIVE_MINUTES)]
    InvalidDuration {
        /// The invalid duration that was provided.
        minutes: i64,
    },

    /// Neither a scheduled nor an estimated arrival is known.
    #[error("no arrival time available for flight {flight}")]
    MissingArrivalTime {
        /// The flight whose arrival is unknown.
        flight: String,
    },

    /// The flight designator does not look like `AA123`.
    #[error("Please enter a valid flight number like AA123")]
    InvalidFlightNumber {
        /// The rejected input.
        input: String,
    },

    /// The address is empty or too short to be routable.
    #[error("Please enter a valid address")]
    InvalidAddress,

    /// A required request field was not supplied.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The request could not be decoded at all.
    #[error("malformed request: {reason}")]
    MalformedRequest {
        /// Decoder message.
        reason: String,
    },

    /// An egress or departure parameter breaks a model invariant.
    #[error("invalid parameter {field}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl DomainError {
    /// True for errors caused by caller-supplied request data.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidModifier { .. }
                | Self::InvalidFlightNumber { .. }
                | Self::InvalidAddress
                | Self::MissingField { .. }
                | Self::MalformedRequest { .. }
        )
    }
}
