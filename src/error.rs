use std::fmt;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by the flight and route providers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Flight {flight} not found")]
    FlightNotFound { flight: String },

    #[error("flight data unavailable for {flight}: {reason}")]
    FlightDataUnavailable { flight: String, reason: String },

    #[error("could not compute a drive time: {reason}")]
    RouteUnresolvable { reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("{operation} timed out after {limit:?}")]
    Timeout {
        operation: Operation,
        limit: std::time::Duration,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// External call an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FlightLookup,
    RouteLookup,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlightLookup => f.write_str("flight lookup"),
            Self::RouteLookup => f.write_str("route lookup"),
        }
    }
}

/// Caller-facing classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    FlightNotFound,
    FlightDataUnavailable,
    RouteUnresolvable,
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::FlightNotFound => "flight_not_found",
            Self::FlightDataUnavailable => "flight_data_unavailable",
            Self::RouteUnresolvable => "route_unresolvable",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Classify the error for the caller.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) if err.is_input_error() => ErrorKind::InvalidInput,
            Self::Domain(DomainError::MissingArrivalTime { .. }) => {
                ErrorKind::FlightDataUnavailable
            }
            Self::Lookup(LookupError::FlightNotFound { .. }) => ErrorKind::FlightNotFound,
            Self::Lookup(LookupError::FlightDataUnavailable { .. }) => {
                ErrorKind::FlightDataUnavailable
            }
            Self::Lookup(LookupError::RouteUnresolvable { .. }) => ErrorKind::RouteUnresolvable,
            Self::Timeout {
                operation: Operation::FlightLookup,
                ..
            } => ErrorKind::FlightDataUnavailable,
            Self::Timeout {
                operation: Operation::RouteLookup,
                ..
            } => ErrorKind::RouteUnresolvable,
            _ => ErrorKind::Internal,
        }
    }

    /// Human-readable message safe to show to the caller.
    ///
    /// Internal failures are reported generically; the full error is logged.
    #[must_use]
    pub fn detail(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => "Internal error while estimating departure time".to_string(),
            ErrorKind::FlightDataUnavailable if matches!(self, Self::Timeout { .. }) => {
                "Flight data service timed out. Please try again later.".to_string()
            }
            ErrorKind::RouteUnresolvable if matches!(self, Self::Timeout { .. }) => {
                "Drive time service timed out. Please try again later.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
