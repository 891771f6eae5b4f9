//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; API keys never live in the file
//! and are read from the environment into [`Credentials`].
//!
//! # Example
//!
//! ```no_run
//! use curbside::infrastructure::config::{Config, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     let credentials = Credentials::from_env();
//!     println!("{}", credentials.summary());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::provider::{FlightConfig, RouteConfig};
use super::server::ServerConfig;
use crate::domain::error::DomainError;
use crate::domain::{
    DepartureCalculator, DepartureEstimator, EgressModel, EgressParameters, DEFAULT_BUFFER_MINUTES,
};
use crate::error::{ConfigError, Result};

/// Environment variable holding the FlightAware AeroAPI key.
pub const FLIGHTAWARE_API_KEY: &str = "FLIGHTAWARE_API_KEY";
/// Environment variable holding the AviationStack access key.
pub const AVIATIONSTACK_API_KEY: &str = "AVIATIONSTACK_API_KEY";
/// Environment variable holding the Google Maps key.
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

/// Departure calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureConfig {
    /// Parking and waiting margin subtracted after the drive.
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: u32,
}

fn default_buffer_minutes() -> u32 {
    DEFAULT_BUFFER_MINUTES
}

impl Default for DepartureConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
        }
    }
}

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults. Load from a
/// TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener and static frontend.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Flight status providers.
    #[serde(default)]
    pub flight: FlightConfig,

    /// Drive time provider.
    #[serde(default)]
    pub route: RouteConfig,

    /// Egress model parameter table.
    #[serde(default)]
    pub egress: EgressParameters,

    #[serde(default)]
    pub departure: DepartureConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `PORT` environment variable to `server.port`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let port = std::env::var("PORT").ok();
        Self::parse_toml_with_port(content, port.as_deref())
    }

    /// Like [`Config::parse_toml`] with an explicit port override.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_port(content: &str, port: Option<&str>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.server.apply_port_override(port)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.flight.validate()?;
        self.route.validate()?;
        // Building the model also rejects tables whose scaled egress
        // truncates to zero seconds.
        EgressModel::new(self.egress.clone()).map_err(egress_error)?;
        if self.departure.buffer_minutes > 24 * 60 {
            return Err(ConfigError::InvalidValue {
                field: "departure.buffer_minutes",
                reason: "must be at most 1440".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Build the departure estimator described by `[egress]` and `[departure]`.
    #[allow(clippy::result_large_err)]
    pub fn estimator(&self) -> Result<DepartureEstimator> {
        let egress = EgressModel::new(self.egress.clone()).map_err(egress_error)?;
        Ok(DepartureEstimator::new(
            egress,
            DepartureCalculator::new(self.departure.buffer_minutes),
        ))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn egress_error(err: DomainError) -> crate::error::Error {
    match err {
        DomainError::InvalidParameter { field, reason } => {
            ConfigError::InvalidValue { field, reason }.into()
        }
        other => ConfigError::InvalidValue {
            field: "egress",
            reason: other.to_string(),
        }
        .into(),
    }
}

/// Provider API keys, read from the environment at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub flightaware_api_key: Option<String>,
    pub aviationstack_api_key: Option<String>,
    pub google_maps_api_key: Option<String>,
}

impl Credentials {
    /// Read keys from the process environment. Blank values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys through an arbitrary lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            flightaware_api_key: read(FLIGHTAWARE_API_KEY),
            aviationstack_api_key: read(AVIATIONSTACK_API_KEY),
            google_maps_api_key: read(GOOGLE_MAPS_API_KEY),
        }
    }

    #[must_use]
    pub fn has_flight_provider(&self) -> bool {
        self.flightaware_api_key.is_some() || self.aviationstack_api_key.is_some()
    }

    /// One line naming which keys are present, never their values.
    #[must_use]
    pub fn summary(&self) -> String {
        let mark = |key: &Option<String>| if key.is_some() { "set" } else { "unset" };
        format!(
            "{FLIGHTAWARE_API_KEY}={}, {AVIATIONSTACK_API_KEY}={}, {GOOGLE_MAPS_API_KEY}={}",
            mark(&self.flightaware_api_key),
            mark(&self.aviationstack_api_key),
            mark(&self.google_maps_api_key),
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("flightaware_api_key", &self.flightaware_api_key.as_ref().map(|_| "***"))
            .field(
                "aviationstack_api_key",
                &self.aviationstack_api_key.as_ref().map(|_| "***"),
            )
            .field("google_maps_api_key", &self.google_maps_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml_with_port("", None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.departure.buffer_minutes, 20);
        assert_eq!(config.egress.base_minutes, 75);
    }

    #[test]
    fn port_override_is_applied() {
        let config = Config::parse_toml_with_port("[server]\nport = 9000", Some("8123")).unwrap();
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn invalid_egress_maps_to_config_error() {
        let err = Config::parse_toml_with_port("[egress]\nbase_minutes = 0", None).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::InvalidValue {
                field: "base_minutes",
                ..
            })
        ));
    }

    #[test]
    fn effective_config_round_trips_through_toml() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        let parsed = Config::parse_toml_with_port(&rendered, None).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn estimator_uses_configured_buffer() {
        let config =
            Config::parse_toml_with_port("[departure]\nbuffer_minutes = 5", None).unwrap();
        assert_eq!(config.estimator().unwrap().departure().buffer_minutes(), 5);
    }

    #[test]
    fn credentials_ignore_blank_values() {
        let env: HashMap<&str, &str> =
            HashMap::from([(FLIGHTAWARE_API_KEY, "  "), (AVIATIONSTACK_API_KEY, "abc")]);
        let credentials = Credentials::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(credentials.flightaware_api_key, None);
        assert_eq!(credentials.aviationstack_api_key.as_deref(), Some("abc"));
        assert!(credentials.has_flight_provider());
    }

    #[test]
    fn credentials_never_print_values() {
        let credentials = Credentials {
            google_maps_api_key: Some("secret-key".into()),
            ..Credentials::default()
        };
        assert!(!format!("{credentials:?}").contains("secret-key"));
        assert!(credentials.summary().contains("GOOGLE_MAPS_API_KEY=set"));
        assert!(!credentials.summary().contains("secret-key"));
    }
}
