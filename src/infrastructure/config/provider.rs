//! Flight and route provider configuration.
//!
//! API keys are not part of the file; see
//! [`Credentials`](super::settings::Credentials).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::flight::{aviationstack, flightaware};
use crate::adapter::outbound::route::{fixed, google};
use crate::error::{ConfigError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 5;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_provider_timeout_secs() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_SECS
}

/// Flight status providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Upper bound on one flight lookup, fallbacks included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bound on each provider in the fallback chain, so a hung provider
    /// still leaves time for the next one.
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,

    #[serde(default = "default_flightaware_base_url")]
    pub flightaware_base_url: String,

    #[serde(default = "default_aviationstack_base_url")]
    pub aviationstack_base_url: String,
}

fn default_flightaware_base_url() -> String {
    flightaware::DEFAULT_BASE_URL.to_string()
}

fn default_aviationstack_base_url() -> String {
    aviationstack::DEFAULT_BASE_URL.to_string()
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            flightaware_base_url: default_flightaware_base_url(),
            aviationstack_base_url: default_aviationstack_base_url(),
        }
    }
}

impl FlightConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_timeout("flight.timeout_secs", self.timeout_secs)?;
        if self.provider_timeout_secs == 0 || self.provider_timeout_secs > self.timeout_secs {
            return Err(ConfigError::InvalidValue {
                field: "flight.provider_timeout_secs",
                reason: format!("must be between 1 and timeout_secs ({})", self.timeout_secs),
            }
            .into());
        }
        validate_url("flight.flightaware_base_url", &self.flightaware_base_url)?;
        validate_url("flight.aviationstack_base_url", &self.aviationstack_base_url)
    }
}

/// Drive time provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Drive time assumed when no maps key is configured.
    #[serde(default = "default_fallback_minutes")]
    pub fallback_minutes: u32,

    #[serde(default = "default_google_base_url")]
    pub google_base_url: String,
}

fn default_fallback_minutes() -> u32 {
    fixed::DEFAULT_FALLBACK_MINUTES
}

fn default_google_base_url() -> String {
    google::DEFAULT_BASE_URL.to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_minutes: default_fallback_minutes(),
            google_base_url: default_google_base_url(),
        }
    }
}

impl RouteConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_timeout("route.timeout_secs", self.timeout_secs)?;
        if self.fallback_minutes > 24 * 60 {
            return Err(ConfigError::InvalidValue {
                field: "route.fallback_minutes",
                reason: "must be at most 1440".to_string(),
            }
            .into());
        }
        validate_url("route.google_base_url", &self.google_base_url)
    }
}

fn validate_timeout(field: &'static str, secs: u64) -> Result<()> {
    if secs == 0 || secs > 300 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be between 1 and 300 seconds".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_url(field: &'static str, raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be an http or https URL".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_apis() {
        let flight = FlightConfig::default();
        assert!(flight.flightaware_base_url.contains("flightaware.com"));
        assert_eq!(flight.timeout(), Duration::from_secs(10));
        assert!(flight.validate().is_ok());

        let route = RouteConfig::default();
        assert_eq!(route.fallback_minutes, 30);
        assert!(route.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let route = RouteConfig {
            timeout_secs: 0,
            ..RouteConfig::default()
        };
        assert!(route.validate().is_err());
    }

    #[test]
    fn provider_timeout_must_fit_in_lookup_budget() {
        let flight = FlightConfig {
            timeout_secs: 4,
            provider_timeout_secs: 5,
            ..FlightConfig::default()
        };
        assert!(flight.validate().is_err());

        let flight = FlightConfig {
            provider_timeout_secs: 0,
            ..FlightConfig::default()
        };
        assert!(flight.validate().is_err());

        assert_eq!(FlightConfig::default().provider_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let flight = FlightConfig {
            aviationstack_base_url: "ftp://example.com".into(),
            ..FlightConfig::default()
        };
        assert!(flight.validate().is_err());

        let flight = FlightConfig {
            flightaware_base_url: "not a url".into(),
            ..FlightConfig::default()
        };
        assert!(flight.validate().is_err());
    }
}
