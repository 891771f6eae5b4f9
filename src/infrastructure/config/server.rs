//! HTTP server configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Listen address and optional static frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Overridden by the `PORT` environment variable.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding a pre-built frontend (`index.html` plus assets).
    ///
    /// When unset or missing, `/` answers with a placeholder message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply a `PORT`-style override. Blank values are ignored.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        self.port = raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: "PORT",
            reason: format!("'{raw}' is not a valid port"),
        })?;
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.host",
            }
            .into());
        }
        Ok(())
    }
}
