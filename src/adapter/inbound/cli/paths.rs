//! Path utilities for curbside.
//!
//! Configuration lives under the platform config directory:
//! - `~/.config/curbside/config.toml` on Linux
//! - `~/Library/Application Support/curbside/config.toml` on macOS

use std::path::PathBuf;

/// Returns the curbside config directory.
pub fn home_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("curbside")
}

/// Returns the default config file path.
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
