//! Handler for the `config` command group, plus config loading shared by the
//! other commands.

use std::fs;
use std::path::Path;

use super::diagnostic;
use super::output;
use super::paths;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load configuration for commands where the file is optional.
///
/// An explicit path must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_reported(path);
    }
    let default = paths::default_config();
    if default.is_file() {
        load_reported(&default)
    } else {
        Config::parse_toml("")
    }
}

/// Load `path`, rendering a diagnostic against the file on failure.
fn load_reported(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    let result = Config::parse_toml(&content);
    if let Err(e) = &result {
        report(e, &content);
    }
    result
}

/// Print a source-annotated diagnostic when the error has a location.
fn report(err: &crate::error::Error, content: &str) {
    if output::is_json() {
        return;
    }
    if let Some(diag) = diagnostic::ConfigError::from_error(err, content) {
        eprintln!("{:?}", miette::Report::new(diag));
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set FLIGHTAWARE_API_KEY or AVIATIONSTACK_API_KEY, and GOOGLE_MAPS_API_KEY");
    output::note(&format!("3. Run: curbside config validate -c {}", path.display()));
    output::note(&format!("4. Run: curbside serve -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load_reported(path)?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = load_reported(path)?;

    output::success("Configuration is valid");
    output::field("Path", path.display());
    output::field("Listen", config.server.bind_address());
    output::field("Windows", config.egress.arrival_windows.len());
    output::field("Buffer", format!("{} min", config.departure.buffer_minutes));
    Ok(())
}
