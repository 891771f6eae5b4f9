//! Command-line interface definitions.
//!
//! Defines the CLI structure for curbside using `clap`: serving the HTTP
//! API, one-off estimates from the terminal, configuration management and
//! diagnostic checks.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::port::PickupRequest;

/// Work out when to leave for an airport pickup
#[derive(Parser, Debug)]
#[command(name = "curbside")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the curbside CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API (and the frontend, when configured)
    Serve(ServeArgs),

    /// Estimate when to leave for a single pickup
    Estimate(EstimateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `curbside config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Subcommands for `curbside check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Check configuration and provider credentials.
    Health(ConfigOverrideArg),
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(short, long)]
    pub force: bool,
}

/// A configuration file that must exist.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// A configuration file that may be omitted.
///
/// Without `--config`, the default location is read when it exists and
/// built-in defaults are used otherwise.
#[derive(Args, Debug, Default)]
pub struct ConfigOverrideArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigOverrideArg,

    /// Port to listen on (overrides config and `PORT`).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the built frontend.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Flight number, e.g. AA100.
    #[arg(short, long)]
    pub flight: String,

    /// Where the driver leaves from.
    #[arg(short, long)]
    pub address: String,

    /// small-hub, major-hub or mega-hub.
    #[arg(long, default_value = "major-hub")]
    pub airport_busy: String,

    /// no, small or big.
    #[arg(long, default_value = "no")]
    pub holiday: String,

    /// no or yes.
    #[arg(long, default_value = "no")]
    pub checked_bags: String,

    #[command(flatten)]
    pub config: ConfigOverrideArg,
}

impl EstimateArgs {
    /// The request exactly as the HTTP surface would receive it.
    #[must_use]
    pub fn request(&self) -> PickupRequest {
        PickupRequest {
            flight: self.flight.clone(),
            address: self.address.clone(),
            airport_busy: self.airport_busy.clone(),
            holiday: self.holiday.clone(),
            checked_bags: self.checked_bags.clone(),
        }
    }
}
