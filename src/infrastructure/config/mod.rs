//! Infrastructure configuration modules.

pub mod logging;
pub mod provider;
pub mod server;
pub mod settings;

pub use settings::{Config, Credentials, DepartureConfig};
