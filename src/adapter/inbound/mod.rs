//! Inbound adapters (driving side): the HTTP API and the CLI.

pub mod cli;
pub mod http;
