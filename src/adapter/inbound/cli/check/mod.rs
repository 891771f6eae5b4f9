//! Handlers for the `check` command group.

pub mod health;

pub use health::execute_health;
