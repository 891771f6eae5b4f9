//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, component wiring and process lifecycle.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root and HTTP server lifecycle
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions
//! - [`health`] - Startup health report

pub mod bootstrap;
pub mod config;
pub mod factory;
pub mod health;
