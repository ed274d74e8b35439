//! Infrastructure layer module
//!
//! - Configuration management
//! - Logging infrastructure
//! - Project setup and runtime wiring

pub mod config;
pub mod logging;
pub mod setup;
