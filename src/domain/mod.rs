//! Domain layer for the SCM insights fact retriever
//!
//! This module contains the catalog and fact models plus the port traits
//! that infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
