//! Infrastructure adapters for external systems.

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod mock;
pub mod scm;
