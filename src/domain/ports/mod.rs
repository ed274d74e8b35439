//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - CatalogApi: entity listing
//! - ServiceAuth: service-to-service credentials
//! - CacheStore: memoization of probe outcomes
//! - UrlReader: reading remote file content
//! - IntegrationResolver / ScmIntegration: git hosting URL rules

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod integration;
pub mod url_reader;

pub use auth::ServiceAuth;
pub use cache::CacheStore;
pub use catalog::CatalogApi;
pub use integration::{IntegrationResolver, ScmIntegration};
pub use url_reader::{ReadError, ReadResponse, UrlReader};
