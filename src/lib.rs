//! scm-insights - README presence facts for catalog entities
//!
//! Retrieves tech-insights facts about the source repositories of software
//! catalog entities. The bundled fact retriever reports whether each
//! entity's repository carries a README at its root, following one level of
//! symlink indirection and caching outcomes per entity.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Entities, facts, configuration and ports
//! - **Service Layer** (`services`): Probing, throttling and fact retrievers
//! - **Adapters** (`adapters`): Catalog, cache, auth and git host implementations
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging and wiring
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use scm_insights::{ConfigLoader, FactRetriever, ReadmeFactRetriever};
//! use scm_insights::infrastructure::setup::build_context;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let ctx = build_context(&config, None)?;
//!     let facts = ReadmeFactRetriever.handler(&ctx).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    CacheRecord, Config, Entity, EntityFilter, EntityRef, FactResult, FactRetrieverDescriptor,
    FactValue, ReadmeFile, HAS_README_AT_REPOSITORY_ROOT,
};
pub use domain::ports::{CacheStore, CatalogApi, IntegrationResolver, ServiceAuth, UrlReader};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    is_symlink, FactRetriever, FactRetrieverContext, FactRetrieverRegistry, ProbeThrottle,
    ReadmeFactRetriever, ReadmeProber, ScmInsightsModule, ThrottledReadmeProber,
};
