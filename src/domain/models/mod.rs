//! Domain models for catalog entities, repository locations and facts.

pub mod config;
pub mod entity;
pub mod fact;
pub mod git_url;
pub mod readme;

pub use config::{
    AuthConfig, CacheConfig, CatalogConfig, Config, HttpConfig, IntegrationConfig,
    IntegrationKind, LoggingConfig, ThrottleConfig,
};
pub use entity::{
    Entity, EntityFilter, EntityKindFilter, EntityMetadata, EntityRef, LocationSpec,
    ANNOTATION_MANAGED_BY_LOCATION, ANNOTATION_SOURCE_LOCATION, DEFAULT_NAMESPACE,
};
pub use fact::{
    FactResult, FactRetrieverDescriptor, FactSchema, FactSchemaEntry, FactType, FactValue,
    HAS_README_AT_REPOSITORY_ROOT,
};
pub use git_url::{GitUrl, GitUrlFlavor, DEFAULT_REF};
pub use readme::{CacheRecord, FileType, ReadmeFile, README_TYPES};
