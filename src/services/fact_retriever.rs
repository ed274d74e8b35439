//! Fact retriever contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Config, EntityFilter, FactResult, FactRetrieverDescriptor};
use crate::domain::ports::{CacheStore, CatalogApi, IntegrationResolver, ServiceAuth, UrlReader};

/// Capabilities handed to a retriever for one batch run.
#[derive(Clone)]
pub struct FactRetrieverContext {
    pub config: Config,
    pub catalog: Arc<dyn CatalogApi>,
    pub auth: Arc<dyn ServiceAuth>,
    /// Shared cache store; retrievers scope it to their own namespace.
    pub cache: Arc<dyn CacheStore>,
    pub integrations: Arc<dyn IntegrationResolver>,
    pub reader: Arc<dyn UrlReader>,
    /// Overrides the retriever's own entity filter when set.
    pub entity_filter: Option<EntityFilter>,
}

/// A batch job producing typed facts for catalog entities.
#[async_trait]
pub trait FactRetriever: Send + Sync {
    fn descriptor(&self) -> FactRetrieverDescriptor;

    async fn handler(&self, ctx: &FactRetrieverContext) -> DomainResult<Vec<FactResult>>;
}
