//! Fact retriever reporting whether an entity's repository has a README at
//! its root.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::{info, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    EntityFilter, FactResult, FactRetrieverDescriptor, FactSchemaEntry, FactType,
    HAS_README_AT_REPOSITORY_ROOT,
};
use crate::domain::ports::CacheStore;

use super::fact_retriever::{FactRetriever, FactRetrieverContext};
use super::probe_throttle::ProbeThrottle;
use super::readme_prober::{ReadmeProber, ThrottledReadmeProber};
use super::scoped_cache::ScopedCache;

pub const README_FACT_RETRIEVER_ID: &str = "readmeFactRetriever";

/// Plugin the service credential is requested for.
const CATALOG_PLUGIN_ID: &str = "catalog";

#[derive(Debug, Default, Clone, Copy)]
pub struct ReadmeFactRetriever;

impl ReadmeFactRetriever {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FactRetriever for ReadmeFactRetriever {
    fn descriptor(&self) -> FactRetrieverDescriptor {
        let mut schema = BTreeMap::new();
        schema.insert(
            HAS_README_AT_REPOSITORY_ROOT.to_string(),
            FactSchemaEntry {
                fact_type: FactType::Boolean,
                description: "The entity source repository contains a README file at the root"
                    .to_string(),
            },
        );

        FactRetrieverDescriptor {
            id: README_FACT_RETRIEVER_ID.to_string(),
            version: "0.2.0".to_string(),
            title: "README".to_string(),
            description:
                "Generate facts which indicate the compliance of a README file at the root of the repo"
                    .to_string(),
            // TODO: add the `api` kind once OpenAPI-backed entities carry a usable source location
            entity_filter: EntityFilter::kinds(["component", "system"]),
            schema,
        }
    }

    #[instrument(skip_all, fields(retriever = README_FACT_RETRIEVER_ID))]
    async fn handler(&self, ctx: &FactRetrieverContext) -> DomainResult<Vec<FactResult>> {
        let throttle = Arc::new(ProbeThrottle::from_config(&ctx.config.throttle)?);
        let token = ctx
            .auth
            .get_plugin_request_token(CATALOG_PLUGIN_ID)
            .await?;

        let filter = ctx
            .entity_filter
            .clone()
            .unwrap_or_else(|| self.descriptor().entity_filter);
        let entities = ctx.catalog.get_entities(&filter, token.as_deref()).await?;
        info!(count = entities.len(), "Checking entities for a README");

        let cache_config = &ctx.config.cache;
        let cache: Arc<dyn CacheStore> = Arc::new(ScopedCache::new(
            Arc::clone(&ctx.cache),
            cache_config.namespace.clone(),
            Duration::from_secs(cache_config.default_ttl_secs),
        ));

        let prober = ThrottledReadmeProber::new(
            ReadmeProber::new(Arc::clone(&ctx.integrations), Arc::clone(&ctx.reader), cache),
            throttle,
        );

        try_join_all(entities.iter().map(|entity| {
            let prober = &prober;
            async move {
                let has_readme = prober.check(entity).await?;
                Ok::<_, DomainError>(
                    FactResult::new(entity.entity_ref())
                        .with_fact(HAS_README_AT_REPOSITORY_ROOT, has_readme),
                )
            }
        }))
        .await
    }
}
