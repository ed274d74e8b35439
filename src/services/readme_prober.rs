//! README presence probe for a single entity.
//!
//! Tries each candidate README at the root of the entity's source repository,
//! following one level of symlink indirection, and memoizes the outcome in
//! the cache keyed by entity reference.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheRecord, Entity, FileType, GitUrl, ReadmeFile, README_TYPES};
use crate::domain::ports::{
    CacheStore, IntegrationResolver, ReadError, ScmIntegration, UrlReader,
};

use super::probe_throttle::ProbeThrottle;
use super::symlink::is_symlink;

/// Checks whether an entity's repository has a README at its root.
pub struct ReadmeProber {
    integrations: Arc<dyn IntegrationResolver>,
    reader: Arc<dyn UrlReader>,
    cache: Arc<dyn CacheStore>,
}

impl ReadmeProber {
    pub fn new(
        integrations: Arc<dyn IntegrationResolver>,
        reader: Arc<dyn UrlReader>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            integrations,
            reader,
            cache,
        }
    }

    /// Probe `entity`, serving from cache when a record exists.
    ///
    /// Unresolvable locations and read failures yield `Ok(false)`; only cache
    /// errors are returned as `Err`.
    #[instrument(skip_all, fields(entity = %entity.entity_ref()))]
    pub async fn check(&self, entity: &Entity) -> DomainResult<bool> {
        let entity_ref = entity.entity_ref().to_string();

        if let Some(record) = self.cache.get(&entity_ref).await? {
            let found = record.is_found();
            if found {
                info!("README check successful for cached entity: \"{entity_ref}\"");
            } else {
                debug!("README file not found in cache");
            }
            return Ok(found);
        }

        let source = match entity.source_location() {
            Ok(source) if source.is_url() => source,
            Ok(source) => {
                info!("Not valid location for {}", source.target);
                return Ok(false);
            }
            Err(e) => {
                info!(error = %e, "Not valid location");
                return Ok(false);
            }
        };

        let Some(integration) = self.integrations.by_url(&source.target) else {
            error!("No integration found for {}", source.target);
            return Ok(false);
        };

        let repository = match integration.parse_url(&source.target) {
            Ok(repository) => repository,
            Err(e) => {
                info!(error = %e, "Unable to parse source location {}", source.target);
                return Ok(false);
            }
        };

        for file_type in README_TYPES {
            match self
                .read_candidate(integration.as_ref(), &repository, &source.target, *file_type)
                .await
            {
                Ok(content) => {
                    self.cache
                        .set(
                            &entity_ref,
                            CacheRecord::Found(ReadmeFile::new(*file_type, content)),
                            None,
                        )
                        .await?;
                    debug!(
                        file = file_type.name,
                        "README check successful for entity: \"{entity_ref}\""
                    );
                    return Ok(true);
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => {
                    info!("README check failed for entity: \"{entity_ref}\" error: \"{e}\"");
                }
            }
        }

        self.cache
            .set(&entity_ref, CacheRecord::NotFound, None)
            .await?;
        Ok(false)
    }

    /// Read one candidate, following a symlink pointer once.
    async fn read_candidate(
        &self,
        integration: &dyn ScmIntegration,
        repository: &GitUrl,
        base: &str,
        file_type: FileType,
    ) -> Result<String, ReadError> {
        let url = integration
            .resolve_url(&repository.blob_url(file_type.name), base)
            .map_err(|e| ReadError::InvalidUrl(e.to_string()))?;
        debug!(%url, "Checking README");

        let content = self.reader.read_url(&url).await?.text();
        if !is_symlink(&content) {
            return Ok(content);
        }

        // Link targets are relative to the directory holding the link.
        let target = integration
            .resolve_url(&content, &url)
            .map_err(|e| ReadError::InvalidUrl(e.to_string()))?;
        debug!(link = %target, "Following README symlink");
        Ok(self.reader.read_url(&target).await?.text())
    }
}

/// [`ReadmeProber`] gated by a batch-wide [`ProbeThrottle`].
pub struct ThrottledReadmeProber {
    prober: ReadmeProber,
    throttle: Arc<ProbeThrottle>,
}

impl ThrottledReadmeProber {
    pub fn new(prober: ReadmeProber, throttle: Arc<ProbeThrottle>) -> Self {
        Self { prober, throttle }
    }

    pub async fn check(&self, entity: &Entity) -> DomainResult<bool> {
        self.throttle.acquire().await;
        self.prober.check(entity).await
    }
}
