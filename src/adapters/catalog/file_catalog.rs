//! Catalog backed by a YAML or JSON dump on disk.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Entity, EntityFilter};
use crate::domain::ports::CatalogApi;

use super::EntityListing;

/// Reads entities from a file on every request.
///
/// The file holds either `items: [...]` or a bare list of entities. JSON is
/// accepted as a subset of YAML.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogApi for FileCatalog {
    async fn get_entities(
        &self,
        filter: &EntityFilter,
        _token: Option<&str>,
    ) -> DomainResult<Vec<Entity>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::CatalogUnavailable(format!("{}: {e}", self.path.display()))
        })?;
        let listing: EntityListing = serde_yaml::from_str(&raw)?;

        Ok(listing
            .into_entities()
            .into_iter()
            .filter(|entity| filter.matches(entity))
            .collect())
    }
}
