//! HTTP client for the catalog `entities` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Entity, EntityFilter};
use crate::domain::ports::CatalogApi;

use super::EntityListing;

/// Catalog client speaking the catalog REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: Client,
    /// Catalog API root, e.g. `http://localhost:7007/api/catalog`
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    async fn get_entities(
        &self,
        filter: &EntityFilter,
        token: Option<&str>,
    ) -> DomainResult<Vec<Entity>> {
        let query: Vec<(&str, String)> = filter
            .0
            .iter()
            .map(|f| ("filter", format!("kind={}", f.kind)))
            .collect();

        let mut request = self
            .http
            .get(format!("{}/entities", self.base_url))
            .query(&query);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(|e| {
            DomainError::CatalogUnavailable(format!("catalog request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::CatalogUnavailable(format!(
                "catalog returned {status}: {body}"
            )));
        }

        let listing: EntityListing = resp.json().await.map_err(|e| {
            DomainError::CatalogUnavailable(format!("catalog response parse failed: {e}"))
        })?;
        let entities = listing.into_entities();
        debug!(count = entities.len(), "fetched entities");
        Ok(entities)
    }
}
