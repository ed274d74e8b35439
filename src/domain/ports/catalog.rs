//! Catalog port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Entity, EntityFilter};

/// Read access to the software catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch every entity matching `filter`.
    ///
    /// `token` is the service credential obtained from [`ServiceAuth`](super::ServiceAuth).
    async fn get_entities(
        &self,
        filter: &EntityFilter,
        token: Option<&str>,
    ) -> DomainResult<Vec<Entity>>;
}
