//! Catalog clients.

pub mod file_catalog;
pub mod http_catalog;

pub use file_catalog::FileCatalog;
pub use http_catalog::HttpCatalogClient;

use serde::Deserialize;

use crate::domain::models::Entity;

/// Entity listing as served by the catalog API or stored in a dump.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntityListing {
    Items { items: Vec<Entity> },
    List(Vec<Entity>),
}

impl EntityListing {
    fn into_entities(self) -> Vec<Entity> {
        match self {
            Self::Items { items } => items,
            Self::List(items) => items,
        }
    }
}
