//! Registry of named fact retrievers and the SCM module that populates it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};

use super::fact_retriever::FactRetriever;
use super::readme_fact_retriever::{ReadmeFactRetriever, README_FACT_RETRIEVER_ID};

/// Fact retrievers keyed by id.
#[derive(Default)]
pub struct FactRetrieverRegistry {
    retrievers: BTreeMap<String, Arc<dyn FactRetriever>>,
}

impl FactRetrieverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register retrievers under the given ids, replacing existing entries.
    pub fn add_fact_retrievers<I>(&mut self, retrievers: I)
    where
        I: IntoIterator<Item = (String, Arc<dyn FactRetriever>)>,
    {
        for (id, retriever) in retrievers {
            self.retrievers.insert(id, retriever);
        }
    }

    pub fn get(&self, id: &str) -> DomainResult<Arc<dyn FactRetriever>> {
        self.retrievers
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::RetrieverNotFound(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.retrievers.keys().map(String::as_str)
    }
}

/// Registers the source-control fact retrievers.
pub struct ScmInsightsModule;

impl ScmInsightsModule {
    pub const PLUGIN_ID: &'static str = "tech-insights";
    pub const MODULE_ID: &'static str = "scm";

    pub fn register(registry: &mut FactRetrieverRegistry) {
        info!(
            plugin = Self::PLUGIN_ID,
            module = Self::MODULE_ID,
            "Initializing SCM fact retriever"
        );
        let readme: Arc<dyn FactRetriever> = Arc::new(ReadmeFactRetriever::new());
        registry.add_fact_retrievers([(README_FACT_RETRIEVER_ID.to_string(), readme)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_registers_readme_retriever() {
        let mut registry = FactRetrieverRegistry::new();
        ScmInsightsModule::register(&mut registry);

        let retriever = registry.get("readmeFactRetriever").unwrap();
        let descriptor = retriever.descriptor();
        assert_eq!(descriptor.version, "0.2.0");
        assert_eq!(descriptor.title, "README");
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["readmeFactRetriever"]);
    }

    #[test]
    fn test_unknown_retriever() {
        let registry = FactRetrieverRegistry::new();
        assert!(matches!(
            registry.get("nope"),
            Err(DomainError::RetrieverNotFound(_))
        ));
    }
}
