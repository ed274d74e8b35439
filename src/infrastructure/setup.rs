//! Project setup and runtime wiring
//!
//! Handles:
//! - Configuration directory creation with a default config file
//! - Construction of the capabilities handed to fact retrievers

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::auth::StaticTokenAuth;
use crate::adapters::cache::MokaCacheStore;
use crate::adapters::catalog::{FileCatalog, HttpCatalogClient};
use crate::adapters::scm::{build_http_client, HttpUrlReader, ScmIntegrations};
use crate::domain::models::Config;
use crate::domain::ports::{CatalogApi, IntegrationResolver};
use crate::services::FactRetrieverContext;

/// Directory holding project configuration
pub const CONFIG_DIR: &str = ".scm-insights";

/// Default configuration template content
const DEFAULT_CONFIG_TEMPLATE: &str = r"# scm-insights configuration
# Override settings by editing this file or setting environment variables
# with the SCM_INSIGHTS_ prefix, e.g.
#   export SCM_INSIGHTS_LOGGING__LEVEL=debug
#   export SCM_INSIGHTS_AUTH__SERVICE_TOKEN=...

logging:
  level: info
  format: pretty

cache:
  namespace: tech-insights
  default_ttl_secs: 1800

# Probe starts allowed per interval across a whole batch
throttle:
  limit: 1
  interval_ms: 1000

catalog:
  base_url: http://localhost:7007/api/catalog
  # file: catalog.yaml

integrations:
  - kind: github
    host: github.com
    # token: ghp_...
";

/// Create `.scm-insights/config.yaml` under `root`.
///
/// Returns the path of the written file. Refuses to overwrite an existing
/// file unless `force` is set.
pub fn init_project(root: &Path, force: bool) -> Result<PathBuf> {
    let dir = root.join(CONFIG_DIR);
    let path = dir.join("config.yaml");

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote default configuration");
    Ok(path)
}

/// Build the capabilities for one batch run from configuration.
///
/// `catalog_file` overrides the configured catalog source.
pub fn build_context(config: &Config, catalog_file: Option<&Path>) -> Result<FactRetrieverContext> {
    let http = build_http_client(&config.http).context("Failed to build HTTP client")?;
    let scm = ScmIntegrations::from_config(&config.integrations);
    tracing::debug!(hosts = ?scm.hosts().collect::<Vec<_>>(), "git host integrations");
    let integrations: Arc<dyn IntegrationResolver> = Arc::new(scm);

    let file = catalog_file
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.file.as_ref().map(PathBuf::from));
    let catalog: Arc<dyn CatalogApi> = if let Some(path) = file {
        Arc::new(FileCatalog::new(path))
    } else if let Some(base_url) = &config.catalog.base_url {
        Arc::new(HttpCatalogClient::new(http.clone(), base_url.clone()))
    } else {
        bail!("No catalog configured: set catalog.base_url or catalog.file");
    };

    Ok(FactRetrieverContext {
        config: config.clone(),
        catalog,
        auth: Arc::new(StaticTokenAuth::new(config.auth.service_token.clone())),
        cache: Arc::new(MokaCacheStore::from_config(&config.cache)),
        integrations: Arc::clone(&integrations),
        reader: Arc::new(HttpUrlReader::new(http, integrations)),
        entity_filter: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;

    #[test]
    fn test_init_project_writes_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_project(dir.path(), false).unwrap();

        assert!(path.ends_with(".scm-insights/config.yaml"));
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.cache.namespace, "tech-insights");
        assert_eq!(config.integrations.len(), 1);
    }

    #[test]
    fn test_init_project_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), false).unwrap();

        assert!(init_project(dir.path(), false).is_err());
        assert!(init_project(dir.path(), true).is_ok());
    }

    #[test]
    fn test_build_context_requires_catalog() {
        assert!(build_context(&Config::default(), None).is_err());
        assert!(build_context(&Config::default(), Some(Path::new("catalog.yaml"))).is_ok());
    }
}
