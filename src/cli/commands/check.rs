//! Implementation of the `scm-insights check` command.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::models::CheckOutput;
use crate::cli::output::output;
use crate::domain::errors::DomainError;
use crate::domain::models::{Config, EntityFilter, EntityRef};
use crate::infrastructure::setup::build_context;
use crate::services::{ReadmeProber, ScopedCache};

pub async fn execute(
    config: &Config,
    entity_ref: &str,
    catalog_file: Option<&Path>,
    json_mode: bool,
) -> Result<()> {
    let wanted: EntityRef = entity_ref.parse()?;
    let ctx = build_context(config, catalog_file)?;

    let token = ctx.auth.get_plugin_request_token("catalog").await?;
    let entities = ctx
        .catalog
        .get_entities(&EntityFilter::default(), token.as_deref())
        .await
        .context("Failed to fetch entities from the catalog")?;
    let entity = entities
        .into_iter()
        .find(|e| wanted.matches(e))
        .ok_or_else(|| DomainError::EntityNotFound(wanted.to_string()))?;

    let cache = ScopedCache::new(
        Arc::clone(&ctx.cache),
        config.cache.namespace.clone(),
        Duration::from_secs(config.cache.default_ttl_secs),
    );
    let prober = ReadmeProber::new(
        Arc::clone(&ctx.integrations),
        Arc::clone(&ctx.reader),
        Arc::new(cache),
    );
    let has_readme = prober.check(&entity).await?;

    output(
        &CheckOutput {
            entity: entity.entity_ref(),
            source_location: entity
                .source_location()
                .ok()
                .map(|l| format!("{}:{}", l.location_type, l.target)),
            has_readme,
        },
        json_mode,
    );
    Ok(())
}
