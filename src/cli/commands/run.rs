//! Implementation of the `scm-insights run` command.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::models::FactReport;
use crate::cli::output::output;
use crate::domain::models::Config;
use crate::infrastructure::setup::build_context;
use crate::services::{FactRetrieverRegistry, ScmInsightsModule, README_FACT_RETRIEVER_ID};

pub async fn execute(config: &Config, catalog_file: Option<&Path>, json_mode: bool) -> Result<()> {
    let ctx = build_context(config, catalog_file)?;

    let mut registry = FactRetrieverRegistry::new();
    ScmInsightsModule::register(&mut registry);
    let retriever = registry.get(README_FACT_RETRIEVER_ID)?;

    let facts = retriever
        .handler(&ctx)
        .await
        .context("README fact retrieval failed")?;
    info!(entities = facts.len(), "fact retrieval complete");

    output(&FactReport::new(retriever.descriptor(), facts), json_mode);
    Ok(())
}
