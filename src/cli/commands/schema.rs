//! Implementation of the `scm-insights schema` command.

use anyhow::Result;

use crate::cli::models::SchemaOutput;
use crate::cli::output::output;
use crate::services::{FactRetrieverRegistry, ScmInsightsModule};

pub fn execute(json_mode: bool) -> Result<()> {
    let mut registry = FactRetrieverRegistry::new();
    ScmInsightsModule::register(&mut registry);

    let descriptors = registry
        .ids()
        .map(|id| registry.get(id).map(|retriever| retriever.descriptor()))
        .collect::<Result<Vec<_>, _>>()?;

    output(&SchemaOutput(descriptors), json_mode);
    Ok(())
}
