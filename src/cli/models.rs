//! Output models for CLI commands.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{
    EntityRef, FactResult, FactRetrieverDescriptor, HAS_README_AT_REPOSITORY_ROOT,
};

use super::output::table::{format_fact_table, format_schema_table};
use super::output::CommandOutput;

/// Result of a retriever run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactReport {
    pub retriever_id: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub facts: Vec<FactResult>,
    #[serde(skip)]
    descriptor: FactRetrieverDescriptor,
}

impl FactReport {
    pub fn new(descriptor: FactRetrieverDescriptor, facts: Vec<FactResult>) -> Self {
        Self {
            retriever_id: descriptor.id.clone(),
            version: descriptor.version.clone(),
            generated_at: Utc::now(),
            facts,
            descriptor,
        }
    }

    fn with_readme(&self) -> usize {
        self.facts
            .iter()
            .filter(|f| f.bool_fact(HAS_README_AT_REPOSITORY_ROOT) == Some(true))
            .count()
    }
}

impl CommandOutput for FactReport {
    fn to_human(&self) -> String {
        if self.facts.is_empty() {
            return "No matching entities in the catalog.".to_string();
        }
        format!(
            "{}\n\n{} of {} entities have a README at the repository root",
            format_fact_table(&self.facts, &self.descriptor.schema),
            self.with_readme(),
            self.facts.len()
        )
    }
}

/// Result of probing a single entity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    pub entity: EntityRef,
    pub source_location: Option<String>,
    pub has_readme: bool,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let location = self.source_location.as_deref().unwrap_or("<none>");
        let verdict = if self.has_readme {
            "README found at repository root"
        } else {
            "No README at repository root"
        };
        format!("{}\n  source: {location}\n  {verdict}", self.entity)
    }
}

/// Descriptors of every registered retriever, printed by `schema`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SchemaOutput(pub Vec<FactRetrieverDescriptor>);

impl CommandOutput for SchemaOutput {
    fn to_human(&self) -> String {
        self.0
            .iter()
            .map(|d| {
                let kinds: Vec<&str> = d.entity_filter.0.iter().map(|f| f.kind.as_str()).collect();
                format!(
                    "{} ({}) v{}\n{}\nEntity kinds: {}\n\n{}",
                    d.title,
                    d.id,
                    d.version,
                    d.description,
                    kinds.join(", "),
                    format_schema_table(&d.schema)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        format!("Wrote default configuration to {}", self.config_path.display())
    }
}
