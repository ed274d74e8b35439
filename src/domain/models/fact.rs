//! Fact records and retriever descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity::{EntityFilter, EntityRef};

/// Name of the README fact.
pub const HAS_README_AT_REPOSITORY_ROOT: &str = "hasReadmeAtRepositoryRoot";

/// Facts produced for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactResult {
    pub entity: EntityRef,
    pub facts: BTreeMap<String, FactValue>,
}

impl FactResult {
    pub fn new(entity: EntityRef) -> Self {
        Self {
            entity,
            facts: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_fact(mut self, name: &str, value: impl Into<FactValue>) -> Self {
        self.facts.insert(name.to_string(), value.into());
        self
    }

    pub fn bool_fact(&self, name: &str) -> Option<bool> {
        match self.facts.get(name) {
            Some(FactValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Value of a single fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<bool> for FactValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Declared type of a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactType {
    Boolean,
    Integer,
    Float,
    String,
}

/// Schema entry for one fact, documented for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSchemaEntry {
    #[serde(rename = "type")]
    pub fact_type: FactType,
    pub description: String,
}

pub type FactSchema = BTreeMap<String, FactSchemaEntry>;

/// Static description of a fact retriever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactRetrieverDescriptor {
    pub id: String,
    pub version: String,
    pub title: String,
    pub description: String,
    pub entity_filter: EntityFilter,
    pub schema: FactSchema,
}
