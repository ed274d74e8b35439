//! Catalog entity model.
//!
//! Entities are read-only snapshots fetched from the catalog on every batch
//! run. Only the fields the fact retrievers need are typed; `spec` is kept as
//! an opaque JSON value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Namespace assumed when an entity does not declare one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Annotation holding the entity's source code location.
pub const ANNOTATION_SOURCE_LOCATION: &str = "backstage.io/source-location";

/// Annotation holding the location the entity was ingested from.
pub const ANNOTATION_MANAGED_BY_LOCATION: &str = "backstage.io/managed-by-location";

/// A catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub api_version: String,
    pub kind: String,
    pub metadata: EntityMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<serde_json::Value>,
}

/// Entity metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl Entity {
    /// Namespace of the entity, falling back to `default`.
    pub fn namespace(&self) -> &str {
        self.metadata
            .namespace
            .as_deref()
            .unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Compound reference identifying this entity.
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(&self.kind, self.namespace(), &self.metadata.name)
    }

    /// Look up an annotation value.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }

    /// Where the entity's backing source code lives.
    ///
    /// Prefers the source-location annotation and falls back to the
    /// managed-by location.
    pub fn source_location(&self) -> Result<LocationSpec, DomainError> {
        let raw = self
            .annotation(ANNOTATION_SOURCE_LOCATION)
            .or_else(|| self.annotation(ANNOTATION_MANAGED_BY_LOCATION))
            .ok_or_else(|| {
                DomainError::InvalidLocation(format!(
                    "entity '{}' has no location annotation",
                    self.entity_ref()
                ))
            })?;
        raw.parse()
    }
}

/// Kind/namespace/name triple uniquely identifying an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(kind: &str, namespace: &str, name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

/// Stringified as `kind:namespace/name` with kind and namespace lowercased.
impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}",
            self.kind.to_lowercase(),
            self.namespace.to_lowercase(),
            self.name
        )
    }
}

impl FromStr for EntityRef {
    type Err = DomainError;

    /// Parses `kind:namespace/name` or `kind:name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidEntityRef(format!("missing kind in '{s}'")))?;
        let (namespace, name) = rest.split_once('/').unwrap_or((DEFAULT_NAMESPACE, rest));

        if kind.is_empty() || namespace.is_empty() || name.is_empty() {
            return Err(DomainError::InvalidEntityRef(s.to_string()));
        }
        Ok(Self::new(kind, namespace, name))
    }
}

impl EntityRef {
    /// Case-insensitive match on kind and namespace, exact match on name.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.kind.eq_ignore_ascii_case(&entity.kind)
            && self.namespace.eq_ignore_ascii_case(entity.namespace())
            && self.name == entity.metadata.name
    }
}

/// A `type:target` location reference, e.g. `url:https://github.com/o/r`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSpec {
    #[serde(rename = "type")]
    pub location_type: String,
    pub target: String,
}

impl LocationSpec {
    pub fn is_url(&self) -> bool {
        self.location_type == "url"
    }
}

impl FromStr for LocationSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (location_type, target) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidLocation(format!("missing type in '{s}'")))?;
        if location_type.is_empty() || target.is_empty() {
            return Err(DomainError::InvalidLocation(s.to_string()));
        }
        Ok(Self {
            location_type: location_type.to_string(),
            target: target.to_string(),
        })
    }
}

/// One alternative of an entity filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityKindFilter {
    pub kind: String,
}

/// Entity filter; an entity matches when any alternative matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityFilter(pub Vec<EntityKindFilter>);

impl EntityFilter {
    pub fn kinds<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            kinds
                .into_iter()
                .map(|kind| EntityKindFilter { kind: kind.into() })
                .collect(),
        )
    }

    /// An empty filter matches everything.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.0.is_empty()
            || self
                .0
                .iter()
                .any(|f| f.kind.eq_ignore_ascii_case(&entity.kind))
    }
}
