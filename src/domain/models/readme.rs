//! README candidates and cached probe outcomes.

use serde::{Deserialize, Serialize};

/// A candidate file name together with its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    pub name: &'static str,
    pub mime_type: &'static str,
}

/// README variants tried in order at the repository root.
///
/// `README`, `README.rst`, `README.txt` and `README.MD` are recognised
/// variants but are not probed.
pub const README_TYPES: &[FileType] = &[FileType {
    name: "README.md",
    mime_type: "text/markdown",
}];

/// A README located during a probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeFile {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub content: String,
}

impl ReadmeFile {
    pub fn new(file_type: FileType, content: String) -> Self {
        Self {
            name: file_type.name.to_string(),
            mime_type: file_type.mime_type.to_string(),
            content,
        }
    }
}

/// Memoized outcome of a README probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CacheRecord {
    Found(ReadmeFile),
    /// Placeholder recorded when no candidate could be read.
    NotFound,
}

impl CacheRecord {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
