//! URL reading port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by [`UrlReader::read_url`].
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request to {url} returned {status}")]
    Http { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No integration found for {0}")]
    NoIntegration(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}

impl ReadError {
    /// Whether the resource is known to be absent.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Body of a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResponse {
    bytes: Vec<u8>,
}

impl ReadResponse {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Reads the content behind a URL, using provider-specific access rules.
#[async_trait]
pub trait UrlReader: Send + Sync {
    async fn read_url(&self, url: &str) -> Result<ReadResponse, ReadError>;
}
