//! Git hosting integration port.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{GitUrl, IntegrationKind};

/// A git hosting provider known by configuration.
pub trait ScmIntegration: Send + Sync {
    fn kind(&self) -> IntegrationKind;

    fn host(&self) -> &str;

    /// Token used when reading from this host.
    fn token(&self) -> Option<&str>;

    /// Parse a repository URL using this host's URL layout.
    fn parse_url(&self, url: &str) -> DomainResult<GitUrl> {
        GitUrl::parse_for(url, self.kind())
    }

    /// Resolve `url` against `base`.
    ///
    /// Absolute URLs are returned unchanged; a leading `/` addresses the
    /// repository root at the base's ref; anything else is resolved
    /// relative to `base`.
    fn resolve_url(&self, url: &str, base: &str) -> DomainResult<String>;

    /// URL serving the raw content of the file addressed by `url`.
    fn raw_url(&self, url: &str) -> DomainResult<String>;
}

/// Looks up the integration responsible for a URL.
pub trait IntegrationResolver: Send + Sync {
    fn by_url(&self, url: &str) -> Option<Arc<dyn ScmIntegration>>;
}
