//! Static service token issuer.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::ports::ServiceAuth;

/// Presents the same configured token to every target plugin.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuth {
    token: Option<String>,
}

impl StaticTokenAuth {
    pub const fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl ServiceAuth for StaticTokenAuth {
    async fn get_plugin_request_token(
        &self,
        target_plugin_id: &str,
    ) -> DomainResult<Option<String>> {
        tracing::trace!(target_plugin_id, has_token = self.token.is_some(), "issuing service token");
        Ok(self.token.clone())
    }
}
