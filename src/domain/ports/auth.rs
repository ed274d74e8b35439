//! Service-to-service authentication port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Issues credentials for calls to other plugins.
#[async_trait]
pub trait ServiceAuth: Send + Sync {
    /// Token to present when calling `target_plugin_id`, if any is required.
    async fn get_plugin_request_token(&self, target_plugin_id: &str)
        -> DomainResult<Option<String>>;
}
