//! Namespaced view over a shared cache store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::CacheRecord;
use crate::domain::ports::CacheStore;

/// Prefixes keys with a namespace and applies a default TTL.
pub struct ScopedCache {
    inner: Arc<dyn CacheStore>,
    namespace: String,
    default_ttl: Duration,
}

impl ScopedCache {
    pub fn new(inner: Arc<dyn CacheStore>, namespace: impl Into<String>, default_ttl: Duration) -> Self {
        Self {
            inner,
            namespace: namespace.into(),
            default_ttl,
        }
    }

    fn scoped_key(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

#[async_trait]
impl CacheStore for ScopedCache {
    async fn get(&self, key: &str) -> DomainResult<Option<CacheRecord>> {
        self.inner.get(&self.scoped_key(key)).await
    }

    async fn set(&self, key: &str, value: CacheRecord, ttl: Option<Duration>) -> DomainResult<()> {
        self.inner
            .set(&self.scoped_key(key), value, Some(ttl.unwrap_or(self.default_ttl)))
            .await
    }
}
