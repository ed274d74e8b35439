//! Cache port for memoized probe outcomes.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::CacheRecord;

/// Key/value cache with per-entry expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> DomainResult<Option<CacheRecord>>;

    /// Store `value` under `key`. `ttl` of `None` uses the store's default.
    async fn set(&self, key: &str, value: CacheRecord, ttl: Option<Duration>) -> DomainResult<()>;
}
