//! `CacheStore` backed by a moka future cache.
//!
//! Each entry carries its own TTL; the store's default applies to writes
//! that do not name one.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheConfig, CacheRecord};
use crate::domain::ports::CacheStore;

#[derive(Debug, Clone)]
struct CacheEntry {
    record: CacheRecord,
    ttl: Duration,
}

/// Expires each entry after its own TTL, restarting on overwrite.
struct PerEntryTtl;

impl Expiry<String, CacheEntry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process TTL cache.
pub struct MokaCacheStore {
    cache: Cache<String, CacheEntry>,
    default_ttl: Duration,
}

impl MokaCacheStore {
    pub fn new(max_capacity: u64, default_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache, default_ttl }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.max_capacity,
            Duration::from_secs(config.default_ttl_secs),
        )
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> DomainResult<Option<CacheRecord>> {
        Ok(self.cache.get(key).await.map(|entry| entry.record))
    }

    async fn set(&self, key: &str, value: CacheRecord, ttl: Option<Duration>) -> DomainResult<()> {
        let entry = CacheEntry {
            record: value,
            ttl: ttl.unwrap_or(self.default_ttl),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }
}
