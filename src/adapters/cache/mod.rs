//! In-memory caching for probe outcomes.
//!
//! Uses `moka` for concurrent caching with per-entry TTL.

pub mod moka_cache_store;

pub use moka_cache_store::MokaCacheStore;
