//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across integration test files.

use std::path::PathBuf;

use scm_insights::domain::models::{Config, IntegrationConfig, IntegrationKind, ThrottleConfig};

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Configuration serving github.com raw content from `raw_base_url`.
pub fn config_with_raw_base(raw_base_url: &str, throttle_interval_ms: u64) -> Config {
    Config {
        throttle: ThrottleConfig {
            limit: 1,
            interval_ms: throttle_interval_ms,
        },
        integrations: vec![IntegrationConfig::new(IntegrationKind::GitHub, "github.com")
            .with_raw_base_url(raw_base_url)],
        ..Default::default()
    }
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
