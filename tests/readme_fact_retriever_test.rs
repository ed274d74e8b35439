//! End-to-end README fact retrieval against a mock raw-content host.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use scm_insights::domain::models::{CacheRecord, HAS_README_AT_REPOSITORY_ROOT};
use scm_insights::infrastructure::setup::build_context;
use scm_insights::{
    CacheStore, DomainError, DomainResult, FactRetriever, ReadmeFactRetriever, ServiceAuth,
};
use tokio_test::{assert_err, assert_ok};

use common::{config_with_raw_base, fixture, setup_test_logging};

fn readme_facts(results: &[scm_insights::FactResult]) -> Vec<(String, Option<bool>)> {
    results
        .iter()
        .map(|r| {
            (
                r.entity.to_string(),
                r.bool_fact(HAS_README_AT_REPOSITORY_ROOT),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_readme_facts_for_catalog() {
    setup_test_logging();
    let mut server = mockito::Server::new_async().await;
    let readme = server
        .mock("GET", "/backstage/backstage/master/README.md")
        .with_status(200)
        .with_body("# Backstage\n\nAn open platform for building developer portals.")
        .expect(1)
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/backstage/backstage/wrong-branch/README.md")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let config = config_with_raw_base(&server.url(), 10);
    let ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();

    let results = assert_ok!(ReadmeFactRetriever.handler(&ctx).await);

    assert_eq!(
        readme_facts(&results),
        vec![
            ("component:default/backstage".to_string(), Some(true)),
            ("component:default/wrong-branch".to_string(), Some(false)),
            ("system:platform/local-only".to_string(), Some(false)),
        ]
    );
    readme.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn test_outcomes_are_cached_per_entity() {
    let mut server = mockito::Server::new_async().await;
    let readme = server
        .mock("GET", "/backstage/backstage/master/README.md")
        .with_status(200)
        .with_body("# Backstage")
        .expect(1)
        .create_async()
        .await;
    let missing = server
        .mock("GET", "/backstage/backstage/wrong-branch/README.md")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let config = config_with_raw_base(&server.url(), 10);
    let ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();

    let first = ReadmeFactRetriever.handler(&ctx).await.unwrap();
    let second = ReadmeFactRetriever.handler(&ctx).await.unwrap();
    assert_eq!(readme_facts(&first), readme_facts(&second));

    // Each README URL is fetched once across both runs.
    readme.assert_async().await;
    missing.assert_async().await;

    match ctx
        .cache
        .get("tech-insights:component:default/backstage")
        .await
        .unwrap()
    {
        Some(CacheRecord::Found(file)) => {
            assert_eq!(file.name, "README.md");
            assert_eq!(file.content, "# Backstage");
        }
        other => panic!("expected found record, got {other:?}"),
    }
    assert_eq!(
        ctx.cache
            .get("tech-insights:component:default/wrong-branch")
            .await
            .unwrap(),
        Some(CacheRecord::NotFound)
    );
    // Entities without a URL location are never cached.
    assert_eq!(
        ctx.cache
            .get("tech-insights:system:platform/local-only")
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_symlinked_readme_is_followed() {
    let mut server = mockito::Server::new_async().await;
    let link = server
        .mock("GET", "/backstage/backstage/master/README.md")
        .with_status(200)
        .with_body("docs/README.md")
        .create_async()
        .await;
    let target = server
        .mock("GET", "/backstage/backstage/master/docs/README.md")
        .with_status(200)
        .with_body("# Real docs")
        .create_async()
        .await;
    server
        .mock("GET", "/backstage/backstage/wrong-branch/README.md")
        .with_status(404)
        .create_async()
        .await;

    let config = config_with_raw_base(&server.url(), 10);
    let ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();

    let results = ReadmeFactRetriever.handler(&ctx).await.unwrap();
    assert_eq!(results[0].bool_fact(HAS_README_AT_REPOSITORY_ROOT), Some(true));
    link.assert_async().await;
    target.assert_async().await;
}

#[tokio::test]
async fn test_probes_are_spaced_by_throttle() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/backstage/backstage/master/README.md")
        .with_status(200)
        .with_body("# Backstage")
        .create_async()
        .await;
    server
        .mock("GET", "/backstage/backstage/wrong-branch/README.md")
        .with_status(404)
        .create_async()
        .await;

    // Three entities, one probe start per 150ms.
    let config = config_with_raw_base(&server.url(), 150);
    let ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();

    let started = Instant::now();
    let results = ReadmeFactRetriever.handler(&ctx).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_missing_catalog_file_fails_batch() {
    let config = config_with_raw_base("http://127.0.0.1:1", 10);
    let ctx = build_context(&config, Some(&fixture("does-not-exist.yaml"))).unwrap();

    assert_err!(ReadmeFactRetriever.handler(&ctx).await);
}

/// Cache backend that is down.
struct UnavailableCache;

#[async_trait]
impl CacheStore for UnavailableCache {
    async fn get(&self, _key: &str) -> DomainResult<Option<CacheRecord>> {
        Err(DomainError::CacheFailed("connection refused".to_string()))
    }

    async fn set(
        &self,
        _key: &str,
        _value: CacheRecord,
        _ttl: Option<Duration>,
    ) -> DomainResult<()> {
        Err(DomainError::CacheFailed("connection refused".to_string()))
    }
}

/// Auth service that rejects every token request.
struct RejectingAuth;

#[async_trait]
impl ServiceAuth for RejectingAuth {
    async fn get_plugin_request_token(
        &self,
        target_plugin_id: &str,
    ) -> DomainResult<Option<String>> {
        Err(DomainError::AuthFailed(format!(
            "no credentials for {target_plugin_id}"
        )))
    }
}

#[tokio::test]
async fn test_cache_failure_aborts_batch() {
    let mut server = mockito::Server::new_async().await;
    let readme = server
        .mock("GET", "/backstage/backstage/master/README.md")
        .with_status(200)
        .with_body("# Backstage")
        .expect(0)
        .create_async()
        .await;

    let config = config_with_raw_base(&server.url(), 10);
    let mut ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();
    ctx.cache = Arc::new(UnavailableCache);

    let err = ReadmeFactRetriever.handler(&ctx).await.unwrap_err();
    assert!(matches!(err, DomainError::CacheFailed(_)), "got {err:?}");
    readme.assert_async().await;
}

#[tokio::test]
async fn test_auth_failure_aborts_batch() {
    let config = config_with_raw_base("http://127.0.0.1:1", 10);
    let mut ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();
    ctx.auth = Arc::new(RejectingAuth);

    let err = ReadmeFactRetriever.handler(&ctx).await.unwrap_err();
    assert!(matches!(err, DomainError::AuthFailed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_zero_throttle_limit_is_an_error() {
    let mut config = config_with_raw_base("http://127.0.0.1:1", 10);
    config.throttle.limit = 0;
    let ctx = build_context(&config, Some(&fixture("catalog.yaml"))).unwrap();

    let err = ReadmeFactRetriever.handler(&ctx).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed(_)), "got {err:?}");
}
