//! HTTP `UrlReader` that fetches raw file content from hosting providers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::HttpConfig;
use crate::domain::ports::{IntegrationResolver, ReadError, ReadResponse, UrlReader};

/// Reads browse URLs by mapping them onto the owning integration's raw
/// content endpoint.
pub struct HttpUrlReader {
    http: Client,
    integrations: Arc<dyn IntegrationResolver>,
}

impl HttpUrlReader {
    pub fn new(http: Client, integrations: Arc<dyn IntegrationResolver>) -> Self {
        Self { http, integrations }
    }

    pub fn from_config(
        config: &HttpConfig,
        integrations: Arc<dyn IntegrationResolver>,
    ) -> DomainResult<Self> {
        Ok(Self::new(build_http_client(config)?, integrations))
    }
}

/// Build the shared HTTP client.
pub fn build_http_client(config: &HttpConfig) -> DomainResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| DomainError::ValidationFailed(format!("failed to build HTTP client: {e}")))
}

#[async_trait]
impl UrlReader for HttpUrlReader {
    #[instrument(skip(self))]
    async fn read_url(&self, url: &str) -> Result<ReadResponse, ReadError> {
        let integration = self
            .integrations
            .by_url(url)
            .ok_or_else(|| ReadError::NoIntegration(url.to_string()))?;
        let raw_url = integration
            .raw_url(url)
            .map_err(|e| ReadError::InvalidUrl(e.to_string()))?;
        debug!(%raw_url, kind = %integration.kind(), "reading url");

        let mut request = self.http.get(&raw_url);
        if let Some(token) = integration.token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ReadError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ReadError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(ReadError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ReadError::Network(e.to_string()))?;
        Ok(ReadResponse::new(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scm::ScmIntegrations;
    use crate::domain::models::{IntegrationConfig, IntegrationKind};
    use mockito::Server;

    fn reader_for(server: &Server, token: Option<&str>) -> HttpUrlReader {
        let mut github = IntegrationConfig::new(IntegrationKind::GitHub, "github.com")
            .with_raw_base_url(server.url());
        github.token = token.map(str::to_string);
        let integrations = Arc::new(ScmIntegrations::from_config(&[github]));
        HttpUrlReader::from_config(&HttpConfig::default(), integrations).unwrap()
    }

    #[tokio::test]
    async fn test_reads_raw_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/o/r/main/README.md")
            .with_status(200)
            .with_body("# Hello")
            .create_async()
            .await;

        let reader = reader_for(&server, None);
        let response = reader
            .read_url("https://github.com/o/r/blob/main/README.md")
            .await
            .unwrap();

        assert_eq!(response.text(), "# Hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sends_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/o/r/main/README.md")
            .match_header("authorization", "Bearer ghp_test")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let reader = reader_for(&server, Some("ghp_test"));
        reader
            .read_url("https://github.com/o/r/blob/main/README.md")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_404_is_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/o/r/gone/README.md")
            .with_status(404)
            .create_async()
            .await;

        let reader = reader_for(&server, None);
        let err = reader
            .read_url("https://github.com/o/r/blob/gone/README.md")
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_server_error_is_classified() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/o/r/main/README.md")
            .with_status(503)
            .create_async()
            .await;

        let reader = reader_for(&server, None);
        let err = reader
            .read_url("https://github.com/o/r/blob/main/README.md")
            .await
            .unwrap_err();
        assert!(matches!(err, ReadError::Http { status: 503, .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unknown_host_has_no_integration() {
        let server = Server::new_async().await;
        let reader = reader_for(&server, None);
        let err = reader
            .read_url("https://unknown.example/o/r/blob/main/README.md")
            .await
            .unwrap_err();
        assert!(matches!(err, ReadError::NoIntegration(_)));
    }
}
