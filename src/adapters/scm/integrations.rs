//! Configured git hosting integrations.
//!
//! Integrations are matched by URL host. `github.com`, `gitlab.com` and
//! `bitbucket.org` are always available, unauthenticated unless configured.

use std::sync::Arc;

use url::Url;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{GitUrl, IntegrationConfig, IntegrationKind};
use crate::domain::ports::{IntegrationResolver, ScmIntegration};

const DEFAULT_INTEGRATIONS: &[(IntegrationKind, &str)] = &[
    (IntegrationKind::GitHub, "github.com"),
    (IntegrationKind::GitLab, "gitlab.com"),
    (IntegrationKind::Bitbucket, "bitbucket.org"),
];

/// A single hosting integration.
#[derive(Debug, Clone)]
pub struct GitHostIntegration {
    config: IntegrationConfig,
}

impl GitHostIntegration {
    pub const fn new(config: IntegrationConfig) -> Self {
        Self { config }
    }

    /// Base URL raw file content is served from.
    fn raw_base(&self) -> String {
        if let Some(base) = &self.config.raw_base_url {
            return base.trim_end_matches('/').to_string();
        }
        match self.config.kind {
            IntegrationKind::GitHub if self.config.host == "github.com" => {
                "https://raw.githubusercontent.com".to_string()
            }
            // GitHub Enterprise serves raw files under /raw
            IntegrationKind::GitHub => format!("https://{}/raw", self.config.host),
            _ => format!("https://{}", self.config.host),
        }
    }
}

impl ScmIntegration for GitHostIntegration {
    fn kind(&self) -> IntegrationKind {
        self.config.kind
    }

    fn host(&self) -> &str {
        &self.config.host
    }

    fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    fn resolve_url(&self, url: &str, base: &str) -> DomainResult<String> {
        if Url::parse(url).is_ok() {
            return Ok(url.to_string());
        }

        if url.starts_with('/') {
            return Ok(self.parse_url(base)?.blob_url(url));
        }

        let base = Url::parse(base)
            .map_err(|e| DomainError::InvalidLocation(format!("{base}: {e}")))?;
        base.join(url)
            .map(String::from)
            .map_err(|e| DomainError::InvalidLocation(format!("{url}: {e}")))
    }

    fn raw_url(&self, url: &str) -> DomainResult<String> {
        if self.config.kind == IntegrationKind::Generic {
            return Ok(url.to_string());
        }

        let location = self.parse_url(url)?;
        if location.filepath.is_empty() {
            return Err(DomainError::InvalidLocation(format!(
                "{url} does not address a file"
            )));
        }

        let GitUrl {
            owner,
            repo,
            git_ref,
            filepath,
            ..
        } = location;
        let base = self.raw_base();
        Ok(match self.config.kind {
            IntegrationKind::GitHub => format!("{base}/{owner}/{repo}/{git_ref}/{filepath}"),
            IntegrationKind::GitLab => format!("{base}/{owner}/{repo}/-/raw/{git_ref}/{filepath}"),
            IntegrationKind::Bitbucket => format!("{base}/{owner}/{repo}/raw/{git_ref}/{filepath}"),
            IntegrationKind::Generic => url.to_string(),
        })
    }
}

/// All configured integrations.
#[derive(Clone)]
pub struct ScmIntegrations {
    integrations: Vec<Arc<GitHostIntegration>>,
}

impl ScmIntegrations {
    /// Build from configuration, appending defaults for well-known hosts.
    pub fn from_config(configs: &[IntegrationConfig]) -> Self {
        let mut integrations: Vec<Arc<GitHostIntegration>> = configs
            .iter()
            .cloned()
            .map(|c| Arc::new(GitHostIntegration::new(c)))
            .collect();

        for (kind, host) in DEFAULT_INTEGRATIONS {
            if !configs.iter().any(|c| c.host.eq_ignore_ascii_case(host)) {
                integrations.push(Arc::new(GitHostIntegration::new(IntegrationConfig::new(
                    *kind, *host,
                ))));
            }
        }

        Self { integrations }
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.integrations.iter().map(|i| i.host())
    }
}

impl IntegrationResolver for ScmIntegrations {
    fn by_url(&self, url: &str) -> Option<Arc<dyn ScmIntegration>> {
        let parsed = Url::parse(url).ok()?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => return None,
        };

        self.integrations
            .iter()
            .find(|i| i.host().eq_ignore_ascii_case(&host))
            .map(|i| Arc::clone(i) as Arc<dyn ScmIntegration>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> GitHostIntegration {
        GitHostIntegration::new(IntegrationConfig::new(IntegrationKind::GitHub, "github.com"))
    }

    #[test]
    fn test_defaults_are_present() {
        let integrations = ScmIntegrations::from_config(&[]);
        let hosts: Vec<_> = integrations.hosts().collect();
        assert_eq!(hosts, vec!["github.com", "gitlab.com", "bitbucket.org"]);
    }

    #[test]
    fn test_configured_host_replaces_default() {
        let configured = IntegrationConfig::new(IntegrationKind::GitHub, "github.com")
            .with_token("ghp_secret");
        let integrations = ScmIntegrations::from_config(&[configured]);

        assert_eq!(integrations.hosts().count(), 3);
        let integration = integrations
            .by_url("https://github.com/o/r/tree/main")
            .unwrap();
        assert_eq!(integration.token(), Some("ghp_secret"));
    }

    #[test]
    fn test_by_url_unknown_host() {
        let integrations = ScmIntegrations::from_config(&[]);
        assert!(integrations.by_url("https://example.com/o/r").is_none());
        assert!(integrations.by_url("not a url").is_none());
    }

    #[test]
    fn test_resolve_absolute_url_is_unchanged() {
        let url = "https://github.com/o/r/blob/main/README.md";
        assert_eq!(
            github().resolve_url(url, "https://github.com/o/r/tree/dev/").unwrap(),
            url
        );
    }

    #[test]
    fn test_resolve_relative_url() {
        let resolved = github()
            .resolve_url("docs/README.md", "https://github.com/o/r/blob/main/README.md")
            .unwrap();
        assert_eq!(resolved, "https://github.com/o/r/blob/main/docs/README.md");
    }

    #[test]
    fn test_resolve_root_relative_url() {
        let resolved = github()
            .resolve_url("/docs/index.md", "https://github.com/o/r/tree/main/sub/dir")
            .unwrap();
        assert_eq!(resolved, "https://github.com/o/r/blob/main/docs/index.md");
    }

    #[test]
    fn test_raw_url_github() {
        let raw = github()
            .raw_url("https://github.com/o/r/blob/main/docs/README.md")
            .unwrap();
        assert_eq!(raw, "https://raw.githubusercontent.com/o/r/main/docs/README.md");
    }

    #[test]
    fn test_raw_url_with_configured_base() {
        let integration = GitHostIntegration::new(
            IntegrationConfig::new(IntegrationKind::GitHub, "github.com")
                .with_raw_base_url("http://127.0.0.1:1234/"),
        );
        let raw = integration
            .raw_url("https://github.com/o/r/blob/v2/README.md")
            .unwrap();
        assert_eq!(raw, "http://127.0.0.1:1234/o/r/v2/README.md");
    }

    #[test]
    fn test_raw_url_gitlab_and_bitbucket() {
        let gitlab =
            GitHostIntegration::new(IntegrationConfig::new(IntegrationKind::GitLab, "gitlab.com"));
        assert_eq!(
            gitlab
                .raw_url("https://gitlab.com/g/s/r/-/blob/main/README.md")
                .unwrap(),
            "https://gitlab.com/g/s/r/-/raw/main/README.md"
        );

        let bitbucket = GitHostIntegration::new(IntegrationConfig::new(
            IntegrationKind::Bitbucket,
            "bitbucket.org",
        ));
        assert_eq!(
            bitbucket
                .raw_url("https://bitbucket.org/t/r/src/main/README.md")
                .unwrap(),
            "https://bitbucket.org/t/r/raw/main/README.md"
        );
    }

    #[test]
    fn test_raw_url_requires_file_path() {
        assert!(github().raw_url("https://github.com/o/r/tree/main/").is_err());
    }

    #[test]
    fn test_generic_integration_passes_through() {
        let generic = GitHostIntegration::new(IntegrationConfig::new(
            IntegrationKind::Generic,
            "git.example.com",
        ));
        let url = "https://git.example.com/files/README.md";
        assert_eq!(generic.raw_url(url).unwrap(), url);
    }
}
