//! Repository URL parsing.
//!
//! Splits hosted-git browse URLs into host, owner, repository, ref and file
//! path. Three layouts are recognised:
//!
//! - GitHub style: `/<owner>/<repo>/(tree|blob|raw)/<ref>/<path>`
//! - GitLab style: `/<group>/<subgroup>/<repo>/-/(tree|blob|raw)/<ref>/<path>`
//! - Bitbucket style: `/<owner>/<repo>/(src|raw)/<ref>/<path>`

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::errors::{DomainError, DomainResult};

use super::config::IntegrationKind;

/// Ref used when the URL does not name one.
pub const DEFAULT_REF: &str = "HEAD";

/// URL layout of the hosting provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitUrlFlavor {
    GitHub,
    GitLab,
    Bitbucket,
}

/// A parsed repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitUrl {
    pub scheme: String,
    /// Host including a non-default port, e.g. `github.com`.
    pub host: String,
    /// Owner or group path (`group/subgroup` on GitLab).
    pub owner: String,
    pub repo: String,
    pub git_ref: String,
    /// Path inside the repository, without a leading slash.
    pub filepath: String,
    pub flavor: GitUrlFlavor,
}

impl GitUrlFlavor {
    /// Layout served by an integration kind; `None` for generic hosts.
    pub const fn for_kind(kind: IntegrationKind) -> Option<Self> {
        match kind {
            IntegrationKind::GitHub => Some(Self::GitHub),
            IntegrationKind::GitLab => Some(Self::GitLab),
            IntegrationKind::Bitbucket => Some(Self::Bitbucket),
            IntegrationKind::Generic => None,
        }
    }
}

impl GitUrl {
    /// Parse, guessing the layout from the host and path.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::parse_with_flavor(raw, None)
    }

    /// Parse using the layout of the integration that owns the URL.
    pub fn parse_for(raw: &str, kind: IntegrationKind) -> DomainResult<Self> {
        Self::parse_with_flavor(raw, GitUrlFlavor::for_kind(kind))
    }

    fn parse_with_flavor(raw: &str, flavor: Option<GitUrlFlavor>) -> DomainResult<Self> {
        let url = Url::parse(raw)
            .map_err(|e| DomainError::InvalidLocation(format!("{raw}: {e}")))?;
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => {
                return Err(DomainError::InvalidLocation(format!("{raw}: missing host")));
            }
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        let flavor = flavor.unwrap_or_else(|| detect_flavor(&host, &segments));
        let (owner, repo, rest) = match flavor {
            GitUrlFlavor::GitLab => split_gitlab(&segments),
            GitUrlFlavor::GitHub | GitUrlFlavor::Bitbucket => split_owner_repo(&segments),
        }
        .ok_or_else(|| {
            DomainError::InvalidLocation(format!("{raw}: cannot determine owner and repository"))
        })?;

        // rest = [<view>, <ref>, <path>...]
        let (git_ref, filepath) = match rest {
            [_view, git_ref, path @ ..] => (git_ref.to_string(), path.join("/")),
            _ => (DEFAULT_REF.to_string(), String::new()),
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            owner,
            repo: repo.trim_end_matches(".git").to_string(),
            git_ref,
            filepath,
            flavor,
        })
    }

    /// Browse URL of `path` at this URL's ref.
    pub fn blob_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let view = match self.flavor {
            GitUrlFlavor::GitHub => "blob",
            GitUrlFlavor::GitLab => "-/blob",
            GitUrlFlavor::Bitbucket => "src",
        };
        format!(
            "{}://{}/{}/{}/{}/{}/{}",
            self.scheme, self.host, self.owner, self.repo, view, self.git_ref, path
        )
    }
}

fn detect_flavor(host: &str, segments: &[&str]) -> GitUrlFlavor {
    if segments.contains(&"-") || host.contains("gitlab") {
        GitUrlFlavor::GitLab
    } else if host.contains("bitbucket") {
        GitUrlFlavor::Bitbucket
    } else {
        GitUrlFlavor::GitHub
    }
}

fn split_owner_repo<'a>(segments: &'a [&'a str]) -> Option<(String, &'a str, &'a [&'a str])> {
    match segments {
        [owner, repo, rest @ ..] => Some(((*owner).to_string(), *repo, rest)),
        _ => None,
    }
}

fn split_gitlab<'a>(segments: &'a [&'a str]) -> Option<(String, &'a str, &'a [&'a str])> {
    let (project, rest) = match segments.iter().position(|s| *s == "-") {
        Some(idx) => (&segments[..idx], &segments[idx + 1..]),
        None => (segments, &segments[segments.len()..]),
    };
    match project {
        [group @ .., repo] if !group.is_empty() => Some((group.join("/"), *repo, rest)),
        _ => None,
    }
}
