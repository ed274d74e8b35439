use serde::{Deserialize, Serialize};

/// Main configuration structure for scm-insights
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fact cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Probe throttle configuration
    #[serde(default)]
    pub throttle: ThrottleConfig,

    /// Catalog source configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Service-to-service auth configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Git hosting integrations
    #[serde(default)]
    pub integrations: Vec<IntegrationConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation policy for log files: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Namespace the retriever's records are stored under
    #[serde(default = "default_cache_namespace")]
    pub namespace: String,

    /// TTL applied to records written without an explicit TTL
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,

    /// Maximum number of cached records
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

fn default_cache_namespace() -> String {
    "tech-insights".to_string()
}

const fn default_ttl_secs() -> u64 {
    1800
}

const fn default_max_capacity() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            namespace: default_cache_namespace(),
            default_ttl_secs: default_ttl_secs(),
            max_capacity: default_max_capacity(),
        }
    }
}

/// Probe throttle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ThrottleConfig {
    /// Probes allowed to start per interval
    #[serde(default = "default_throttle_limit")]
    pub limit: u32,

    /// Interval length in milliseconds
    #[serde(default = "default_throttle_interval_ms")]
    pub interval_ms: u64,
}

const fn default_throttle_limit() -> u32 {
    1
}

const fn default_throttle_interval_ms() -> u64 {
    1000
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            limit: default_throttle_limit(),
            interval_ms: default_throttle_interval_ms(),
        }
    }
}

/// Catalog source configuration
///
/// `file` takes precedence over `base_url` when both are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Base URL of the catalog API, e.g. `http://localhost:7007/api/catalog`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Path to a YAML or JSON catalog dump
    #[serde(default)]
    pub file: Option<String>,
}

/// Service-to-service auth configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthConfig {
    /// Static token presented to the catalog
    #[serde(default)]
    pub service_token: Option<String>,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("scm-insights/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Kind of git hosting provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationKind {
    GitHub,
    GitLab,
    Bitbucket,
    Generic,
}

impl std::fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Bitbucket => "bitbucket",
            Self::Generic => "generic",
        };
        f.write_str(s)
    }
}

/// A git hosting integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IntegrationConfig {
    /// Provider kind
    pub kind: IntegrationKind,

    /// Host name matched against entity source locations
    pub host: String,

    /// Access token sent as a bearer token when reading files
    #[serde(default)]
    pub token: Option<String>,

    /// Base URL raw file content is served from
    #[serde(default)]
    pub raw_base_url: Option<String>,
}

impl IntegrationConfig {
    pub fn new(kind: IntegrationKind, host: impl Into<String>) -> Self {
        Self {
            kind,
            host: host.into(),
            token: None,
            raw_base_url: None,
        }
    }

    #[must_use]
    pub fn with_raw_base_url(mut self, raw_base_url: impl Into<String>) -> Self {
        self.raw_base_url = Some(raw_base_url.into());
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
