use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Cache namespace cannot be empty")]
    EmptyCacheNamespace,

    #[error("Invalid default_ttl_secs: {0}. Must be at least 1")]
    InvalidTtl(u64),

    #[error("Invalid throttle limit: {0}. Must be at least 1")]
    InvalidThrottleLimit(u32),

    #[error("Invalid throttle interval_ms: {0}. Must be at least 1")]
    InvalidThrottleInterval(u64),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .scm-insights/config.yaml (project config)
    /// 3. .scm-insights/local.yaml (local overrides, optional)
    /// 4. Environment variables (SCM_INSIGHTS_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".scm-insights/config.yaml"))
            .merge(Yaml::file(".scm-insights/local.yaml"))
            .merge(Env::prefixed("SCM_INSIGHTS_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("SCM_INSIGHTS_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if config.cache.namespace.is_empty() {
            return Err(ConfigError::EmptyCacheNamespace);
        }

        if config.cache.default_ttl_secs == 0 {
            return Err(ConfigError::InvalidTtl(config.cache.default_ttl_secs));
        }

        if config.throttle.limit == 0 {
            return Err(ConfigError::InvalidThrottleLimit(config.throttle.limit));
        }

        if config.throttle.interval_ms == 0 {
            return Err(ConfigError::InvalidThrottleInterval(
                config.throttle.interval_ms,
            ));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        for integration in &config.integrations {
            if integration.host.is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} integration host cannot be empty",
                    integration.kind
                )));
            }
            if let Some(raw_base_url) = &integration.raw_base_url {
                url::Url::parse(raw_base_url).map_err(|e| {
                    ConfigError::ValidationFailed(format!(
                        "integration '{}' raw_base_url is invalid: {e}",
                        integration.host
                    ))
                })?;
            }
        }

        if let Some(base_url) = &config.catalog.base_url {
            url::Url::parse(base_url).map_err(|e| {
                ConfigError::ValidationFailed(format!("catalog base_url is invalid: {e}"))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::{IntegrationKind, ThrottleConfig};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache.namespace, "tech-insights");
        assert_eq!(config.cache.default_ttl_secs, 1800);
        assert_eq!(config.throttle.limit, 1);
        assert_eq!(config.throttle.interval_ms, 1000);
        assert_eq!(config.logging.level, "info");
        assert!(config.integrations.is_empty());
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
logging:
  level: debug
  format: json
cache:
  namespace: insights
  default_ttl_secs: 60
throttle:
  limit: 2
  interval_ms: 500
catalog:
  base_url: http://localhost:7007/api/catalog
auth:
  service_token: secret
integrations:
  - kind: github
    host: ghe.example.com
    token: ghp_abc
    raw_base_url: https://ghe.example.com/raw
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.cache.namespace, "insights");
        assert_eq!(config.cache.default_ttl_secs, 60);
        assert_eq!(config.throttle.limit, 2);
        assert_eq!(config.auth.service_token.as_deref(), Some("secret"));
        assert_eq!(config.integrations.len(), 1);
        assert_eq!(config.integrations[0].kind, IntegrationKind::GitHub);
        assert_eq!(config.integrations[0].token.as_deref(), Some("ghp_abc"));

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_zero_throttle_limit() {
        let config = Config {
            throttle: ThrottleConfig {
                limit: 0,
                interval_ms: 1000,
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidThrottleLimit(0))
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_validate_zero_ttl() {
        let mut config = Config::default();
        config.cache.default_ttl_secs = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTtl(0))
        ));
    }

    #[test]
    fn test_validate_bad_catalog_url() {
        let mut config = Config::default();
        config.catalog.base_url = Some("not a url".to_string());

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_load_from_file_with_env_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cache:\n  namespace: from-file\n  default_ttl_secs: 10").unwrap();

        temp_env::with_var("SCM_INSIGHTS_CACHE__DEFAULT_TTL_SECS", Some("99"), || {
            let config = ConfigLoader::load_from_file(file.path()).unwrap();
            assert_eq!(config.cache.namespace, "from-file");
            assert_eq!(config.cache.default_ttl_secs, 99);
        });
    }
}
