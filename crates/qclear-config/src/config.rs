//! Configuration types and loading for qclear.
//!
//! The main entry point is [`CleanerConfig`], resolved by [`load_config`]
//! from (lowest to highest precedence) defaults, an optional config file,
//! `QCLEAR_`-prefixed environment variables, and [`ConfigOverrides`]
//! taken from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address used when nothing else names a server.
pub const DEFAULT_URL: &str = "http://localhost:6333";

/// Prefix for environment variables read by [`load_config`].
pub const ENV_PREFIX: &str = "QCLEAR_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file was named explicitly but does not exist.
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A provider failed or a value had the wrong shape.
    #[error("failed to load configuration")]
    Load(#[from] Box<figment::Error>),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Resolved settings for one qclear run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Base address of the Qdrant server, without trailing slash once loaded.
    #[serde(default = "default_url")]
    pub url: String,

    /// Overall per-request timeout in seconds. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

impl CleanerConfig {
    /// Returns the request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Checks value constraints and strips trailing slashes from the URL.
    pub fn validate(mut self) -> Result<Self> {
        let url = self.url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        self.url = url.to_string();

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(self)
    }
}

/// Values given on the command line. `None` leaves lower layers in effect.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Builds the provider stack without extracting it.
fn figment(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(CleanerConfig::default()));

    if let Some(path) = file {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        figment = if is_toml {
            figment.merge(Toml::file(path))
        } else {
            figment.merge(Yaml::file(path))
        };
    }

    Ok(figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides)))
}

/// Resolves the configuration for a run.
///
/// # Errors
///
/// Returns [`ConfigError::FileNotFound`] if `file` names a missing file,
/// [`ConfigError::Load`] if a layer cannot be parsed, or
/// [`ConfigError::InvalidValue`] if the merged values fail validation.
pub fn load_config(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<CleanerConfig> {
    let config: CleanerConfig = figment(file, overrides)?.extract().map_err(Box::new)?;
    tracing::debug!(url = %config.url, timeout_secs = ?config.timeout_secs, "resolved configuration");
    config.validate()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let cfg = CleanerConfig::default();
        assert_eq!(cfg.url, "http://localhost:6333");
        assert!(cfg.timeout().is_none());
    }

    #[test]
    fn test_validate_strips_trailing_slashes() {
        let cfg = CleanerConfig {
            url: "http://qdrant:6333//".into(),
            timeout_secs: Some(5),
        }
        .validate()
        .unwrap();
        assert_eq!(cfg.url, "http://qdrant:6333");
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let no_scheme = CleanerConfig {
            url: "localhost:6333".into(),
            timeout_secs: None,
        };
        assert!(matches!(
            no_scheme.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "url"
        ));

        let empty = CleanerConfig {
            url: "/".into(),
            timeout_secs: None,
        };
        assert!(empty.validate().is_err());

        let zero_timeout = CleanerConfig {
            url: DEFAULT_URL.into(),
            timeout_secs: Some(0),
        };
        assert!(matches!(
            zero_timeout.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "timeout_secs"
        ));
    }

    #[test]
    fn test_missing_named_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = load_config(Some(&path), &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_yaml_file_layer() {
        Jail::expect_with(|jail| {
            jail.create_file("qclear.yaml", "url: http://from-yaml:6333/\ntimeout_secs: 7\n")?;
            let path = jail.directory().join("qclear.yaml");

            let cfg = load_config(Some(&path), &ConfigOverrides::default()).unwrap();
            assert_eq!(cfg.url, "http://from-yaml:6333");
            assert_eq!(cfg.timeout_secs, Some(7));
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_layer_keeps_unset_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("qclear.toml", "timeout_secs = 3\n")?;
            let path = jail.directory().join("qclear.toml");

            let cfg = load_config(Some(&path), &ConfigOverrides::default()).unwrap();
            assert_eq!(cfg.url, DEFAULT_URL);
            assert_eq!(cfg.timeout_secs, Some(3));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file_and_flags_override_env() {
        Jail::expect_with(|jail| {
            jail.create_file("qclear.yaml", "url: http://from-yaml:6333\ntimeout_secs: 7\n")?;
            jail.set_env("QCLEAR_URL", "http://from-env:6333");
            let path = jail.directory().join("qclear.yaml");

            let cfg = load_config(Some(&path), &ConfigOverrides::default()).unwrap();
            assert_eq!(cfg.url, "http://from-env:6333");
            assert_eq!(cfg.timeout_secs, Some(7));

            let overrides = ConfigOverrides {
                url: Some("http://from-flag:6333".into()),
                timeout_secs: Some(2),
            };
            let cfg = load_config(Some(&path), &overrides).unwrap();
            assert_eq!(cfg.url, "http://from-flag:6333");
            assert_eq!(cfg.timeout_secs, Some(2));
            Ok(())
        });
    }

    #[test]
    fn test_env_timeout_is_parsed_as_number() {
        Jail::expect_with(|jail| {
            jail.set_env("QCLEAR_TIMEOUT_SECS", "15");

            let cfg = load_config(None, &ConfigOverrides::default()).unwrap();
            assert_eq!(cfg.timeout(), Some(Duration::from_secs(15)));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_reports_load_error() {
        Jail::expect_with(|jail| {
            jail.create_file("qclear.yaml", "timeout_secs: [not, a, number]\n")?;
            let path = jail.directory().join("qclear.yaml");

            let err = load_config(Some(&path), &ConfigOverrides::default()).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            Ok(())
        });
    }
}
