//! Server configuration
//!
//! Values are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. environment variables (`HOST`, `PORT`, `FRONTEND_URL`, `LOG_LEVEL`,
//!    `APP_ENV`, `ASSETS_DIR`, `CATALOG_PATH`)
//! 4. command line flags, applied by the binary

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use topicfeed_core::LogLevel;
use tracing::debug;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3333;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:4200";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Deployment environment; production hides stack details in error responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "test" => Ok(Environment::Development),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS, credentials included
    pub frontend_url: String,
    pub log_level: LogLevel,
    pub environment: Environment,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// JSON dataset replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            log_level: LogLevel::Info,
            environment: Environment::Development,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Defaults, then `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_vars(|key| std::env::var(key).ok())
    }

    /// Read a YAML file; keys it omits keep their defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Overlay values found through `lookup`, keyed by environment variable name
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_var("PORT", &port)?;
        }
        if let Some(url) = lookup("FRONTEND_URL") {
            self.frontend_url = url;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = parse_var("LOG_LEVEL", &level)?;
        }
        if let Some(env) = lookup("APP_ENV") {
            self.environment = parse_var("APP_ENV", &env)?;
        }
        if let Some(dir) = lookup("ASSETS_DIR") {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        self.validate()?;

        debug!(
            host = %self.host,
            port = self.port,
            environment = ?self.environment,
            "configuration resolved"
        );
        Ok(self)
    }

    /// Check values no single field parser can catch
    pub fn validate(&self) -> Result<()> {
        validate_origin(&self.frontend_url).map_err(|message| ConfigError::InvalidValue {
            key: "FRONTEND_URL".to_string(),
            message,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A CORS origin: absolute http(s) URL with a host, usable as a header value
fn validate_origin(raw: &str) -> std::result::Result<(), String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(format!("{raw:?} is not a valid origin"));
    }
    let url = url::Url::parse(raw).map_err(|e| format!("{raw:?}: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(format!("{raw:?} must be an http or https origin"));
    }
    Ok(())
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3333);
        assert_eq!(config.frontend_url, "http://localhost:4200");
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.is_production());
        assert_eq!(config.bind_address(), "0.0.0.0:3333");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .apply_vars(vars(&[
                ("PORT", "8080"),
                ("FRONTEND_URL", "https://example.com"),
                ("LOG_LEVEL", "debug"),
                ("APP_ENV", "production"),
            ]))
            .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_url, "https://example.com");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::default()
            .apply_vars(vars(&[("PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_invalid_frontend_url_is_rejected() {
        for bad in ["not a url\x7f", "", "localhost:4200", "ftp://files.example.com", "http://exa mple.com"] {
            let err = Config::default()
                .apply_vars(vars(&[("FRONTEND_URL", bad)]))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "FRONTEND_URL"),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_invalid_frontend_url_in_yaml_is_rejected() {
        let config = Config::from_yaml_str("frontend_url: \"nope\"").unwrap();
        assert!(config.validate().is_err());
        assert!(config.apply_vars(vars(&[])).is_err());
    }

    #[test]
    fn test_valid_origins() {
        for good in ["http://localhost:4200", "https://app.example.com", "http://127.0.0.1:3000"] {
            let config = Config {
                frontend_url: good.to_string(),
                ..Config::default()
            };
            assert!(config.validate().is_ok(), "{good} rejected");
        }
    }

    #[test]
    fn test_yaml_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 4000\nassets_dir: /srv/assets\nenvironment: production").unwrap();

        let config = Config::from_yaml_file(file.path())
            .unwrap()
            .apply_vars(vars(&[("PORT", "5000")]))
            .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/assets"));
        assert!(config.is_production());
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
    }
}
