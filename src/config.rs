//! Configuration module
//!
//! Reads a TOML file (default `~/.config/careportal/config.toml`,
//! overridable via `CAREPORTAL_CONFIG`). Every section has working
//! defaults so the service runs with no file present.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::auth::MalformedSessionPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub credentials: CredentialsConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SeaORM connection URL; only used with `credentials.source = "database"`
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./careportal.db?mode=rwc".to_string(),
        }
    }
}

/// Which credential source backs the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSourceKind {
    /// Compiled-in demo account list
    Memory,
    /// `accounts` table via SeaORM
    Database,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub source: CredentialSourceKind,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            source: CredentialSourceKind::Memory,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file path; platform data dir when unset
    pub file: Option<PathBuf>,
    /// Policy for persisted-but-undecodable session data
    pub on_malformed: MalformedSessionPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "careportal=debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default config file location, e.g. `~/.config/careportal/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("careportal")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.credentials.source, CredentialSourceKind::Memory);
        assert_eq!(cfg.session.on_malformed, MalformedSessionPolicy::Reset);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 3000

            [credentials]
            source = "database"

            [session]
            on_malformed = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.credentials.source, CredentialSourceKind::Database);
        assert_eq!(cfg.session.on_malformed, MalformedSessionPolicy::Reject);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.logging.level, "info");
    }
}
