// File: src/config.rs
// Purpose: Configuration parsing from kanban.toml with environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub dates: DatesConfig,

    #[serde(default)]
    pub locale: LocaleConfig,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `sqlite:kanban.db`, `sqlite::memory:` or `postgres://…`
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Accepted input formats for task dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesConfig {
    /// User-facing date format (chrono strftime syntax)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Also accept ISO formats (`%Y-%m-%d`, `%Y_%m_%d`)
    #[serde(default = "default_true")]
    pub accept_iso: bool,
}

/// Message catalog location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocaleConfig {
    /// TOML file of `msgid = "translation"` pairs. Untranslated when unset.
    #[serde(default)]
    pub path: Option<String>,
}

// Default values
fn default_name() -> String {
    "kanban".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_database_url() -> String {
    "sqlite:kanban.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

fn default_true() -> bool {
    true
}

// Default implementations
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            accept_iso: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./kanban.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("kanban.toml")
    }

    /// Apply `DATABASE_URL`, `KANBAN_HOST` and `KANBAN_PORT` from the environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("KANBAN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("KANBAN_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("KANBAN_PORT is not a valid port: {:?}", port))?;
        }
        Ok(self)
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dates.date_format, "%m/%d/%Y");
        assert!(config.dates.accept_iso);
        assert!(config.locale.path.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_custom_sections() {
        let toml = r#"
            [server]
            port = 8080

            [database]
            url = "sqlite::memory:"

            [dates]
            date_format = "%d/%m/%Y"
            accept_iso = false

            [locale]
            path = "locales/fr_FR.toml"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.dates.date_format, "%d/%m/%Y");
        assert!(!config.dates.accept_iso);
        assert_eq!(config.locale.path.as_deref(), Some("locales/fr_FR.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("does/not/exist/kanban.toml").unwrap();
        assert_eq!(config.app.name, "kanban");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "postgres://localhost/kanban"),
            ("KANBAN_PORT", "9000"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.database.url, "postgres://localhost/kanban");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port_override() {
        let result = Config::default().with_overrides(|key| {
            (key == "KANBAN_PORT").then(|| "eighty".to_string())
        });
        assert!(result.is_err());
    }
}
