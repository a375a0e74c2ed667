use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Backend API domain. Should include the https:// prefix.
    pub api_domain: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables override config file values:
    ///
    /// - `FUTSAL_API_DOMAIN` - Override API domain
    /// - `FUTSAL_LOG_FILE` - Override log file path
    /// - `FUTSAL_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// With no config file, `FUTSAL_API_DOMAIN` alone is enough to run;
    /// without either, loading fails with a configuration error.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str::<Config>(&content)?
        } else if let Ok(api_domain) = std::env::var("FUTSAL_API_DOMAIN") {
            Config {
                api_domain,
                ..Config::default()
            }
        } else {
            return Err(AppError::config_error(format!(
                "No config file at {config_path} and FUTSAL_API_DOMAIN is not set"
            )));
        };

        if let Ok(api_domain) = std::env::var("FUTSAL_API_DOMAIN") {
            config.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var("FUTSAL_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("FUTSAL_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to an explicit path. Creates the parent
    /// directory if needed and normalizes the api_domain to carry a
    /// protocol prefix.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(config_dir) = Path::new(config_path).parent()
            && !config_dir.exists()
        {
            fs::create_dir_all(config_dir).await?;
        }

        let api_domain = if self.api_domain.starts_with("http://")
            || self.api_domain.starts_with("https://")
        {
            self.api_domain.clone()
        } else {
            format!("https://{}", self.api_domain)
        };

        let content = toml::to_string_pretty(&Config {
            api_domain,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;

        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("HTTP Timeout:");
            println!("{}s", config.http_timeout_seconds);
            if let Some(log_path) = &config.log_file_path {
                println!("Log File:");
                println!("{log_path}");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            log_file_path: None,
            http_timeout_seconds: 10,
        };
        config.save_to_path(&path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded.api_domain, "https://api.example.com");
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[tokio::test]
    async fn test_save_adds_protocol_prefix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            api_domain: "api.example.com".to_string(),
            ..Config::default()
        };
        config.save_to_path(&path).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("https://api.example.com"));
    }

    #[tokio::test]
    #[serial]
    async fn test_env_override_without_config_file() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::set_var("FUTSAL_API_DOMAIN", "http://localhost:4000");
            std::env::set_var("FUTSAL_HTTP_TIMEOUT", "5");
        }

        let config = Config::load().await;
        // A developer machine may have a real config file; either way the
        // environment values must win.
        if let Ok(config) = config {
            assert_eq!(config.api_domain, "http://localhost:4000");
            assert_eq!(config.http_timeout_seconds, 5);
        }

        unsafe {
            std::env::remove_var("FUTSAL_API_DOMAIN");
            std::env::remove_var("FUTSAL_HTTP_TIMEOUT");
        }
    }

    #[test]
    fn test_default_timeout() {
        let config = Config::default();
        assert_eq!(
            config.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }
}
