// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::WEATHER_API_KEY_ENV;

/// TOML configuration for the remote widget endpoints
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DirectoryConfig {
    #[serde(default = "default_directory_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// City used by the dashboard's weather panel when set.
    #[serde(default)]
    pub default_city: String,
}

// Default value functions
fn default_directory_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}
fn default_weather_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_directory_url(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: String::new(),
            default_city: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Weather API key, with the environment variable taking precedence over
    /// the config file.
    pub fn weather_api_key(&self) -> String {
        std::env::var(WEATHER_API_KEY_ENV).unwrap_or_else(|_| self.weather.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(
            config.directory.base_url,
            "https://jsonplaceholder.typicode.com"
        );
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert!(config_path.exists());
    }

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let config = Config::default();
        config.save(&config_path).unwrap();

        assert!(config_path.exists());
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[directory]"));
        assert!(content.contains("[weather]"));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[directory]
base_url = "http://localhost:8080"

[weather]
base_url = "http://localhost:9090"
api_key = "test-key"
default_city = "Berlin"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.directory.base_url, "http://localhost:8080");
        assert_eq!(config.weather.base_url, "http://localhost:9090");
        assert_eq!(config.weather.api_key, "test-key");
        assert_eq!(config.weather.default_city, "Berlin");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        let toml_content = r#"
[weather]
api_key = "only-key"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        // Specified value
        assert_eq!(config.weather.api_key, "only-key");
        // Default values
        assert_eq!(
            config.directory.base_url,
            "https://jsonplaceholder.typicode.com"
        );
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.default_city, "");
    }

    #[test]
    fn given_missing_file_when_loading_or_default_then_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::load_or_default(temp_dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn given_round_trip_when_saving_and_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");

        let original = Config {
            directory: DirectoryConfig {
                base_url: "http://localhost:3000".to_string(),
            },
            weather: WeatherConfig {
                api_key: "abc".to_string(),
                default_city: "Oslo".to_string(),
                ..Default::default()
            },
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded, original);
    }
}
