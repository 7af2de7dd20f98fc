use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub images: ImageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            debounce_ms: default_debounce_ms(),
            images: ImageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(alias = "baseUrl", rename = "baseurl")]
    #[serde(default = "default_baseurl")]
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_baseurl(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageConfig {
    #[serde(default = "default_fallback_image")]
    pub fallback: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback_image(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_baseurl() -> String {
    "http://localhost:8000".to_string()
}

fn default_fallback_image() -> String {
    crate::image::FALLBACK_IMAGE.to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub fn from_file_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.backend.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.timeout_secs, None);
        assert_eq!(config.images.fallback, crate::image::FALLBACK_IMAGE);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
backend:
  baseurl: https://movies.example.org
  timeout_secs: 15
debounce_ms: 150
images:
  fallback: /static/no-poster.png
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.base_url, "https://movies.example.org");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.images.fallback, "/static/no-poster.png");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::from_file_or_default("/nonexistent/moviefinder.yaml").unwrap();
        assert_eq!(config.debounce_ms, 300);
    }
}
