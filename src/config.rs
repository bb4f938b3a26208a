//! Configuration management for Citekit server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::translators::{CreatorListMode, NormalizerOptions};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Stop reading a creator list at its first empty entry
    pub strict_creator_lists: bool,
    /// Maximum number of source payloads accepted per request
    pub max_sources: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub normalization: NormalizationConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. CITEKIT_SERVER__PORT=9000
            .add_source(
                Environment::with_prefix("CITEKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl NormalizationConfig {
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            creator_list_mode: if self.strict_creator_lists {
                CreatorListMode::Strict
            } else {
                CreatorListMode::Lenient
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 1970,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            strict_creator_lists: true,
            max_sources: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 1970);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(
            config.normalization.normalizer_options().creator_list_mode,
            CreatorListMode::Strict
        );
    }

    #[test]
    fn test_lenient_option() {
        let normalization = NormalizationConfig {
            strict_creator_lists: false,
            ..Default::default()
        };
        assert_eq!(
            normalization.normalizer_options().creator_list_mode,
            CreatorListMode::Lenient
        );
    }
}
