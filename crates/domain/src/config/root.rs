use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::capture::CaptureConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-pdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-pdns/config.toml";

/// Main configuration structure for Ferrous PDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Output formats and their destinations
    #[serde(default)]
    pub output: OutputConfig,

    /// Provenance tags and row policy
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-pdns.toml in current directory
    /// 3. /etc/ferrous-pdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.formats.is_empty() {
            self.output.formats = overrides.formats;
        }
        if let Some(dir) = overrides.output_dir {
            self.output.directory = dir;
        }
        if let Some(source) = overrides.source {
            self.capture.source = source;
        }
        if let Some(sensor) = overrides.sensor {
            self.capture.sensor = sensor;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.formats.is_empty() {
            return Err(ConfigError::Validation(
                "No output formats configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for format in &self.output.formats {
            if format.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Output format name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(format.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Output format '{}' listed more than once",
                    format
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub formats: Vec<String>,
    pub output_dir: Option<String>,
    pub source: Option<String>,
    pub sensor: Option<String>,
    pub log_level: Option<String>,
}
