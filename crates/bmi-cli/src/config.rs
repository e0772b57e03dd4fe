use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "bmi.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct BmiConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was absent and built-in defaults were used.
    Defaults(PathBuf),
}

impl BmiConfig {
    /// Loads the configuration file.
    ///
    /// An explicit `path` must exist. Otherwise `BMI_CONFIG_PATH` or
    /// `bmi.toml` is tried, falling back to defaults when the file is absent.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource), CliError> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (
                std::env::var("BMI_CONFIG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
                false,
            ),
        };

        match fs::read_to_string(&config_path) {
            Ok(contents) => Ok((Self::from_toml_str(&contents)?, ConfigSource::File(config_path))),
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                Ok((Self::default(), ConfigSource::Defaults(config_path)))
            }
            Err(source) => Err(CliError::ConfigRead { path: config_path, source }),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|source| CliError::ConfigParse { source })
    }

    pub fn to_toml(&self) -> Result<String, CliError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Applies `BMI_*` environment variable overrides.
    pub fn apply_profile(self) -> Result<Self, CliError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        if let Some(format) = lookup("BMI_OUTPUT_FORMAT") {
            self.output.format =
                OutputFormat::from_str(&format, true).map_err(|_| CliError::InvalidOverride {
                    variable: "BMI_OUTPUT_FORMAT".to_string(),
                    value: format,
                })?;
        }
        if let Some(filter) = lookup("BMI_LOG_FILTER") {
            self.logging.filter = filter;
        }
        if let Some(json) = lookup("BMI_LOG_JSON") {
            self.logging.json = json.parse::<bool>().map_err(|_| CliError::InvalidOverride {
                variable: "BMI_LOG_JSON".to_string(),
                value: json,
            })?;
        }
        Ok(self)
    }
}

impl ConfigSource {
    /// Emits the deferred load diagnostic once logging is up.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!(path = %path.display(), "Loaded configuration"),
            ConfigSource::Defaults(path) => warn!(
                "Configuration file '{}' not found. Using default configuration.",
                path.display()
            ),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}
