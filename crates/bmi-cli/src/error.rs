//! Error types for the command-line front end.
//!
//! Validation failures are not represented here: they are rendered as
//! results, not raised.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration file exists but could not be read
    #[error("Failed to read configuration '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for `BmiConfig`
    #[error("Invalid configuration: {source}")]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    /// The effective configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// An environment override carried an unusable value
    #[error("Invalid value '{value}' for {variable}")]
    InvalidOverride { variable: String, value: String },
}
