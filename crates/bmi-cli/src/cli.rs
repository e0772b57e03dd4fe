use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Body Mass Index calculator
#[derive(Parser, Debug)]
#[command(name = "bmi", version, about = "Body Mass Index calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format, overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a BMI once from the given measurements
    Calc {
        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: Option<String>,

        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<String>,
    },

    /// Prompt for measurements repeatedly until EOF or `q`
    Form,

    /// Show the effective configuration
    Config,
}
