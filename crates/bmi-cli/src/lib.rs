#![deny(warnings)]
//! Command-line front end for the BMI calculator.
//!
//! This is the presentation layer: it solicits raw height and weight values,
//! keeps the form state, and renders whatever `bmi-calculator` returns.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bmi_calculator::BmiEngine;
use tracing::info;

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod render;

use cli::{Cli, Command};
use config::{BmiConfig, OutputFormat};
use form::FormState;
use logging::init_logging;
use render::{render_form, render_outcome};

/// Exit status of `bmi calc` when the inputs fail validation.
pub const VALIDATION_FAILURE_EXIT: u8 = 2;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let (config, source) = BmiConfig::load(cli.config.as_deref())?;
    let mut config = config.apply_profile()?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.verbose {
        config.logging.filter = "debug".to_string();
    }

    init_logging(&config.logging)?;
    source.log();
    info!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "Starting BMI calculator");

    let engine = BmiEngine::new();
    let format = config.output.format;

    match cli.command {
        Command::Calc { height, weight } => {
            let outcome = engine.compute(height, weight);
            println!("{}", render_outcome(&outcome, format)?);
            Ok(if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(VALIDATION_FAILURE_EXIT)
            })
        }
        Command::Form => {
            let submissions = run_form(io::stdin().lock(), io::stdout().lock(), &engine, format)?;
            info!(submissions, "Form session ended");
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs the interactive form until EOF or a `q`/`quit` line.
///
/// Prompts are only written in text mode. Returns the number of submissions.
pub fn run_form<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    engine: &BmiEngine,
    format: OutputFormat,
) -> io::Result<usize> {
    let mut lines = input.lines();
    let mut form = FormState::new();
    let mut submissions = 0;

    loop {
        let Some(height) = prompt(&mut output, &mut lines, "Height (cm): ", format)? else {
            break;
        };
        let Some(weight) = prompt(&mut output, &mut lines, "Weight (kg): ", format)? else {
            break;
        };

        form.set_height(height);
        form.set_weight(weight);
        form.submit(engine);
        submissions += 1;

        writeln!(output, "{}", render_form(&form, format)?)?;
    }

    if format == OutputFormat::Text {
        writeln!(output)?;
    }
    Ok(submissions)
}

fn prompt<W: Write>(
    output: &mut W,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    format: OutputFormat,
) -> io::Result<Option<String>> {
    if format == OutputFormat::Text {
        write!(output, "{label}")?;
        output.flush()?;
    }
    match lines.next().transpose()? {
        Some(line) if is_quit(&line) => Ok(None),
        other => Ok(other),
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit")
}
