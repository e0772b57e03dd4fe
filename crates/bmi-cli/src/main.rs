use bmi_cli::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    bmi_cli::run(cli)
}
