//! sig-check: offline ERC-1271 signature checker.

use std::process::ExitCode;

use account_telemetry::{init_logging, TelemetryConfig};
use anyhow::Context;
use clap::Parser;

use sig_check::cli::Cli;
use sig_check::commands::{self, Report};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = execute(&cli);
    if let Err(e) = &result {
        eprintln!("error: {e:#}");
    }
    ExitCode::from(commands::exit_code(&result))
}

fn execute(cli: &Cli) -> anyhow::Result<Report> {
    let mut telemetry = TelemetryConfig::from_env();
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_logging(&telemetry).context("failed to initialize logging")?;

    let report = commands::run(cli)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report)
}
