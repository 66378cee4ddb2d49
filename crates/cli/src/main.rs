//! bootwire CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use bootwire_cli::cli::{Cli, Commands};
use bootwire_cli::output::format_report;
use bootwire_cli::run_doctor;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootwire_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Doctor(args) => {
            let report = run_doctor(&args.path)
                .with_context(|| format!("doctor failed for {}", args.path.display()))?;
            println!("{}", format_report(&report, args.format));

            Ok(if report.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}
