//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// bootwire project tooling.
#[derive(Debug, Parser)]
#[command(name = "bootwire")]
#[command(version, about = "bootwire project tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a project for common bootwire mistakes.
    Doctor(DoctorArgs),
}

#[derive(Debug, Args)]
pub struct DoctorArgs {
    /// Project path to scan.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doctor_defaults() {
        let cli = Cli::try_parse_from(["bootwire", "doctor"]).unwrap();
        let Commands::Doctor(args) = cli.command;

        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_parse_doctor_options() {
        let cli =
            Cli::try_parse_from(["bootwire", "doctor", "--path", "app", "--format", "json"])
                .unwrap();
        let Commands::Doctor(args) = cli.command;

        assert_eq!(args.path, PathBuf::from("app"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["bootwire", "doctor", "--format", "xml"]).is_err());
    }
}
