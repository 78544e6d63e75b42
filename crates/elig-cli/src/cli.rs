//! CLI argument definitions for the eligibility pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "elig-pipeline",
    version,
    about = "Eligibility unification pipeline - normalize and merge partner eligibility files",
    long_about = "Ingest per-partner eligibility files, normalize them into the canonical\n\
                  schema, and merge all partners into one unified dataset.\n\
                  Datasets are persisted per stage: bronze (raw), silver (canonical),\n\
                  gold (unified)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q to silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline for every configured partner.
    Run(RunArgs),

    /// List the configured partners without running anything.
    Partners(PartnersArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the partners configuration file (JSON).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Root directory for bronze/silver/gold datasets (default: ./data).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PartnersArgs {
    /// Path to the partners configuration file (JSON).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_accepts_config_and_data_dir() {
        let cli = Cli::parse_from(["elig-pipeline", "run", "partners.json", "--data-dir", "out"]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.config, PathBuf::from("partners.json"));
                assert_eq!(args.data_dir, Some(PathBuf::from("out")));
            }
            Command::Partners(_) => panic!("expected run command"),
        }
    }

    #[test]
    fn partners_accepts_config() {
        let cli = Cli::parse_from(["elig-pipeline", "partners", "partners.json"]);
        match cli.command {
            Command::Partners(args) => {
                assert_eq!(args.config, PathBuf::from("partners.json"));
            }
            Command::Run(_) => panic!("expected partners command"),
        }
    }
}
