//! CLI argument definitions for the experiments compiler.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use expc_report::RenderTarget;

#[derive(Parser)]
#[command(
    name = "expc",
    version,
    about = "Experiments compiler - resolve experiment rollouts into generated C++",
    long_about = "Resolve experiment definitions and rollout specifications into a\n\
                  per-platform table and render it as experiments.h / experiments.cc.\n\n\
                  Definitions are validated for required fields and expiry policy;\n\
                  rollouts with requirements resolve to debug-only on every platform."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Resolve inputs and write the generated header and source.
    Generate(GenerateArgs),

    /// Validate definitions and rollouts without generating code.
    Check(CheckArgs),

    /// List the platforms of the active configuration.
    Platforms(PlatformsArgs),
}

/// Inputs shared by every command that builds a resolved table.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// Experiment definition YAML files.
    #[arg(long = "definitions", value_name = "PATH", num_args = 1.., required = true)]
    pub definitions: Vec<PathBuf>,

    /// Rollout specification YAML files.
    #[arg(long = "rollouts", value_name = "PATH", num_args = 1..)]
    pub rollouts: Vec<PathBuf>,

    /// Compiler configuration TOML (default: built-in gRPC settings).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Date used for expiry checks, as YYYY-MM-DD (default: today, UTC).
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<NaiveDate>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Generation mode.
    #[arg(long = "mode", value_name = "MODE", default_value = "grpc_oss_production")]
    pub mode: RenderTarget,

    /// Where to write the generated header.
    #[arg(long = "header-output", value_name = "PATH")]
    pub header_output: Option<PathBuf>,

    /// Where to write the generated source.
    #[arg(long = "source-output", value_name = "PATH")]
    pub source_output: Option<PathBuf>,

    /// Header path the generated source includes.
    #[arg(
        long = "header-path",
        value_name = "PATH",
        default_value = expc_report::DEFAULT_HEADER_PATH
    )]
    pub header_path: String,

    /// Also warn about expired and far-future expiry dates.
    #[arg(long = "check-expiry")]
    pub check_expiry: bool,

    /// Refuse to generate when any experiment resolves to debug-only.
    #[arg(long = "no-debug-experiments")]
    pub no_debug_experiments: bool,

    /// Resolve and render without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Also warn about expired and far-future expiry dates.
    #[arg(long = "check-expiry")]
    pub check_expiry: bool,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Args)]
pub struct PlatformsArgs {
    /// Compiler configuration TOML (default: built-in gRPC settings).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
