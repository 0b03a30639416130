// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `grinder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "grinder",
    version,
    about = "Load and validate a grinder config.yml and print its schedule.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing `config.yml`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Also validate every swarm instance's credentials and shifts.
    ///
    /// By default only the top-level token, channel and schedule are checked.
    #[arg(long)]
    pub include_swarm: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRINDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
