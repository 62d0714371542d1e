// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::{RepairStrategy, RowFormat};

/// Command-line arguments for `rowdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rowdag",
    version,
    about = "Assign rows to the nodes of a directed graph so every edge points downwards.",
    long_about = None
)]
pub struct CliArgs {
    /// Graph file (`.json`, or `.toml` with `[[nodes]]` / `[[edges]]`).
    #[arg(value_name = "GRAPH")]
    pub graph: PathBuf,

    /// Node that gets row 1. Overrides `[level].root`.
    #[arg(long, value_name = "NAME")]
    pub root: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Rowdag.toml` in the current directory is used when it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the leveled graph here instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Repair strategy: worklist or rescan. Overrides `[level].strategy`.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<RepairStrategy>,

    /// Row encoding: integer or label. Overrides `[output].row_format`.
    #[arg(long, value_name = "FORMAT")]
    pub row_format: Option<RowFormat>,

    /// Fail if any node cannot reach the root.
    #[arg(long)]
    pub deny_unreachable: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ROWDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate the graph and print a summary, but don't level it.
    #[arg(long)]
    pub dry_run: bool,
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

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
