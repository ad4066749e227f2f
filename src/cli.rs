// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `layerdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "layerdag",
    version,
    about = "Assign layers to a DAG and split long edges with dummy nodes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML).
    ///
    /// Default: `Layerdag.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace). Default: info.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Layer an edge list and write BASENAME.dot and BASENAME.ord.
    Assign {
        /// Input edge list (`digraph NAME { a -> b; ... }`).
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Base name for the output files.
        #[arg(value_name = "BASENAME")]
        basename: String,
    },

    /// Read BASENAME.ord and BASENAME.dot and print adjacency and layers.
    Show {
        #[arg(value_name = "BASENAME")]
        basename: String,

        /// Ignore BASENAME.ord even if it exists.
        #[arg(long)]
        no_ord: bool,
    },
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
