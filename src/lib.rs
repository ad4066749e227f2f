// src/lib.rs

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod format;
pub mod fs;
pub mod graph;
pub mod layering;
pub mod logging;
pub mod types;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::load_or_default;
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// Loads the configuration, then runs the requested tool against the real
/// filesystem and prints its result on stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;
    debug!(?cfg, "configuration loaded");
    let fs = RealFileSystem;

    match args.command {
        Command::Assign { input, basename } => {
            let summary = commands::assign(&fs, &input, &basename, &cfg)?;
            println!("{summary}");
        }
        Command::Show { basename, no_ord } => {
            let parsed = commands::show(&fs, &basename, !no_ord, &cfg)?;
            print!("{}", parsed.graph);
            for issue in &parsed.report.issues {
                println!("warning: {issue}");
            }
        }
    }

    Ok(())
}
