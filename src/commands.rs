// src/commands.rs

//! The two command-line tools, written against [`FileSystem`] so they can be
//! exercised without touching disk.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::format::{GraphReader, ParsedGraph, ReadReport, write_dot, write_ord};
use crate::fs::FileSystem;
use crate::layering::{self, LayeringSummary};

pub const DOT_SUFFIX: &str = "dot";
pub const ORD_SUFFIX: &str = "ord";

/// `<base>.dot` and `<base>.ord`.
pub fn output_paths(base: &str) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("{base}.{DOT_SUFFIX}")),
        PathBuf::from(format!("{base}.{ORD_SUFFIX}")),
    )
}

/// Layer the edge list in `input` and write `<base>.dot` / `<base>.ord`.
///
/// Both outputs are rendered before either is written, and `<base>.dot` is
/// removed again if `<base>.ord` cannot be written, so a failed run leaves
/// no files behind.
pub fn assign(
    fs: &dyn FileSystem,
    input: &Path,
    base: &str,
    cfg: &ConfigFile,
) -> Result<LayeringSummary> {
    let text = fs.read_to_string(input)?;
    let ParsedGraph { mut graph, report } = GraphReader::from_config(cfg).read_edge_list(&text)?;
    log_report(input, &report);

    let summary = layering::assign_layers(&mut graph)?;

    let (dot_path, ord_path) = output_paths(base);
    let mut dot = Vec::new();
    write_dot(&graph, &mut dot)?;
    let mut ord = Vec::new();
    let header = vec![format!("layerdag assign for {base}.{DOT_SUFFIX}")];
    write_ord(&graph, &header, cfg.output.nodes_per_line, &mut ord)?;

    fs.write(&dot_path, &dot)?;
    if let Err(err) = fs.write(&ord_path, &ord) {
        if let Err(cleanup) = fs.remove_file(&dot_path) {
            warn!(path = ?dot_path, error = %cleanup, "could not remove partial output");
        }
        return Err(err);
    }
    info!(dot = ?dot_path, ord = ?ord_path, "wrote layered graph");

    Ok(summary)
}

/// Read `<base>.ord` (when wanted and present) and `<base>.dot`.
pub fn show(
    fs: &dyn FileSystem,
    base: &str,
    use_ord: bool,
    cfg: &ConfigFile,
) -> Result<ParsedGraph> {
    let (dot_path, ord_path) = output_paths(base);
    let dot = fs.read_to_string(&dot_path)?;
    let reader = GraphReader::from_config(cfg);

    let parsed = if use_ord && fs.exists(&ord_path) {
        let ord = fs.read_to_string(&ord_path)?;
        reader.read_layered(&ord, &dot)?
    } else {
        if use_ord {
            warn!(path = ?ord_path, "no layer order found; showing edges only");
        }
        reader.read_edge_list(&dot)?
    };
    log_report(&dot_path, &parsed.report);

    Ok(parsed)
}

fn log_report(path: &Path, report: &ReadReport) {
    if !report.is_clean() {
        warn!(
            path = ?path,
            issues = report.issues.len(),
            "input read with recoverable issues"
        );
    }
}
