// src/format/ord.rs

//! The layer-order (`.ord`) format.
//!
//! ```text
//! # comment
//! 0 {
//!  a b
//! } # end of layer 0
//! 1 { c }
//! ```
//!
//! Each block lists the nodes of one layer from left to right. `#` starts a
//! comment that runs to the end of the line.

use std::io::Write;

use tracing::{debug, warn};

use crate::errors::Result;
use crate::format::report::{ReadIssue, ReadReport};
use crate::format::tokenize;
use crate::graph::{LayeredGraph, MAX_LAYER};

const COMMENT_CHAR: char = '#';
const OPEN: &str = "{";
const CLOSE: &str = "}";

#[derive(Debug, Clone, Copy)]
enum State {
    OutsideLayer,
    LayerNumber(usize),
    InsideLayer(usize),
}

/// Read layer blocks into `graph`.
///
/// Nodes not yet in the graph are created. Each node named is moved to the
/// end of its block's layer, so positions follow order of appearance.
/// Parsing stops at the first token that does not fit the block structure,
/// or at a layer number above [`MAX_LAYER`].
pub fn read_ord(graph: &mut LayeredGraph, input: &str) -> Result<ReadReport> {
    let mut report = ReadReport::default();
    let mut state = State::OutsideLayer;

    let tokens = input
        .lines()
        .enumerate()
        .flat_map(|(i, line)| tokenize(i + 1, strip_comment(line)));

    for token in tokens {
        state = match state {
            State::OutsideLayer => match token.text.parse::<usize>() {
                Ok(layer) if layer <= MAX_LAYER => State::LayerNumber(layer),
                _ if is_number(token.text) => {
                    warn!(line = token.line, token = %token.text, "ord: layer number out of range");
                    report.push(ReadIssue::LayerOutOfRange {
                        line: token.line,
                        token: token.text.to_string(),
                    });
                    return Ok(report);
                }
                _ => {
                    warn!(line = token.line, token = %token.text, "ord: expecting layer number");
                    report.push(ReadIssue::ExpectedLayerNumber {
                        line: token.line,
                        token: token.text.to_string(),
                    });
                    return Ok(report);
                }
            },
            State::LayerNumber(layer) => {
                if token.text != OPEN {
                    warn!(line = token.line, token = %token.text, "ord: expecting {{");
                    report.push(ReadIssue::ExpectedOpenBrace {
                        line: token.line,
                        token: token.text.to_string(),
                    });
                    return Ok(report);
                }
                State::InsideLayer(layer)
            }
            State::InsideLayer(layer) => {
                if token.text == CLOSE {
                    State::OutsideLayer
                } else {
                    if !graph.contains(token.text) {
                        graph.add_node(token.text)?;
                    }
                    graph.set_layer(token.text, layer)?;
                    State::InsideLayer(layer)
                }
            }
        };
    }

    match state {
        State::OutsideLayer => {}
        State::LayerNumber(layer) | State::InsideLayer(layer) => {
            warn!(layer, "ord: unexpected end of input inside layer");
            report.push(ReadIssue::UnterminatedLayer { layer });
        }
    }

    debug!(layers = graph.num_layers(), nodes = graph.num_nodes(), "read layer order");
    Ok(report)
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_CHAR) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Write the layering of `graph`.
///
/// `header` lines are emitted as comments first. Each layer's nodes are
/// wrapped at `nodes_per_line` names per line.
pub fn write_ord<W: Write>(
    graph: &LayeredGraph,
    header: &[String],
    nodes_per_line: usize,
    out: &mut W,
) -> Result<()> {
    for line in header {
        writeln!(out, "{COMMENT_CHAR} {line}")?;
    }
    writeln!(out, "{COMMENT_CHAR} Graph name = {}", graph.name())?;

    for layer in 0..graph.num_layers() {
        writeln!(out)?;
        writeln!(out, "{COMMENT_CHAR} Ordering for layer {layer}")?;
        writeln!(out, "{layer} {OPEN}")?;
        for chunk in graph.nodes_on_layer(layer).chunks(nodes_per_line.max(1)) {
            writeln!(out, " {}", chunk.join(" "))?;
        }
        writeln!(out, "{CLOSE} {COMMENT_CHAR} end of layer {layer}")?;
    }
    Ok(())
}
