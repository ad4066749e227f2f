// src/format/dot.rs

//! The edge-list (`.dot`) format.
//!
//! ```text
//! /*
//!  * any comment lines
//!  */
//! digraph NAME {
//!  a -> b;
//!  b -> c;
//! }
//! ```
//!
//! Only this simplified subset of dot is understood: there must be
//! whitespace around `->`, and the destination must carry its `;` with no
//! whitespace in between. Statements may span lines.
//!
//! A malformed statement stops edge reading under
//! [`MalformedEdgePolicy::Stop`]; everything read before it is kept. This is
//! the historical behaviour of the format and remains the default.

use std::io::Write;

use tracing::{debug, warn};

use crate::errors::{LayerdagError, Result};
use crate::format::report::{ReadIssue, ReadReport};
use crate::format::{Token, tokenize};
use crate::graph::LayeredGraph;
use crate::types::MalformedEdgePolicy;

const KEYWORD: &str = "digraph";
const ARROW: &str = "->";
const TERMINATOR: char = ';';
const CLOSE: &str = "}";

/// Read an edge list into `graph`.
///
/// Nodes are created the first time they are named. The header is required:
/// a missing `digraph NAME` line is an error. Everything after the header
/// only produces [`ReadIssue`]s.
pub fn read_dot(
    graph: &mut LayeredGraph,
    input: &str,
    policy: MalformedEdgePolicy,
) -> Result<ReadReport> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));
    read_preamble(graph, &mut lines)?;

    let mut tokens = lines.flat_map(|(number, line)| tokenize(number, line));
    let mut report = ReadReport::default();
    read_edges(graph, &mut tokens, policy, &mut report)?;

    debug!(
        graph = %graph.name(),
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        issues = report.issues.len(),
        "read edge list"
    );
    Ok(report)
}

/// Comments up to and including the `digraph NAME {` line.
fn read_preamble<'a, I>(graph: &mut LayeredGraph, lines: &mut I) -> Result<()>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    for (number, line) in lines.by_ref() {
        let mut words: Vec<&str> = line.split_whitespace().collect();
        if words.first() == Some(&KEYWORD) {
            let name = words
                .get(1)
                .map(|w| w.trim_end_matches('{'))
                .filter(|w| !w.is_empty())
                .ok_or_else(|| {
                    LayerdagError::Format(format!("line {number}: missing graph name"))
                })?;
            graph.set_name(name);
            return Ok(());
        }

        if matches!(words.first(), Some(&"/*") | Some(&"*")) {
            words.remove(0);
        }
        if words.last() == Some(&"*/") {
            words.pop();
        }
        if !words.is_empty() {
            graph.add_comment(words.join(" "));
        }
    }

    Err(LayerdagError::Format(format!(
        "missing '{KEYWORD} <name> {{' header"
    )))
}

fn read_edges<'a, I>(
    graph: &mut LayeredGraph,
    tokens: &mut I,
    policy: MalformedEdgePolicy,
    report: &mut ReadReport,
) -> Result<()>
where
    I: Iterator<Item = Token<'a>>,
{
    loop {
        let Some(source) = tokens.next() else {
            warn!("edge list: missing }} at end of file");
            report.push(ReadIssue::MissingCloseBrace);
            return Ok(());
        };
        if source.text == CLOSE {
            return Ok(());
        }
        ensure_node(graph, source.text)?;

        let Some(arrow) = tokens.next() else {
            unexpected_end(report, "->");
            return Ok(());
        };
        if arrow.text != ARROW {
            warn!(line = arrow.line, token = %arrow.text, "edge list: expected ->");
            report.push(ReadIssue::MalformedArrow {
                line: arrow.line,
                token: arrow.text.to_string(),
            });
            if recover(arrow, tokens, policy, report) {
                continue;
            }
            return Ok(());
        }

        let Some(destination) = tokens.next() else {
            unexpected_end(report, "destination");
            return Ok(());
        };
        let name = destination
            .text
            .strip_suffix(TERMINATOR)
            .filter(|name| !name.is_empty());
        let Some(name) = name else {
            warn!(
                line = destination.line,
                token = %destination.text,
                "edge list: destination should end with ;"
            );
            report.push(ReadIssue::MissingTerminator {
                line: destination.line,
                token: destination.text.to_string(),
            });
            if recover(destination, tokens, policy, report) {
                continue;
            }
            return Ok(());
        };

        ensure_node(graph, name)?;
        graph.add_edge(source.text, name)?;
    }
}

fn ensure_node(graph: &mut LayeredGraph, name: &str) -> Result<()> {
    if !graph.contains(name) {
        graph.add_node(name)?;
    }
    Ok(())
}

fn unexpected_end(report: &mut ReadReport, expected: &'static str) {
    warn!(expected, "edge list: unexpected end of input");
    report.push(ReadIssue::UnexpectedEnd { expected });
}

/// Decide whether reading continues after the malformed token `bad`.
///
/// Under `Skip`, tokens are dropped up to and including the one that ends
/// the broken statement. A closing `}` always ends the edge list.
fn recover<'a, I>(
    bad: Token<'a>,
    tokens: &mut I,
    policy: MalformedEdgePolicy,
    report: &mut ReadReport,
) -> bool
where
    I: Iterator<Item = Token<'a>>,
{
    if policy == MalformedEdgePolicy::Stop || bad.text == CLOSE {
        return false;
    }
    if bad.text.ends_with(TERMINATOR) {
        return true;
    }
    for token in tokens.by_ref() {
        if token.text == CLOSE {
            return false;
        }
        if token.text.ends_with(TERMINATOR) {
            debug!(line = token.line, "edge list: resuming after malformed statement");
            return true;
        }
    }
    warn!("edge list: missing }} at end of file");
    report.push(ReadIssue::MissingCloseBrace);
    false
}

/// Write `graph` as an edge list: comments, header, one statement per edge.
pub fn write_dot<W: Write>(graph: &LayeredGraph, out: &mut W) -> Result<()> {
    writeln!(out, "/*")?;
    for comment in graph.comments() {
        writeln!(out, " * {comment}")?;
    }
    writeln!(out, " */")?;
    writeln!(out, "{KEYWORD} {} {{", graph.name())?;
    for (from, to) in graph.edges() {
        writeln!(out, " {from} {ARROW} {to}{TERMINATOR}")?;
    }
    writeln!(out, "{CLOSE}")?;
    Ok(())
}
