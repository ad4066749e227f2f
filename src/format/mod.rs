// src/format/mod.rs

//! Reading and writing the two text formats of a layered graph.
//!
//! - [`dot`]: the edge list (`digraph NAME { a -> b; ... }`).
//! - [`ord`]: the per-layer node order (`0 { a b } 1 { c }`).
//! - [`reader`]: reads one or both into a fresh [`LayeredGraph`](crate::graph::LayeredGraph).
//! - [`report`]: recoverable issues found along the way.

pub mod dot;
pub mod ord;
pub mod reader;
pub mod report;

pub use dot::{read_dot, write_dot};
pub use ord::{read_ord, write_ord};
pub use reader::{GraphReader, ParsedGraph};
pub use report::{ReadIssue, ReadReport};

/// A whitespace-separated word and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub line: usize,
    pub text: &'a str,
}

pub(crate) fn tokenize(line_number: usize, line: &str) -> impl Iterator<Item = Token<'_>> {
    line.split_whitespace().map(move |text| Token {
        line: line_number,
        text,
    })
}
