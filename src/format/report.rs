// src/format/report.rs

//! Recoverable problems found while reading `.dot` / `.ord` input.

use std::fmt;

use crate::graph::MAX_LAYER;

/// A problem the readers logged and then worked around.
///
/// None of these abort a run; they describe why the resulting graph may be
/// incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadIssue {
    /// Edge-list input ended before the closing `}`.
    MissingCloseBrace,
    /// Something other than `->` between source and destination.
    MalformedArrow { line: usize, token: String },
    /// Destination not immediately followed by `;`.
    MissingTerminator { line: usize, token: String },
    /// Input ended in the middle of an edge statement.
    UnexpectedEnd { expected: &'static str },
    /// A layer block did not start with a layer number.
    ExpectedLayerNumber { line: usize, token: String },
    /// A layer number above the largest layer a graph accepts.
    LayerOutOfRange { line: usize, token: String },
    /// A layer number was not followed by `{`.
    ExpectedOpenBrace { line: usize, token: String },
    /// Input ended inside the block of this layer.
    UnterminatedLayer { layer: usize },
}

impl fmt::Display for ReadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadIssue::MissingCloseBrace => write!(f, "missing }} at end of file"),
            ReadIssue::MalformedArrow { line, token } => {
                write!(f, "line {line}: '{token}' instead of ->")
            }
            ReadIssue::MissingTerminator { line, token } => {
                write!(f, "line {line}: '{token}' should end with ;")
            }
            ReadIssue::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ReadIssue::ExpectedLayerNumber { line, token } => {
                write!(f, "line {line}: expecting layer number, got '{token}'")
            }
            ReadIssue::LayerOutOfRange { line, token } => {
                write!(f, "line {line}: layer number {token} exceeds the maximum of {MAX_LAYER}")
            }
            ReadIssue::ExpectedOpenBrace { line, token } => {
                write!(f, "line {line}: expecting {{, got '{token}'")
            }
            ReadIssue::UnterminatedLayer { layer } => {
                write!(f, "unexpected end of input in layer {layer}")
            }
        }
    }
}

/// Issues collected while reading one or both inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadReport {
    pub issues: Vec<ReadIssue>,
}

impl ReadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub(crate) fn push(&mut self, issue: ReadIssue) {
        self.issues.push(issue);
    }

    pub fn merge(&mut self, other: ReadReport) {
        self.issues.extend(other.issues);
    }
}
