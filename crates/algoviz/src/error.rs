//! Error kinds surfaced by parsing and solving.
//!
//! Benign input drops (short rows in point/building lists, invalid buildings,
//! count lines) are not errors and never show up here.

use thiserror::Error;

/// Malformed input text. Line numbers are 1-based positions in the raw text,
/// counting blank and comment lines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input contains no data lines")]
    Empty,
    #[error("line {line}: expected a positive node count header, got {content:?}")]
    BadHeader { line: usize, content: String },
    #[error(
        "matrix row {row} missing after line {after_line}: header declares {expected} rows, found {found}"
    )]
    MissingRow {
        row: usize,
        after_line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: expected {expected} entries, found {found} in {content:?}")]
    RowLength {
        line: usize,
        content: String,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: row beyond the {expected} declared by the header: {content:?}")]
    ExtraRow {
        line: usize,
        content: String,
        expected: usize,
    },
    #[error("line {line}: invalid integer {token:?} in {content:?}")]
    InvalidInteger {
        line: usize,
        content: String,
        token: String,
    },
}

impl ParseError {
    /// Line the error points at, if it refers to a concrete input line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::MissingRow { after_line, .. } => Some(*after_line),
            Self::BadHeader { line, .. }
            | Self::RowLength { line, .. }
            | Self::ExtraRow { line, .. }
            | Self::InvalidInteger { line, .. } => Some(*line),
        }
    }
}

/// Failure of a single solver invocation. No partial result accompanies it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("source node {node} out of range for {node_count} nodes")]
    SourceOutOfRange { node: usize, node_count: usize },
}
