//! Text → typed inputs.
//!
//! Shared line rules
//! - `\r\n` or any single line-break char (`\n`, `\r`, VT, FF, NEL, U+2028,
//!   U+2029) ends a line; lines are trimmed.
//! - Empty lines and lines starting with `#` are ignored.
//! - Tokens are separated by any run of commas and/or whitespace.
//!
//! Per kind
//! - Adjacency matrix: mandatory `n` header, then exactly `n` rows of `n` integers.
//! - Points: first two tokens of each line with ≥2 tokens; single-token lines are counts.
//! - Buildings: `left height right` per line; rows with `left >= right` or
//!   `height <= 0` are dropped silently.

use nalgebra::DMatrix;

use crate::error::ParseError;
use crate::graph::AdjacencyMatrix;
use crate::hull::IntPoint;
use crate::skyline::Building;

/// A non-blank, non-comment line with its 1-based position in the raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLine {
    pub line: usize,
    pub content: String,
}

impl DataLine {
    pub fn tokens(&self) -> Vec<&str> {
        tokens(&self.content)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into data lines (trimmed, comments and blanks removed).
pub fn data_lines(text: &str) -> Vec<DataLine> {
    let unified = text.replace("\r\n", "\n");
    unified
        .split(is_line_break)
        .enumerate()
        .filter_map(|(i, raw)| {
            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                None
            } else {
                Some(DataLine {
                    line: i + 1,
                    content: content.to_string(),
                })
            }
        })
        .collect()
}

/// Tokens of a single line, split on commas and whitespace.
pub fn tokens(content: &str) -> Vec<&str> {
    content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_int(token: &str, dl: &DataLine) -> Result<i32, ParseError> {
    token.parse::<i32>().map_err(|_| ParseError::InvalidInteger {
        line: dl.line,
        content: dl.content.clone(),
        token: token.to_string(),
    })
}

/// Parse an `n`-header adjacency matrix.
pub fn parse_adjacency_matrix(text: &str) -> Result<AdjacencyMatrix, ParseError> {
    let lines = data_lines(text);
    let (header, rows) = lines.split_first().ok_or(ParseError::Empty)?;
    let bad_header = || ParseError::BadHeader {
        line: header.line,
        content: header.content.clone(),
    };
    let n = match header.tokens().as_slice() {
        [single] => single.parse::<usize>().map_err(|_| bad_header())?,
        _ => return Err(bad_header()),
    };
    if n == 0 {
        return Err(bad_header());
    }

    if rows.len() < n {
        return Err(ParseError::MissingRow {
            row: rows.len(),
            after_line: lines.last().map_or(header.line, |l| l.line),
            expected: n,
            found: rows.len(),
        });
    }

    // Grows with the tokens actually present; `n` alone is untrusted.
    let mut entries = Vec::new();
    for dl in &rows[..n] {
        let toks = dl.tokens();
        if toks.len() != n {
            return Err(ParseError::RowLength {
                line: dl.line,
                content: dl.content.clone(),
                expected: n,
                found: toks.len(),
            });
        }
        for tok in toks {
            entries.push(parse_int(tok, dl)?);
        }
    }
    if let Some(extra) = rows.get(n) {
        return Err(ParseError::ExtraRow {
            line: extra.line,
            content: extra.content.clone(),
            expected: n,
        });
    }
    Ok(AdjacencyMatrix::from(DMatrix::from_row_slice(n, n, &entries)))
}

/// Parse a point list; single-token lines are treated as counts and skipped.
pub fn parse_points(text: &str) -> Result<Vec<IntPoint>, ParseError> {
    let lines = data_lines(text);
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut pts = Vec::with_capacity(lines.len());
    for dl in &lines {
        let toks = dl.tokens();
        let [x, y, ..] = toks.as_slice() else {
            tracing::trace!(line = dl.line, content = %dl.content, "skip count line");
            continue;
        };
        pts.push(IntPoint::new(parse_int(x, dl)?, parse_int(y, dl)?));
    }
    Ok(pts)
}

/// Parse a building list in `left height right` column order.
pub fn parse_buildings(text: &str) -> Result<Vec<Building>, ParseError> {
    let lines = data_lines(text);
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut out = Vec::with_capacity(lines.len());
    for dl in &lines {
        let toks = dl.tokens();
        let [l, h, r, ..] = toks.as_slice() else {
            tracing::trace!(line = dl.line, content = %dl.content, "skip short line");
            continue;
        };
        let b = Building {
            left: parse_int(l, dl)?,
            right: parse_int(r, dl)?,
            height: parse_int(h, dl)?,
        };
        if b.is_valid() {
            out.push(b);
        } else {
            tracing::trace!(line = dl.line, ?b, "drop degenerate building");
        }
    }
    Ok(out)
}
