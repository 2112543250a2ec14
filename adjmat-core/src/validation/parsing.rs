//! Parsing of the bracketed-row text format
//!
//! Reads back what `format::write_rows` produces. Cells may carry extra
//! spaces around them, but rows must be bracketed and separated by a single
//! newline.

use alloc::vec::Vec;
use core::fmt;

use crate::format::constants::{ROW_CLOSE, ROW_OPEN, ROW_SEPARATOR};

/// Reason a line of text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Line does not start with `[`
    MissingOpenBracket,
    /// Line does not end with `]`
    MissingCloseBracket,
    /// A cell is empty or not an `i32`
    InvalidCell,
}

/// Error returned when text is not in bracketed-row form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseGraphError {
    /// Zero-based line of the offending row
    pub line: usize,
    /// Zero-based cell within the row, for `InvalidCell`
    pub cell: Option<usize>,
    /// What went wrong
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::MissingOpenBracket => "row must start with '['",
            ParseErrorKind::MissingCloseBracket => "row must end with ']'",
            ParseErrorKind::InvalidCell => "cell is not a valid integer",
        };
        match self.cell {
            Some(cell) => write!(f, "line {}, cell {}: {msg}", self.line, cell),
            None => write!(f, "line {}: {msg}", self.line),
        }
    }
}

impl core::error::Error for ParseGraphError {}

/// Parse bracketed-row text into rows of cells
///
/// The empty string parses to zero rows and `[]` to an empty row. Row
/// lengths are not required to agree.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<i32>>, ParseGraphError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(ROW_SEPARATOR)
        .enumerate()
        .map(|(line, row)| parse_row(line, row))
        .collect()
}

fn parse_row(line: usize, row: &str) -> Result<Vec<i32>, ParseGraphError> {
    let error = |kind, cell| ParseGraphError { line, cell, kind };

    let inner = row
        .strip_prefix(ROW_OPEN)
        .ok_or(error(ParseErrorKind::MissingOpenBracket, None))?
        .strip_suffix(ROW_CLOSE)
        .ok_or(error(ParseErrorKind::MissingCloseBracket, None))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(cell, value)| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| error(ParseErrorKind::InvalidCell, Some(cell)))
        })
        .collect()
}
