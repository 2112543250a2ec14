//! Delimiters of the bracketed-row text format

/// Opens every row
pub const ROW_OPEN: char = '[';

/// Closes every row
pub const ROW_CLOSE: char = ']';

/// Separates adjacent cells within a row
pub const CELL_SEPARATOR: &str = ", ";

/// Separates adjacent rows; never written after the last row
pub const ROW_SEPARATOR: char = '\n';
