//! Rendering of rows into the bracketed-row text format
//!
//! Rendering writes into any `core::fmt::Write` sink, so it works without
//! an allocator.

use core::fmt::{self, Write};

use super::constants::{CELL_SEPARATOR, ROW_CLOSE, ROW_OPEN, ROW_SEPARATOR};

/// Write `rows` in bracketed-row form
///
/// Produces `[a, b]\n[c, d]` with no trailing newline. Zero rows write
/// nothing and an empty row writes `[]`.
pub fn write_rows<W, R>(out: &mut W, rows: &[R]) -> fmt::Result
where
    W: Write + ?Sized,
    R: AsRef<[i32]>,
{
    for (row_idx, row) in rows.iter().enumerate() {
        if row_idx > 0 {
            out.write_char(ROW_SEPARATOR)?;
        }
        out.write_char(ROW_OPEN)?;
        for (col_idx, cell) in row.as_ref().iter().enumerate() {
            if col_idx > 0 {
                out.write_str(CELL_SEPARATOR)?;
            }
            write!(out, "{cell}")?;
        }
        out.write_char(ROW_CLOSE)?;
    }
    Ok(())
}

/// `Display` adapter over borrowed rows
pub struct RowsDisplay<'a, R> {
    rows: &'a [R],
}

impl<'a, R: AsRef<[i32]>> RowsDisplay<'a, R> {
    /// Wrap rows for display
    pub const fn new(rows: &'a [R]) -> Self {
        Self { rows }
    }
}

impl<R: AsRef<[i32]>> fmt::Display for RowsDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows)
    }
}
