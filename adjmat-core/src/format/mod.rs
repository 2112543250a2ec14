//! Bracketed-row text format for adjacency matrices
//!
//! A matrix is written one row per line, each row wrapped in brackets with
//! cells separated by a comma and a space. There is no trailing newline.

pub mod constants;
pub mod render;

pub use render::{write_rows, RowsDisplay};
