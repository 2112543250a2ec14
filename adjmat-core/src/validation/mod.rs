//! Operand validation and text parsing for adjacency matrices
//!
//! This module contains pure functions with no I/O dependencies.

pub mod dimensions;
#[cfg(feature = "alloc")]
pub mod parsing;

pub use dimensions::{check_divisor, check_same_dimensions};
#[cfg(feature = "alloc")]
pub use parsing::{parse_rows, ParseErrorKind, ParseGraphError};
