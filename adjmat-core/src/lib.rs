#![no_std]

//! adjmat core - Adjacency Matrix Definitions
//!
//! This crate provides the error kinds, access traits, bracketed-row text
//! format and dimension validation shared by adjacency matrix implementations

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
