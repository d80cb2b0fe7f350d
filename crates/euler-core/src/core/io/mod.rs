//! # Fixture I/O
//!
//! Readers for the small text files that accompany some problems. Each reader
//! implements [`traits::FixtureFile`] and reports malformed input with the 1-based
//! line number it was found on.

pub mod coords;
pub mod error;
pub mod matrix;
pub mod sudoku;
pub mod traits;
pub mod triangle;

pub use error::{FixtureError, FixtureParseErrorKind};
pub use traits::FixtureFile;
