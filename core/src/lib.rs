//! # ISBN-10 Conversion Core
//!
//! Pure conversion logic, no terminal or logging dependencies.
//! The front end lives in the `isbn10-cli` crate.

pub mod conversion;

pub use conversion::{CheckCharacter, ConversionError, check_character, convert};
