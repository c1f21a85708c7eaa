//! # Product ID to ISBN-10 Conversion
//!
//! A product ID is a 12-digit number (EAN/UPC style). Dropping its 3-digit
//! prefix leaves the first 9 digits of an ISBN-10; the 10th character is an
//! error control value computed from those 9 digits.
//!
//! Taking the Da Vinci Code as an example, the product ID is `978140007917`,
//! `978` is removed and the error control of `140007917` is `9`, giving
//! `1400079179`.

use std::fmt;

use thiserror::Error;

const PRODUCT_ID_LENGTH: usize = 12;
const PREFIX_LENGTH: usize = 3;
const ISBN_10_LENGTH: u32 = 10;
const MODULUS: u32 = 11;

/// Reasons a product ID is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Invalid product ID type")]
    InvalidType,
    #[error("Invalid product ID length")]
    InvalidLength,
}

/// The final character of an ISBN-10: a digit, or `x` for the value 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckCharacter(u8);

impl CheckCharacter {
    /// Returns `None` for values above 10.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 10).then_some(Self(value))
    }

    pub fn as_char(self) -> char {
        char::from_digit(u32::from(self.0), 10).unwrap_or('x')
    }
}

impl fmt::Display for CheckCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Computes the error control for ISBN digits, weighted 10 down to 2 from
/// left to right, so that the full weighted sum is a multiple of 11.
pub fn check_character(partial: &str) -> Result<CheckCharacter, ConversionError> {
    let mut weighted_sum: u32 = 0;
    for (weight, ch) in (1..=ISBN_10_LENGTH).rev().zip(partial.chars()) {
        let digit = ch.to_digit(10).ok_or(ConversionError::InvalidType)?;
        weighted_sum += weight * digit;
    }

    let control = (MODULUS - weighted_sum % MODULUS) % MODULUS;
    Ok(CheckCharacter(control as u8))
}

/// Converts a 12-digit product ID into its ISBN-10.
///
/// The type check runs before the length check: only ASCII digits are
/// accepted, so signs, whitespace and decimal points are `InvalidType`.
pub fn convert(product_id: &str) -> Result<String, ConversionError> {
    if product_id.is_empty() || !product_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::InvalidType);
    }
    if product_id.len() != PRODUCT_ID_LENGTH {
        return Err(ConversionError::InvalidLength);
    }

    let partial = &product_id[PREFIX_LENGTH..];
    let check = check_character(partial)?;

    Ok(format!("{partial}{check}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
