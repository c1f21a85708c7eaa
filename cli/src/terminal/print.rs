use std::io::{self, Write};

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use isbn10_common::config::Config;
use isbn10_core::ConversionError;
use tracing::info;

pub const PRODUCT_ID_INPUT_MESSAGE: &str = "Enter the product ID to be converted: ";
const ISBN_RESULT_LABEL: &str = "Resulting ISBN-10:";
const ISBN_ERROR_LABEL: &str = "An error occurred during ISBN-10 conversion:";

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Writes the prompt without a trailing newline so input follows on the same line.
pub fn prompt<W: Write>(output: &mut W, msg: &str) -> io::Result<()> {
    write!(output, "{msg}")?;
    output.flush()
}

pub fn result_line(isbn: &str) -> String {
    format!("{} {}", ISBN_RESULT_LABEL, isbn.color(colors::ISBN).bold())
}

pub fn error_line(err: &ConversionError) -> String {
    format!("{} {}", ISBN_ERROR_LABEL, err.to_string().color(colors::ERROR))
}
