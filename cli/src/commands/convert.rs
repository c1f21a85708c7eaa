use std::io::{self, BufRead, Write};

use anyhow::Context;
use isbn10_common::config::Config;
use tracing::debug;

use crate::terminal::print;

/// Converts `product_id`, prompting on stdin when it was not given, and
/// prints the result or the rejection reason.
///
/// A rejected product ID is reported, not returned as an error.
pub fn convert(product_id: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let product_id: String = match product_id {
        Some(id) => id,
        None => read_product_id(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    debug!(verbosity = cfg.verbosity, "Converting product ID {product_id:?}");

    match isbn10_core::convert(&product_id) {
        Ok(isbn) => {
            debug!("Conversion succeeded");
            print::print(&print::result_line(&isbn));
        }
        Err(err) => {
            debug!(?err, "Conversion rejected");
            print::print(&print::error_line(&err));
        }
    }

    Ok(())
}

/// Prompts on `output` and reads one line from `input`.
///
/// End of input and bytes that are not UTF-8 both yield an empty string,
/// which the converter rejects as an invalid type.
pub fn read_product_id<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    print::prompt(output, print::PRODUCT_ID_INPUT_MESSAGE).context("failed to write prompt")?;

    let mut buf: Vec<u8> = Vec::new();
    input
        .read_until(b'\n', &mut buf)
        .context("failed to read product ID from stdin")?;

    let line = String::from_utf8(buf).unwrap_or_default();
    Ok(strip_line_terminator(&line).to_owned())
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
