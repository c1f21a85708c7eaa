pub mod convert;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "isbn10")]
#[command(about = "Convert a 12-digit product ID into an ISBN-10.")]
pub struct CommandLine {
    /// Product ID to convert, prompted for when omitted
    #[arg(allow_negative_numbers = true)]
    pub product_id: Option<String>,
    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
