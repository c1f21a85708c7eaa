mod commands;
mod terminal;

use commands::{CommandLine, convert};
use isbn10_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_color: commands.no_color,
        verbosity: commands.verbose,
    };

    logging::init_logging(&cfg)?;
    print::initialize(&cfg);

    convert::convert(commands.product_id, &cfg)
}
