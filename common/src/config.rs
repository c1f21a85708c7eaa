#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Disables ANSI colours in every line written to the terminal.
    pub no_color: bool,
    /// Raises the log level: 0 shows results only, 1 adds debug events,
    /// 2 or more adds trace events.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub verbosity: u8,
}

impl Config {
    /// Log filter directive matching the configured verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
