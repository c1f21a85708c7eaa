#![cfg(test)]
use isbn10_common::config::Config;

#[test]
fn default_config_shows_results_only() {
    let cfg = Config::default();
    assert!(!cfg.no_color);
    assert_eq!(cfg.verbosity, 0);
    assert_eq!(cfg.log_directive(), "info");
}

#[test]
fn verbose_config_enables_debug() {
    let cfg = Config {
        no_color: true,
        verbosity: 1,
    };
    assert_eq!(cfg.log_directive(), "debug");
}
