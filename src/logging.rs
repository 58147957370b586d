#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// `log` backend for the game binaries. Records go to stderr, one
/// `LEVEL - message` line each.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    /// The menu, the boards and the final state all share stdout, and
    /// `sim` prints its JSON there. Sending records to stderr keeps both
    /// parseable when `TICTACTOE_LOG=debug` is set.
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. The level comes from `TICTACTOE_LOG`
/// (`trace` to `off`) and falls back to `warn`, so a plain game prints
/// nothing but the board. Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var("TICTACTOE_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}
