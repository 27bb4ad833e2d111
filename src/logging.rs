#![cfg(feature = "std")]

use std::env;
use std::io::Write;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout carries the board, keep diagnostics apart
            let _ = writeln!(std::io::stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging. `level` wins when given, otherwise the level is taken
/// from the `GOMOKU_LOG` environment variable, falling back to `warn`.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var("GOMOKU_LOG").ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
