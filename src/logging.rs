//! Logging for eglewinfo.
//!
//! The binary calls `initialize()` exactly once during startup. Messages go to stderr so
//! they do not interleave with the report on stdout.

use std::env;
use std::io::{self, LineWriter, Stderr, Write};
use std::sync::Mutex;

use log::{self, LevelFilter};

/// List of targets which will be logged.
const ALLOWED_TARGETS: [&str; 2] = ["eglew", "eglewinfo"];

pub fn initialize(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    // Use env_logger if RUST_LOG environment variable is defined. Otherwise,
    // use the eglew-only logger.
    if env::var("RUST_LOG").is_ok() {
        env_logger::try_init()
    } else {
        log::set_max_level(level);
        log::set_boxed_logger(Box::new(Logger::new()))
    }
}

pub struct Logger {
    stderr: Mutex<LineWriter<Stderr>>,
}

impl Logger {
    fn new() -> Self {
        Logger { stderr: Mutex::new(LineWriter::new(io::stderr())) }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        // Get target crate.
        let index = record.target().find(':').unwrap_or_else(|| record.target().len());
        let target = &record.target()[..index];

        // Only log our own crates.
        if !self.enabled(record.metadata()) || !ALLOWED_TARGETS.contains(&target) {
            return;
        }

        let msg = format!("[{:<5}] [{}] {}\n", record.level(), target, record.args());

        if let Ok(mut stderr) = self.stderr.lock() {
            let _ = stderr.write_all(msg.as_ref());
        }
    }

    fn flush(&self) {
        if let Ok(mut stderr) = self.stderr.lock() {
            let _ = stderr.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_takes_precedence() {
        env::set_var("RUST_LOG", "eglew=debug");

        initialize(LevelFilter::Off).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
