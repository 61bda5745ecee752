use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

use crate::error::Result;

/// Writes `[LEVEL] message` lines: warnings and errors to stderr, the rest to stdout.
struct ConsoleLogger {
    level: LevelFilter,
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if record.level() <= Level::Warn {
                let _ = writeln!(std::io::stderr(), "[{}] {}", record.level(), record.args());
            } else {
                let _ = writeln!(std::io::stdout(), "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

pub fn init_logger(level: LevelFilter) -> Result<()> {
    let logger = ConsoleLogger { level };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
