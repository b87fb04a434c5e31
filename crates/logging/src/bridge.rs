//! Bridge from the `log` crate's macros into a [`Logger`].
//!
//! Installing the bridge lets the rest of a codebase keep using
//! `log::info!` and friends while severity filtering, colorization,
//! interception, and error-flag tracking all happen in the façade.
//! The record target becomes the namespace.

use crate::level::LogLevel;
use crate::logger::Logger;
use std::sync::Arc;

/// Adapter implementing [`log::Log`] over a shared [`Logger`].
#[derive(Debug)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

fn map_level(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warning,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug => LogLevel::Debug,
        log::Level::Trace => LogLevel::Trace,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        // Forward unconditionally; the facade applies its own filter
        // and must see suppressed errors for the error-seen flag.
        self.logger.log(
            record.target(),
            map_level(record.level()),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {}
}

/// Register `logger` as the process-wide `log` backend. The max level
/// filter is left wide open so runtime [`Logger::set_level`] changes
/// take effect without re-installation. Fails if another `log`
/// backend was installed first.
pub fn install(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
