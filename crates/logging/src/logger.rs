//! The logging façade.
//!
//! A [`Logger`] is an explicit context object holding the severity
//! threshold, the colorization policy, an optional interception
//! callback, the monotonic error-seen flag, and the output sink.
//! Construct one at process start (typically in an `Arc`) and hand it
//! to whatever needs to log; independent loggers in tests come for
//! free.

use crate::level::LogLevel;
use crate::sink::{ConsoleSink, Sink};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

const CYAN: &str = "\x1b[0;36m";
const GREEN: &str = "\x1b[0;32m";
const YELLOW: &str = "\x1b[0;33m";
const RED: &str = "\x1b[0;31m";
const RESET: &str = "\x1b[0m";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Interception callback invoked for every message that passed the
/// enabled check. Returning `false` suppresses emission.
pub type MessageCallback = Box<dyn Fn(LogLevel, &str) -> bool + Send + Sync>;

/// Severity filtering, colorization, and message interception over a
/// pluggable [`Sink`].
pub struct Logger {
    level: RwLock<LogLevel>,
    colorize: AtomicBool,
    error_logged: AtomicBool,
    callback: RwLock<Option<MessageCallback>>,
    sink: Mutex<Box<dyn Sink>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &*self.level.read())
            .field("colorize", &self.colorize.load(Ordering::Relaxed))
            .field("error_logged", &self.error_logged.load(Ordering::Relaxed))
            .field("callback", &self.callback.read().is_some())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger with the default configuration: level `Warning`,
    /// colorization off, no callback, error flag clear, stderr sink.
    pub fn new() -> Self {
        Self {
            level: RwLock::new(LogLevel::Warning),
            colorize: AtomicBool::new(false),
            error_logged: AtomicBool::new(false),
            callback: RwLock::new(None),
            sink: Mutex::new(Box::new(ConsoleSink::stderr())),
        }
    }

    /// Logger writing through the given sink; level resets to
    /// `Warning` and colorization follows [`Sink::is_terminal`].
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        let logger = Self::new();
        logger.configure(sink);
        logger
    }

    /// Replace the output sink. Destructive, not additive: whatever
    /// sink was attached before is dropped. Resets the level to
    /// `Warning` and sets colorization to true only when the new sink
    /// reports an interactive terminal. Callers must keep
    /// reconfiguration out of periods of active logging; the sink
    /// lock makes the race memory-safe, nothing more.
    pub fn configure(&self, sink: impl Sink + 'static) {
        self.set_colorization(sink.is_terminal());
        *self.sink.lock() = Box::new(sink);
        self.set_level(LogLevel::Warning);
    }

    /// Set the severity threshold. `LogLevel::None` disables output
    /// entirely; [`Logger::log`] then returns before any formatting
    /// work.
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Current severity threshold.
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_colorization(&self, colorize: bool) {
        self.colorize.store(colorize, Ordering::Relaxed);
    }

    pub fn colorization(&self) -> bool {
        self.colorize.load(Ordering::Relaxed)
    }

    /// True iff the threshold is not `None` and `level` is at least
    /// as severe as the threshold. Pure query, no side effect.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        let current = *self.level.read();
        current != LogLevel::None && level >= current
    }

    /// Whether a message at `Error` or worse has been logged since
    /// the last [`Logger::clear_error_logged_flag`]. Set even for
    /// messages that were filtered or vetoed from display.
    pub fn error_has_been_logged(&self) -> bool {
        self.error_logged.load(Ordering::SeqCst)
    }

    pub fn clear_error_logged_flag(&self) {
        self.error_logged.store(false, Ordering::SeqCst);
    }

    /// Install an interception callback. It runs after the enabled
    /// check for every subsequent log call; returning `false`
    /// suppresses the message. The error-seen flag is recorded before
    /// the callback runs, so vetoed errors still count.
    pub fn on_message(&self, callback: impl Fn(LogLevel, &str) -> bool + Send + Sync + 'static) {
        *self.callback.write() = Some(Box::new(callback));
    }

    /// Remove any installed interception callback.
    pub fn clear_on_message(&self) {
        *self.callback.write() = None;
    }

    /// ANSI color prefix for `level`, or the empty string when
    /// colorization is off.
    pub fn colorize(&self, level: LogLevel) -> &'static str {
        if !self.colorization() {
            return "";
        }
        match level {
            LogLevel::Trace | LogLevel::Debug => CYAN,
            LogLevel::Info => GREEN,
            LogLevel::Warning => YELLOW,
            LogLevel::Error | LogLevel::Fatal => RED,
            LogLevel::None => "",
        }
    }

    /// ANSI reset sequence, or the empty string when colorization is
    /// off.
    pub fn color_reset(&self) -> &'static str {
        if self.colorization() {
            RESET
        } else {
            ""
        }
    }

    /// Core entry point. Records the error-seen flag for `Error` and
    /// `Fatal` messages unconditionally, then emits one formatted
    /// line through the sink unless the level is filtered or an
    /// installed callback vetoes the message. Never fails: a sink
    /// write error is swallowed rather than surfaced to the caller.
    pub fn log(&self, namespace: &str, level: LogLevel, message: &str) {
        if level >= LogLevel::Error {
            self.error_logged.store(true, Ordering::SeqCst);
        }
        if !self.is_enabled(level) {
            return;
        }
        {
            let callback = self.callback.read();
            if let Some(callback) = callback.as_ref() {
                if !callback(level, message) {
                    return;
                }
            }
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let line = format!(
            "{timestamp} {:<5} {namespace} - {}{message}{}",
            level.name(),
            self.colorize(level),
            self.color_reset(),
        );
        let _ = self.sink.lock().write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::WriterSink;
    use std::io;
    use std::sync::Arc;

    /// Sink capturing lines into a shared buffer the test keeps a
    /// handle to.
    #[derive(Clone, Default)]
    pub(crate) struct CaptureSink(pub(crate) Arc<Mutex<Vec<String>>>);

    impl Sink for CaptureSink {
        fn write_line(&mut self, line: &str) -> io::Result<()> {
            self.0.lock().push(line.to_string());
            Ok(())
        }
    }

    fn capture_logger() -> (Logger, Arc<Mutex<Vec<String>>>) {
        let sink = CaptureSink::default();
        let lines = sink.0.clone();
        (Logger::with_sink(sink), lines)
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.level(), LogLevel::Warning);
        assert!(!logger.colorization());
        assert!(!logger.error_has_been_logged());
    }

    #[test]
    fn test_is_enabled_respects_threshold() {
        let logger = Logger::new();
        logger.set_level(LogLevel::Info);
        assert!(!logger.is_enabled(LogLevel::Trace));
        assert!(!logger.is_enabled(LogLevel::Debug));
        assert!(logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Warning));
        assert!(logger.is_enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_level_none_disables_everything() {
        let logger = Logger::new();
        logger.set_level(LogLevel::None);
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Fatal,
        ] {
            assert!(!logger.is_enabled(level));
        }
    }

    #[test]
    fn test_filtered_message_emits_nothing() {
        let (logger, lines) = capture_logger();
        logger.set_level(LogLevel::Info);
        logger.log("ns", LogLevel::Debug, "x");
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_emitted_line_format() {
        let (logger, lines) = capture_logger();
        logger.set_level(LogLevel::Info);
        logger.log("ns", LogLevel::Info, "y");
        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.ends_with("ns - y"), "unexpected line: {line}");
        // "<date> <time> <level:5> ..." with the level padded to 5
        let rest = &line[27..];
        assert!(rest.starts_with("INFO  "), "unexpected line: {line}");
        assert_eq!(line.as_bytes()[10], b' ');
        assert_eq!(&line[19..20], ".");
    }

    #[test]
    fn test_error_flag_set_even_when_filtered() {
        let (logger, lines) = capture_logger();
        logger.set_level(LogLevel::None);
        logger.log("ns", LogLevel::Error, "hidden");
        assert!(logger.error_has_been_logged());
        assert!(lines.lock().is_empty());
    }

    #[test]
    fn test_error_flag_is_monotonic_between_clears() {
        let (logger, _lines) = capture_logger();
        logger.log("ns", LogLevel::Fatal, "boom");
        assert!(logger.error_has_been_logged());
        logger.log("ns", LogLevel::Info, "calm");
        assert!(logger.error_has_been_logged());
        logger.clear_error_logged_flag();
        assert!(!logger.error_has_been_logged());
        logger.log("ns", LogLevel::Warning, "still calm");
        assert!(!logger.error_has_been_logged());
        logger.log("ns", LogLevel::Error, "again");
        assert!(logger.error_has_been_logged());
    }

    #[test]
    fn test_callback_vetoes_emission_but_not_error_flag() {
        let (logger, lines) = capture_logger();
        logger.set_level(LogLevel::Trace);
        logger.on_message(|_, _| false);
        logger.log("ns", LogLevel::Info, "dropped");
        logger.log("ns", LogLevel::Error, "also dropped");
        assert!(lines.lock().is_empty());
        assert!(logger.error_has_been_logged());
    }

    #[test]
    fn test_callback_observes_level_and_message() {
        let seen: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
        let (logger, lines) = capture_logger();
        logger.set_level(LogLevel::Debug);
        let record = seen.clone();
        logger.on_message(move |level, message| {
            record.lock().push((level, message.to_string()));
            true
        });
        logger.log("ns", LogLevel::Debug, "kept");
        assert_eq!(lines.lock().len(), 1);
        assert_eq!(*seen.lock(), vec![(LogLevel::Debug, "kept".to_string())]);
    }

    #[test]
    fn test_callback_runs_after_enabled_check() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::default();
        let (logger, _lines) = capture_logger();
        logger.set_level(LogLevel::Warning);
        let record = seen.clone();
        logger.on_message(move |_, message| {
            record.lock().push(message.to_string());
            true
        });
        logger.log("ns", LogLevel::Debug, "filtered before callback");
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_clear_on_message_restores_emission() {
        let (logger, lines) = capture_logger();
        logger.on_message(|_, _| false);
        logger.log("ns", LogLevel::Warning, "vetoed");
        logger.clear_on_message();
        logger.log("ns", LogLevel::Warning, "emitted");
        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ns - emitted"));
    }

    #[test]
    fn test_colorize_codes() {
        let logger = Logger::new();
        logger.set_colorization(true);
        assert_eq!(logger.colorize(LogLevel::Trace), "\x1b[0;36m");
        assert_eq!(logger.colorize(LogLevel::Debug), "\x1b[0;36m");
        assert_eq!(logger.colorize(LogLevel::Info), "\x1b[0;32m");
        assert_eq!(logger.colorize(LogLevel::Warning), "\x1b[0;33m");
        assert_eq!(logger.colorize(LogLevel::Error), "\x1b[0;31m");
        assert_eq!(logger.colorize(LogLevel::Fatal), "\x1b[0;31m");
        assert_eq!(logger.color_reset(), "\x1b[0m");

        logger.set_colorization(false);
        assert_eq!(logger.colorize(LogLevel::Warning), "");
        assert_eq!(logger.color_reset(), "");
    }

    #[test]
    fn test_colorized_message_is_wrapped_and_reset() {
        let (logger, lines) = capture_logger();
        logger.set_colorization(true);
        logger.log("ns", LogLevel::Warning, "careful");
        let lines = lines.lock();
        assert!(lines[0].ends_with("ns - \x1b[0;33mcareful\x1b[0m"));
    }

    #[test]
    fn test_configure_replaces_sink_and_resets_level() {
        let (logger, old_lines) = capture_logger();
        logger.set_level(LogLevel::Trace);

        let replacement = CaptureSink::default();
        let new_lines = replacement.0.clone();
        logger.configure(replacement);

        assert_eq!(logger.level(), LogLevel::Warning);
        assert!(!logger.colorization());
        logger.log("ns", LogLevel::Warning, "routed");
        assert!(old_lines.lock().is_empty());
        assert_eq!(new_lines.lock().len(), 1);
    }

    #[test]
    fn test_sink_write_failure_does_not_propagate() {
        struct FailingWriter;
        impl io::Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let logger = Logger::with_sink(WriterSink::new(FailingWriter));
        logger.log("ns", LogLevel::Warning, "lost");
    }

    #[test]
    fn test_shared_across_threads() {
        let (logger, lines) = capture_logger();
        let logger = Arc::new(logger);
        logger.set_level(LogLevel::Info);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = logger.clone();
                std::thread::spawn(move || {
                    logger.log("ns", LogLevel::Info, &format!("message {i}"));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(lines.lock().len(), 4);
    }
}
