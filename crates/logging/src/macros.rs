//! Convenience macros over [`Logger::log`], supplying the calling
//! module path as the namespace.
//!
//! ```
//! use penknife_logging::{log_warn, Logger};
//!
//! let logger = Logger::new();
//! log_warn!(logger, "disk {} is at {}%", "sda1", 93);
//! ```

/// Log at `Trace` with `module_path!()` as the namespace.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(module_path!(), $crate::LogLevel::Trace, &format!($($arg)+))
    };
}

/// Log at `Debug` with `module_path!()` as the namespace.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(module_path!(), $crate::LogLevel::Debug, &format!($($arg)+))
    };
}

/// Log at `Info` with `module_path!()` as the namespace.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(module_path!(), $crate::LogLevel::Info, &format!($($arg)+))
    };
}

/// Log at `Warning` with `module_path!()` as the namespace.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(module_path!(), $crate::LogLevel::Warning, &format!($($arg)+))
    };
}

/// Log at `Error` with `module_path!()` as the namespace.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(module_path!(), $crate::LogLevel::Error, &format!($($arg)+))
    };
}

/// Log at `Fatal` with `module_path!()` as the namespace.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(module_path!(), $crate::LogLevel::Fatal, &format!($($arg)+))
    };
}
