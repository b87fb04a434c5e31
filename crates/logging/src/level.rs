//! Severity levels and their textual representation.

use penknife_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity classification for log messages.
///
/// The variants are declared from least to most severe so the derived
/// ordering is the severity ordering. [`LogLevel::None`] sorts below
/// every severity; it is the "logging disabled" sentinel, not a
/// severity a message can meaningfully carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    None,
    Trace,
    Debug,
    Info,
    #[serde(rename = "warn")]
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// Upper-case display name; empty for [`LogLevel::None`].
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::None => "",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    /// Parses exactly the tokens `none`, `trace`, `debug`, `info`,
    /// `warn`, `error`, and `fatal`. Matching is case-sensitive; any
    /// other input is an [`Error::InvalidLogLevel`] so callers never
    /// proceed with an indeterminate level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(LogLevel::None),
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(Error::invalid_log_level(s)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
