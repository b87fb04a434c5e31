//! Logging façade for the penknife crates.
//!
//! Sits between call sites and a pluggable output sink, providing
//! severity-level configuration, enable/disable queries, colorized
//! terminal output, an optional veto callback over every message, and
//! a monotonic "error seen" flag useful for exit-code decisions.
//!
//! The façade is a [`Logger`] instance rather than hidden global
//! state; share one through an `Arc`, or install the [`bridge`] to
//! route the `log` crate's macros through it.

pub mod bridge;
pub mod level;
pub mod logger;
pub mod macros;
pub mod sink;

pub use bridge::{install, LogBridge};
pub use level::LogLevel;
pub use logger::{Logger, MessageCallback};
pub use sink::{ConsoleSink, Sink, WriterSink};
