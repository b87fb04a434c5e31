//! File and path helpers for the penknife crates.
//!
//! Tilde expansion, shell-argument quoting, atomic writes, and
//! readability checks. All fallible operations return
//! [`penknife_core::Result`].

pub mod atomic;
pub mod file;
pub mod paths;
pub mod shell;

pub use atomic::{write_atomic, write_atomic_string, write_atomic_with_mode};
pub use file::{each_line, file_readable, read};
pub use paths::tilde_expand;
pub use shell::{shell_quote, shell_quote_args};
