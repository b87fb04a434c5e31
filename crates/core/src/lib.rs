//! Shared error types for the penknife utility crates.
//!
//! Every fallible operation across the workspace returns the [`Result`]
//! alias defined here, so callers can match on a single [`Error`] enum
//! regardless of which member crate produced the failure.

pub mod errors;

pub use self::errors::{Error, Result};
