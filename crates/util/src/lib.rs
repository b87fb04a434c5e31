//! Small string helpers shared across the penknife crates.

pub mod strings;

pub use strings::{ci_cmp, plural, random_id, CiString};
