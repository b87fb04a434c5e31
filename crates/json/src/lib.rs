//! Keyed, typed access over JSON documents.
//!
//! [`JsonContainer`] wraps a [`serde_json::Value`] and adds nested
//! get/set by key path, type inspection, and null/missing defaulting
//! for code that works with ad-hoc JSON rather than typed structs.

pub mod container;
pub mod typed;

pub use container::{DataType, JsonContainer};
pub use typed::FromJson;
