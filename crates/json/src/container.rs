//! A thin container over [`serde_json::Value`] for code that wants
//! keyed, typed access without declaring structs.
//!
//! Reads are forgiving: a missing key or a null value yields the
//! requested type's null-equivalent default, while a value of the
//! wrong type is an error. Writes navigate nested keys, creating
//! intermediate objects on demand.

use crate::typed::FromJson;
use penknife_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

const DEFAULT_LEFT_PADDING: usize = 4;
const LEFT_PADDING_INCREMENT: usize = 2;

/// Classification of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Object,
    Array,
    String,
    Int,
    Bool,
    Double,
    Null,
}

fn value_type(value: &Value) -> DataType {
    match value {
        Value::Object(_) => DataType::Object,
        Value::Array(_) => DataType::Array,
        Value::String(_) => DataType::String,
        Value::Bool(_) => DataType::Bool,
        Value::Number(n) if n.is_f64() => DataType::Double,
        Value::Number(_) => DataType::Int,
        Value::Null => DataType::Null,
    }
}

/// Owned JSON document with keyed access helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonContainer {
    root: Value,
}

impl Default for JsonContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonContainer {
    /// Empty JSON object.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Borrow the underlying value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Member names of the root object; empty when the root is not an
    /// object.
    pub fn keys(&self) -> Vec<String> {
        match &self.root {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Compact JSON text for the value under `key`.
    pub fn render_key(&self, key: &str) -> Result<String> {
        match self.root.get(key) {
            Some(value) => Ok(value.to_string()),
            None => Err(Error::json_key(format!("unknown key: {key}"))),
        }
    }

    /// Line-per-key rendering of an object root: nested objects
    /// recurse with increased padding, arrays print as raw JSON,
    /// scalars print inline, null prints `NULL`. Non-object roots
    /// print as raw JSON; empty roots print `{}`, `[]`, or `""`.
    pub fn pretty(&self) -> String {
        self.pretty_with(DEFAULT_LEFT_PADDING)
    }

    /// [`JsonContainer::pretty`] with an explicit starting padding.
    pub fn pretty_with(&self, left_padding: usize) -> String {
        if self.is_empty() {
            return match self.data_type() {
                DataType::Object => "{}",
                DataType::Array => "[]",
                _ => "\"\"",
            }
            .to_string();
        }

        let map = match &self.root {
            Value::Object(map) => map,
            _ => return self.root.to_string(),
        };

        let mut out = String::new();
        for (key, value) in map {
            out.push_str(&" ".repeat(left_padding));
            out.push_str(key);
            out.push_str(" : ");
            match value {
                Value::Object(_) => {
                    out.push('\n');
                    let nested = JsonContainer::from(value.clone());
                    out.push_str(&nested.pretty_with(left_padding + LEFT_PADDING_INCREMENT));
                }
                Value::Array(_) => out.push_str(&value.to_string()),
                Value::String(s) => out.push_str(s),
                Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                Value::Number(n) => out.push_str(&n.to_string()),
                Value::Null => out.push_str("NULL"),
            }
            out.push('\n');
        }
        out
    }

    /// True only for an empty object or empty array root.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn includes(&self, key: &str) -> bool {
        self.root.get(key).is_some()
    }

    /// Whether every key along the nested path exists.
    pub fn includes_path(&self, keys: &[&str]) -> bool {
        let mut current = &self.root;
        for key in keys {
            match current.get(*key) {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }

    pub fn data_type(&self) -> DataType {
        value_type(&self.root)
    }

    /// Type of the value under `key`; unknown keys are an error.
    pub fn data_type_of(&self, key: &str) -> Result<DataType> {
        self.data_type_at(&[key])
    }

    /// Type of the value under a nested path; unknown keys are an
    /// error.
    pub fn data_type_at(&self, keys: &[&str]) -> Result<DataType> {
        let mut current = &self.root;
        for key in keys {
            current = current
                .get(*key)
                .ok_or_else(|| Error::json_key(format!("unknown key: {key}")))?;
        }
        Ok(value_type(current))
    }

    /// The root converted to `T`; null yields `T`'s null-equivalent
    /// default, a type mismatch is an error.
    pub fn root_as<T: FromJson>(&self) -> Result<T> {
        self.get_path(&[])
    }

    /// The value under `key` converted to `T`. A missing key or a
    /// null value yields `T`'s null-equivalent default; a value of
    /// another type is an error.
    pub fn get<T: FromJson>(&self, key: &str) -> Result<T> {
        self.get_path(&[key])
    }

    /// [`JsonContainer::get`] over a nested path; a missing key at
    /// any depth yields the default.
    pub fn get_path<T: FromJson>(&self, keys: &[&str]) -> Result<T> {
        let mut current = &self.root;
        for key in keys {
            match current.get(*key) {
                Some(next) => current = next,
                None => return Ok(T::null_default()),
            }
        }
        if current.is_null() {
            return Ok(T::null_default());
        }
        T::from_json(current).ok_or_else(|| {
            Error::json_key(format!(
                "value at '{}' does not have the requested type",
                keys.join(".")
            ))
        })
    }

    /// Set `key` in the root object. The root must be an object.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_path(&[key], value)
    }

    /// Set a value under a nested path, creating intermediate objects
    /// for missing keys. Navigating through an existing non-object
    /// value is an error.
    pub fn set_path(&mut self, keys: &[&str], value: impl Into<Value>) -> Result<()> {
        let mut current = &mut self.root;
        for key in keys {
            let map = current.as_object_mut().ok_or_else(|| {
                Error::json_key("invalid key supplied; cannot navigate the provided path")
            })?;
            current = map
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        *current = value.into();
        Ok(())
    }
}

impl FromStr for JsonContainer {
    type Err = Error;

    /// Parse JSON text; any JSON value kind is accepted as the root.
    /// Malformed text, including trailing content, is an
    /// [`Error::JsonParse`].
    fn from_str(s: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(s)?;
        Ok(Self { root })
    }
}

impl fmt::Display for JsonContainer {
    /// Compact JSON text for the whole document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl From<Value> for JsonContainer {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl From<JsonContainer> for Value {
    fn from(container: JsonContainer) -> Self {
        container.root
    }
}
