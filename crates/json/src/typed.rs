//! Typed extraction from JSON values.

use crate::container::JsonContainer;
use serde_json::Value;

/// Types extractable from a JSON value with a defined null-equivalent
/// default for missing and null entries.
pub trait FromJson: Sized {
    /// Value returned for a missing key or an explicit null.
    fn null_default() -> Self;

    /// Convert from a JSON value; `None` signals a type mismatch.
    fn from_json(value: &Value) -> Option<Self>;
}

impl FromJson for i64 {
    fn null_default() -> Self {
        0
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromJson for bool {
    fn null_default() -> Self {
        false
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJson for f64 {
    fn null_default() -> Self {
        0.0
    }

    // Integer values convert losslessly, matching numeric access in
    // every mainstream JSON library.
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromJson for String {
    fn null_default() -> Self {
        String::new()
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJson for JsonContainer {
    fn null_default() -> Self {
        JsonContainer::new()
    }

    fn from_json(value: &Value) -> Option<Self> {
        Some(JsonContainer::from(value.clone()))
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn null_default() -> Self {
        Vec::new()
    }

    fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                out.push(T::null_default());
            } else {
                out.push(T::from_json(item)?);
            }
        }
        Some(out)
    }
}
