//! String helpers.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Case-insensitive comparison of two strings, suitable as the
/// ordering for a sorted map keyed by user-supplied names.
pub fn ci_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// String wrapper whose equality, ordering, and hash compare after
/// Unicode lowercase folding, for use as a map key. The original
/// spelling is preserved and can be read back.
#[derive(Debug, Clone)]
pub struct CiString(String);

impl CiString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The string as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CiString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CiString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq for CiString {
    fn eq(&self, other: &Self) -> bool {
        ci_cmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for CiString {}

impl PartialOrd for CiString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CiString {
    fn cmp(&self, other: &Self) -> Ordering {
        ci_cmp(&self.0, &other.0)
    }
}

impl Hash for CiString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.0.chars().flat_map(char::to_lowercase) {
            c.hash(state);
        }
    }
}

/// Plural suffix for a count: empty for exactly one, `"s"` otherwise.
pub fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Random hyphenated identifier (a v4 UUID).
pub fn random_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
