//! Open-ended property maps.
//!
//! Every mutating operation accepts a [`PropertyMap`] applied after the
//! named fields, so properties not enumerated by a record's signature stay
//! expressible as the remote schema evolves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting record properties.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// A recognized property key rejected its value.
    #[error("invalid value '{value}' for property '{key}': {reason}")]
    InvalidValue {
        /// Property key.
        key: String,
        /// Offending value.
        value: String,
        /// What the property expected.
        reason: &'static str,
    },

    /// A wire record could not be interpreted as the requested type.
    #[error("malformed {class_id} record at '{path}': {reason}")]
    Malformed {
        /// Class the record was interpreted as.
        class_id: &'static str,
        /// Path of the offending record.
        path: String,
        /// Why interpretation failed.
        reason: &'static str,
    },
}

impl PropertyError {
    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason,
        }
    }

    /// Creates a malformed-record error.
    #[must_use]
    pub fn malformed(
        class_id: &'static str,
        path: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::Malformed {
            class_id,
            path: path.into(),
            reason,
        }
    }
}

/// Open-ended `key -> value` mapping of record properties.
///
/// The map is applied after named fields are set and wins on key collision,
/// so an entry for a named field overwrites the typed value. Unknown keys
/// are preserved untouched and travel to the remote system as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(HashMap<String, String>);

impl PropertyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns whether the map contains a key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a property, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the properties.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlays `other` onto this map; entries of `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parses an integer seconds property.
pub(crate) fn parse_u32(key: &str, value: &str) -> Result<u32, PropertyError> {
    value
        .trim()
        .parse()
        .map_err(|_| PropertyError::invalid_value(key, value, "expected an integer number of seconds"))
}

/// Parses a `yes`/`no` property into a boolean.
pub(crate) fn parse_yes_no(key: &str, value: &str) -> Result<bool, PropertyError> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(PropertyError::invalid_value(key, value, "expected 'yes' or 'no'")),
    }
}

/// Renders a boolean as the enumerated `yes`/`no` wire form.
pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
