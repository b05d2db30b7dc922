//! Key/value store for representation data.

use crate::errors::{InvalidDataError, MissingVariableError};
use serde_json::{Map, Value};

/// Names the JSON shape of a value, for error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A bag of named values made visible to the backing unit at render time.
///
/// Keys are unique; setting an existing key overwrites it silently. The bag
/// is not synchronized: a representation belongs to a single call path, and
/// callers wanting to share one across threads must synchronize externally.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataBag {
    entries: Map<String, Value>,
}

impl DataBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from bulk initial data.
    ///
    /// `Null` yields an empty bag and a mapping supplies its entries. A
    /// sequence is accepted but binds nothing: its elements carry no names.
    /// Scalars are rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataError` naming the offending shape.
    pub fn from_value(value: Value) -> Result<Self, InvalidDataError> {
        match value {
            Value::Null | Value::Array(_) => Ok(Self::new()),
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(InvalidDataError::new(value_kind(&other))),
        }
    }

    /// Returns the value stored for `key`.
    ///
    /// A key explicitly set to `Null` is still returned; only a truly
    /// absent key fails.
    ///
    /// # Errors
    ///
    /// Returns `MissingVariableError` when the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value, MissingVariableError> {
        self.entries
            .get(key)
            .ok_or_else(|| MissingVariableError::new(key))
    }

    /// Returns the stored value, or `default` unchanged when the key is
    /// absent.
    #[must_use]
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.entries.get(key).cloned().unwrap_or(default)
    }

    /// Returns the stored value, or resolves `default` when the key is
    /// absent. The default is only evaluated on a miss.
    pub fn get_or_else(&self, key: &str, default: impl FnOnce() -> Value) -> Value {
        self.entries.get(key).cloned().unwrap_or_else(default)
    }

    /// Stores one value, silently overwriting an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Merges a whole mapping of entries, overwriting existing keys.
    pub fn merge<K, I>(&mut self, entries: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        for (key, value) in entries {
            self.entries.insert(key.into(), value);
        }
        self
    }

    /// Returns true iff the key holds a non-null value.
    ///
    /// A value explicitly stored as `Null` counts as absent here, even
    /// though `get` would return it.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|value| !value.is_null())
    }

    /// Removes a key, returning the prior value if any.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Borrows the underlying mapping.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Mutably borrows the underlying mapping.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.entries
    }
}

impl From<Map<String, Value>> for DataBag {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
