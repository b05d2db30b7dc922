//! The model capability and the polymorphic value it appears in.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Capability exposed by persisted-record objects.
///
/// The conversion logic depends only on this capability, never on a
/// concrete record type.
pub trait Model: Debug + Send + Sync {
    /// Returns the base plain-mapping representation of the record.
    fn to_plain(&self) -> Map<String, Value>;

    /// Returns the enumerable own properties, which may contain nested
    /// models or sequences of models.
    fn properties(&self) -> Vec<(String, ModelValue)>;
}

/// A value that may still contain model instances.
#[derive(Debug, Clone)]
pub enum ModelValue {
    /// A plain JSON value with no models inside.
    Plain(Value),
    /// An ordered sequence.
    Seq(Vec<ModelValue>),
    /// A mapping of named values.
    Map(HashMap<String, ModelValue>),
    /// A model instance.
    Model(Arc<dyn Model>),
}

impl ModelValue {
    /// Wraps a model instance.
    pub fn model(model: impl Model + 'static) -> Self {
        Self::Model(Arc::new(model))
    }

    /// Returns true if the value is a model instance.
    #[must_use]
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    /// Converts into plain JSON.
    ///
    /// Returns `None` when any model instance remains anywhere in the
    /// value.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Plain(value) => Some(value),
            Self::Seq(items) => items
                .into_iter()
                .map(Self::into_json)
                .collect::<Option<Vec<_>>>()
                .map(Value::Array),
            Self::Map(entries) => {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value.into_json()?);
                }
                Some(Value::Object(map))
            }
            Self::Model(_) => None,
        }
    }
}

impl From<Value> for ModelValue {
    fn from(value: Value) -> Self {
        Self::Plain(value)
    }
}

impl PartialEq for ModelValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Plain(a), Self::Plain(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Model instances compare by identity.
            (Self::Model(a), Self::Model(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
