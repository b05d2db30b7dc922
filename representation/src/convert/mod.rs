//! Conversion of ORM model values into plain mappings.
//!
//! Model instances are opaque to serializers; this module recursively
//! replaces them with their plain-mapping equivalents so the result can be
//! handed straight to JSON output.

mod model;

pub use model::{Model, ModelValue};

use std::collections::HashMap;

/// Recursively replaces model instances with their plain-mapping
/// equivalents.
///
/// Only the first element of a sequence is inspected to decide whether the
/// sequence converts: a mixed sequence whose head is not a model keeps its
/// later models unconverted. Mappings, plain values, and anything else pass
/// through unchanged.
///
/// The result contains no model instances, so applying the function to its
/// own output is a no-op.
#[must_use]
pub fn models_to_plain(value: ModelValue) -> ModelValue {
    match value {
        ModelValue::Seq(items) => {
            // The head element decides for the whole sequence.
            if matches!(items.first(), Some(ModelValue::Model(_))) {
                ModelValue::Seq(items.into_iter().map(models_to_plain).collect())
            } else {
                ModelValue::Seq(items)
            }
        }
        ModelValue::Model(model) => convert_model(model.as_ref()),
        other => other,
    }
}

/// Converts a single model: its base plain mapping, overlaid with the
/// recursively converted enumerable properties. Converted property values
/// win over the base mapping for the same key.
fn convert_model(model: &dyn Model) -> ModelValue {
    let mut merged: HashMap<String, ModelValue> = model
        .to_plain()
        .into_iter()
        .map(|(key, value)| (key, ModelValue::Plain(value)))
        .collect();

    for (key, property) in model.properties() {
        merged.insert(key, models_to_plain(property));
    }

    ModelValue::Map(merged)
}
