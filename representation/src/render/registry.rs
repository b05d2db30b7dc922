//! Registry binding logical names to templates.

use super::{FnTemplate, Scope, Template};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of templates keyed by logical name.
///
/// Registering under an existing name replaces the previous template.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn Template>>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template under its own name.
    pub fn register(&mut self, template: impl Template + 'static) {
        let template: Arc<dyn Template> = Arc::new(template);
        self.templates
            .insert(template.name().to_string(), template);
    }

    /// Registers a closure under a logical name.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&mut Scope<'_>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.register(FnTemplate::new(name, func));
    }

    /// Looks a template up by logical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Template>> {
        self.templates.get(name).cloned()
    }

    /// Returns true if a template is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Returns the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
