//! Backing units and their scoped execution.

mod registry;
#[cfg(test)]
mod render_tests;
mod scope;

pub use registry::TemplateRegistry;
pub use scope::Scope;

use serde_json::Value;
use std::fmt::Debug;

/// A backing unit: executable logic answering to a logical name.
///
/// Rendering happens inside a [`Scope`] that exposes exactly the injected
/// bindings and the resolved backing file, nothing else of the caller's
/// state. Mutations made to the bindings are visible to the caller after the
/// render.
pub trait Template: Debug + Send + Sync {
    /// Returns the logical name the unit answers to.
    fn name(&self) -> &str;

    /// Renders one value from the scope.
    ///
    /// # Errors
    ///
    /// Any error surfaces to the caller wrapped as a render failure with the
    /// cause preserved.
    fn render(&self, scope: &mut Scope<'_>) -> anyhow::Result<Value>;
}

/// A closure-backed template.
pub struct FnTemplate<F>
where
    F: Fn(&mut Scope<'_>) -> anyhow::Result<Value> + Send + Sync,
{
    name: String,
    func: F,
}

impl<F> FnTemplate<F>
where
    F: Fn(&mut Scope<'_>) -> anyhow::Result<Value> + Send + Sync,
{
    /// Creates a new closure-backed template.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Debug for FnTemplate<F>
where
    F: Fn(&mut Scope<'_>) -> anyhow::Result<Value> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTemplate").field("name", &self.name).finish()
    }
}

impl<F> Template for FnTemplate<F>
where
    F: Fn(&mut Scope<'_>) -> anyhow::Result<Value> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, scope: &mut Scope<'_>) -> anyhow::Result<Value> {
        (self.func)(scope)
    }
}

/// The default file-backed unit: parses the backing file as JSON.
///
/// Bindings are not consulted; this is what keeps purely static backing
/// files usable without registering anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTemplate;

impl JsonTemplate {
    /// Creates the JSON fallback template.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Template for JsonTemplate {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, scope: &mut Scope<'_>) -> anyhow::Result<Value> {
        let source = scope.source()?;
        Ok(serde_json::from_str(&source)?)
    }
}
