//! Engine assembling the configuration, file locator, and templates.

use super::Representation;
use crate::config::Config;
use crate::errors::RepresentationError;
use crate::render::{JsonTemplate, Scope, Template, TemplateRegistry};
use crate::resolve::{DirectoryFinder, Finder};
use crate::store::DataBag;
use serde_json::Value;
use std::sync::Arc;

/// Builder for [`Engine`].
#[derive(Debug)]
pub struct EngineBuilder {
    config: Config,
    finder: Arc<dyn Finder>,
    templates: TemplateRegistry,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Creates a builder with the default config and filesystem finder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            finder: Arc::new(DirectoryFinder::new()),
            templates: TemplateRegistry::new(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replaces the file locator.
    #[must_use]
    pub fn finder(mut self, finder: Arc<dyn Finder>) -> Self {
        self.finder = finder;
        self
    }

    /// Registers a template under its own name.
    #[must_use]
    pub fn template(mut self, template: impl Template + 'static) -> Self {
        self.templates.register(template);
        self
    }

    /// Registers a closure-backed template under a logical name.
    #[must_use]
    pub fn template_fn<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Scope<'_>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.templates.register_fn(name, func);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            inner: Arc::new(EngineInner {
                config: self.config,
                finder: self.finder,
                templates: self.templates,
                fallback: Arc::new(JsonTemplate::new()),
            }),
        }
    }
}

#[derive(Debug)]
struct EngineInner {
    config: Config,
    finder: Arc<dyn Finder>,
    templates: TemplateRegistry,
    fallback: Arc<dyn Template>,
}

/// Factory for representations.
///
/// Owns the configuration, the file locator, and the registered templates.
/// These collaborators are injected once at build time and shared by every
/// forged representation; there is no global state.
#[derive(Debug, Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

impl Engine {
    /// Starts building an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Creates an engine with the given configuration and no registered
    /// templates; every name renders through the JSON fallback.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::builder().config(config).build()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub(crate) fn finder(&self) -> &dyn Finder {
        self.inner.finder.as_ref()
    }

    /// The template a logical name renders through; unregistered names fall
    /// back to the JSON template.
    pub(crate) fn template_for(&self, name: Option<&str>) -> Arc<dyn Template> {
        name.and_then(|name| self.inner.templates.get(name))
            .unwrap_or_else(|| Arc::clone(&self.inner.fallback))
    }

    /// Forges a representation: validates the bulk data, resolves the
    /// logical name, and returns the bound representation.
    ///
    /// # Errors
    ///
    /// - `InvalidDataError` when `data` is neither null nor a mapping.
    /// - `NotFoundError` when the name does not resolve to a backing file.
    pub fn forge(
        &self,
        name: &str,
        data: Option<Value>,
    ) -> Result<Representation, RepresentationError> {
        let data = match data {
            Some(value) => DataBag::from_value(value)?,
            None => DataBag::new(),
        };

        let mut representation = Representation::new(self.clone(), data);
        representation.set_filename(name)?;
        Ok(representation)
    }

    /// Creates a representation with no backing file yet;
    /// [`set_filename`](Representation::set_filename) must succeed before
    /// [`output`](Representation::output) will.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataError` when `data` is neither null nor a mapping.
    pub fn detached(&self, data: Option<Value>) -> Result<Representation, RepresentationError> {
        let data = match data {
            Some(value) => DataBag::from_value(value)?,
            None => DataBag::new(),
        };
        Ok(Representation::new(self.clone(), data))
    }
}
