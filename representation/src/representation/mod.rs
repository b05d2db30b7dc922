//! The representation entity and the engine that forges it.

mod engine;

pub use engine::{Engine, EngineBuilder};

use crate::errors::{
    ConfigurationError, MissingVariableError, NotFoundError, RenderError, RepresentationError,
};
use crate::render::Scope;
use crate::store::DataBag;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Binds a data mapping to a backing file and produces one output value.
///
/// A representation is forged from a logical name, fed zero or more data
/// entries, and asked for its output. Each [`output`](Self::output) call
/// re-renders the backing unit; nothing is memoized. Instances belong to a
/// single call path and are not meant to be shared across threads.
#[derive(Debug)]
pub struct Representation {
    engine: Engine,
    data: DataBag,
    name: Option<String>,
    file_path: Option<PathBuf>,
}

impl Representation {
    pub(crate) fn new(engine: Engine, data: DataBag) -> Self {
        Self {
            engine,
            data,
            name: None,
            file_path: None,
        }
    }

    /// Resolves `name` to a backing file and stores the path.
    ///
    /// May be called again to point the representation at a different
    /// backing file.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError` carrying the logical name when nothing
    /// resolves under the configured folder and extension.
    pub fn set_filename(&mut self, name: &str) -> Result<&mut Self, RepresentationError> {
        let config = self.engine.config();
        let path = self
            .engine
            .finder()
            .search(&config.representations_folder, name, &config.extension, false)
            .ok_or_else(|| NotFoundError::new(name))?;

        tracing::debug!(name, path = %path.display(), "resolved representation file");
        self.name = Some(name.to_string());
        self.file_path = Some(path);
        Ok(self)
    }

    /// Returns the resolved backing-file path, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the logical name, if one has been resolved.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns `MissingVariableError` when the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value, MissingVariableError> {
        self.data.get(key)
    }

    /// Returns the stored value, or `default` unchanged when absent.
    #[must_use]
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.data.get_or(key, default)
    }

    /// Returns the stored value, or resolves `default` on a miss.
    pub fn get_or_else(&self, key: &str, default: impl FnOnce() -> Value) -> Value {
        self.data.get_or_else(key, default)
    }

    /// Stores one value, silently overwriting an existing key. Chainable.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.data.set(key, value);
        self
    }

    /// Merges a whole mapping of entries, overwriting existing keys.
    pub fn merge<K, I>(&mut self, entries: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        self.data.merge(entries);
        self
    }

    /// Returns true iff the key holds a non-null value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.data.has(key)
    }

    /// Removes a key, returning the prior value if any.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.data.unset(key)
    }

    /// Borrows the data bag.
    #[must_use]
    pub fn data(&self) -> &DataBag {
        &self.data
    }

    /// Mutably borrows the data bag.
    pub fn data_mut(&mut self) -> &mut DataBag {
        &mut self.data
    }

    /// Renders the backing unit and returns its value.
    ///
    /// The data entries are bound into the render scope; mutations the
    /// backing unit makes to them are visible through the data accessors
    /// afterwards. Each call re-renders.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError` when no backing file has been set.
    /// - `RenderError` wrapping any failure raised by the backing unit, with
    ///   the original message and cause preserved.
    pub fn output(&mut self) -> Result<Value, RepresentationError> {
        let Some(path) = self.file_path.clone() else {
            return Err(ConfigurationError::new(
                "you must set the file to use within your representation before outputting",
            )
            .into());
        };

        let template = self.engine.template_for(self.name.as_deref());
        tracing::debug!(
            template = template.name(),
            path = %path.display(),
            "rendering representation"
        );

        let mut scope = Scope::new(&path, self.data.as_map_mut());
        template
            .render(&mut scope)
            .map_err(|err| RepresentationError::from(RenderError::from_render(err)))
    }
}
