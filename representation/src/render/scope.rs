//! The isolated environment a backing unit renders in.

use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

/// The execution environment handed to a backing unit.
///
/// A scope carries the resolved backing file and a mutable view of the
/// injected bindings. The mutable borrow is the isolation contract: the
/// backing unit can observe and mutate exactly these bindings, and the
/// mutations survive the render so the caller sees them through the
/// representation's data afterwards.
#[derive(Debug)]
pub struct Scope<'a> {
    path: &'a Path,
    bindings: &'a mut Map<String, Value>,
}

impl<'a> Scope<'a> {
    /// Creates a scope over a backing file and a set of bindings.
    pub fn new(path: &'a Path, bindings: &'a mut Map<String, Value>) -> Self {
        Self { path, bindings }
    }

    /// Returns the resolved backing-file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path
    }

    /// Reads the backing file's text.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the file cannot be read.
    pub fn source(&self) -> io::Result<String> {
        fs::read_to_string(self.path)
    }

    /// Returns the binding stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bindings.get(key)
    }

    /// Writes a binding; the caller sees the new value after the render.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.bindings.insert(key.into(), value);
    }

    /// Returns true if a binding exists under `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Borrows all bindings.
    #[must_use]
    pub fn bindings(&self) -> &Map<String, Value> {
        self.bindings
    }
}
