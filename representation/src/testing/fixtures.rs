//! Fixtures: a configurable model and an on-disk representations folder.

use crate::config::Config;
use crate::convert::{Model, ModelValue};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A model with a fixed base mapping and property list.
#[derive(Debug, Default)]
pub struct TestModel {
    base: Map<String, Value>,
    properties: Vec<(String, ModelValue)>,
}

impl TestModel {
    /// Creates an empty test model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the base plain mapping.
    pub fn with_base(mut self, key: impl Into<String>, value: Value) -> Self {
        self.base.insert(key.into(), value);
        self
    }

    /// Adds an enumerable property.
    pub fn with_property(mut self, key: impl Into<String>, value: ModelValue) -> Self {
        self.properties.push((key.into(), value));
        self
    }
}

impl Model for TestModel {
    fn to_plain(&self) -> Map<String, Value> {
        self.base.clone()
    }

    fn properties(&self) -> Vec<(String, ModelValue)> {
        self.properties.clone()
    }
}

/// A temporary on-disk representations folder.
pub struct TempViews {
    _dir: tempfile::TempDir,
    folder: PathBuf,
}

impl TempViews {
    /// Creates the folder under a fresh temp dir.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let folder = dir.path().join("views/representations");
        fs::create_dir_all(&folder)?;
        Ok(Self { _dir: dir, folder })
    }

    /// Writes a backing file relative to the folder, creating parents.
    pub fn file(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.folder.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Returns the folder path.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Returns a config pointing at the folder.
    pub fn config(&self) -> Config {
        Config::default().with_folder(self.folder.clone())
    }
}
