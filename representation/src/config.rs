//! Configuration for the representation engine.

use crate::errors::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Engine configuration.
///
/// The representations folder is the root under which logical names are
/// resolved; the extension is the suffix every backing file carries. The
/// folder is the only externally meaningful knob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root folder searched during resolution.
    pub representations_folder: PathBuf,
    /// Backing-file extension, without the leading dot.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            representations_folder: PathBuf::from("views/representations"),
            extension: "json".to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration with the conventional folder and extension.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON configuration file.
    ///
    /// Loading is a pure function of the file contents; calling it twice is
    /// harmless. Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            ConfigurationError::new(format!(
                "could not read config at {}: {err}",
                path.display()
            ))
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            ConfigurationError::new(format!(
                "could not parse config at {}: {err}",
                path.display()
            ))
        })
    }

    /// Sets the representations folder.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.representations_folder = folder.into();
        self
    }

    /// Sets the backing-file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_the_conventional_layout() {
        let config = Config::new();
        assert_eq!(
            config.representations_folder,
            PathBuf::from("views/representations")
        );
        assert_eq!(config.extension, "json");
    }

    #[test]
    fn from_file_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("representation.json");
        std::fs::write(
            &path,
            r#"{"representations_folder": "custom/views", "extension": "php"}"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.representations_folder, PathBuf::from("custom/views"));
        assert_eq!(config.extension, "php");
    }

    #[test]
    fn from_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("representation.json");
        std::fs::write(&path, r#"{"extension": "php"}"#).unwrap();

        let first = Config::from_file(&path).unwrap();
        let second = Config::from_file(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("representation.json");
        std::fs::write(&path, "{}").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unparsable_config_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("representation.json");
        std::fs::write(&path, "not a config").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.message.contains("could not parse"));
    }

    #[test]
    fn unreadable_config_is_a_configuration_error() {
        let err = Config::from_file("does/not/exist.json").unwrap_err();
        assert!(err.message.contains("could not read"));
    }
}
