//! Error types for the representation layer.
//!
//! Every failure is raised synchronously to the immediate caller; nothing is
//! retried or recovered internally.

use thiserror::Error;

/// The main error type for representation operations.
#[derive(Debug, Error)]
pub enum RepresentationError {
    /// No backing file resolved for a logical name.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// A representation variable was read without being set.
    #[error("{0}")]
    MissingVariable(#[from] MissingVariableError),

    /// Bulk data was supplied in a shape that cannot be bound.
    #[error("{0}")]
    InvalidData(#[from] InvalidDataError),

    /// The representation was used before it was fully configured.
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    /// The backing unit failed while rendering.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised when resolution cannot locate a backing file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the requested representation could not be found: {name}")]
pub struct NotFoundError {
    /// The logical name that failed to resolve.
    pub name: String,
}

impl NotFoundError {
    /// Creates a not-found error for a logical name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Raised when a variable is read with no stored value and no default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("representation variable is not set: {key}")]
pub struct MissingVariableError {
    /// The missing key.
    pub key: String,
}

impl MissingVariableError {
    /// Creates a missing-variable error for a key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Raised when bulk initial data is neither a mapping nor a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the data parameter only accepts objects and arrays, {kind} given")]
pub struct InvalidDataError {
    /// The JSON shape of the rejected value.
    pub kind: String,
}

impl InvalidDataError {
    /// Creates an invalid-data error naming the offending shape.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Raised when a representation is used before it is ready, or when its
/// configuration cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigurationError {
    /// What was missing or malformed.
    pub message: String,
}

impl ConfigurationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised when the backing unit fails while rendering.
///
/// The original failure's message is preserved verbatim and the failure
/// itself is kept as the error source, so callers can still walk the cause
/// chain.
#[derive(Debug, Error)]
#[error("failed to render representation: {message}")]
pub struct RenderError {
    /// Message of the original failure.
    pub message: String,
    /// The original failure, if one was captured.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RenderError {
    /// Creates a render error from a bare message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a failure raised by a backing unit, keeping it as the cause.
    #[must_use]
    pub fn from_render(err: anyhow::Error) -> Self {
        let message = err.to_string();
        Self {
            message,
            source: Some(err.into()),
        }
    }
}
