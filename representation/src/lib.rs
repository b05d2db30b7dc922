//! # Representation
//!
//! A thin representation layer for web services: resolve a backing file by
//! logical name, inject a data mapping into its scope, render it, and hand
//! back a single serializable value. A recursive converter turns ORM-style
//! model objects into plain mappings fit for JSON.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use representation::prelude::*;
//!
//! let engine = Engine::builder()
//!     .config(Config::default())
//!     .template_fn("user", |scope: &mut Scope<'_>| -> anyhow::Result<serde_json::Value> {
//!         let name = scope.get("name").and_then(|v| v.as_str()).unwrap_or_default();
//!         Ok(serde_json::json!({ "greeting": format!("Hello, {name}") }))
//!     })
//!     .build();
//!
//! let mut user = engine.forge("user", Some(serde_json::json!({ "name": "Ada" })))?;
//! let value = user.output()?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod convert;
pub mod errors;
pub mod render;
pub mod representation;
pub mod resolve;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::convert::{models_to_plain, Model, ModelValue};
    pub use crate::errors::{
        ConfigurationError, InvalidDataError, MissingVariableError, NotFoundError,
        RenderError, RepresentationError,
    };
    pub use crate::render::{FnTemplate, JsonTemplate, Scope, Template, TemplateRegistry};
    pub use crate::representation::{Engine, EngineBuilder, Representation};
    pub use crate::resolve::{DirectoryFinder, Finder};
    pub use crate::store::DataBag;
}
