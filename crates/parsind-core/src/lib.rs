//! # parsind-core
//!
//! Core types, settings, the route configuration tree, and error types for
//! parsind. This crate has no HTTP dependencies and is the foundation for all
//! other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`routes`] - The [`RouteNode`] configuration tree
//! - [`settings`] - Resource manager settings
//! - [`settings_loader`] - Loading settings from TOML, JSON, and YAML files
//! - [`utils`] - File-case conversion and singularization
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod routes;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{ParsindError, ParsindResult};
pub use routes::RouteNode;
pub use settings::{ControllerMethods, Settings};
pub use utils::text::FileCase;
