//! # parsind-resources
//!
//! Turns a nested route configuration tree into flat route bindings.
//!
//! Given
//!
//! ```json
//! { "books": ["authors", { "tags": { "GET /foo": "getFoo" } }] }
//! ```
//!
//! the parser binds `books`, then `authors` and `tags` under
//! `/books/:book_id`, then `GET /books/:book_id/tags/foo` to
//! `books/tagsController#getFoo`. Each resource gets a collection route and an
//! item route wired to conventionally named controller methods; methods a
//! controller does not have are recorded as missing handlers instead of
//! failing the configuration.
//!
//! ## Modules
//!
//! - [`manager`] - [`ResourceManager`], the entry point
//! - [`parser`] - Recursive descent over [`RouteNode`](parsind_core::RouteNode)
//! - [`binder`] - Resource and special route binding
//! - [`registry`] - Bound routes and missing handlers
//! - [`controller`] - Controllers, loaders, and resolution
//! - [`conventions`] - Verb → method conventions
//! - [`context`] - The context passed down the tree
//! - [`naming`] - Controller file names and singularization

pub mod binder;
pub mod context;
pub mod controller;
pub mod conventions;
pub mod manager;
pub mod naming;
pub mod parser;
pub mod registry;

pub use binder::{BindOutcome, ResourceBinder};
pub use context::ParentContext;
pub use controller::{
    Controller, ControllerLoader, ControllerRegistry, ControllerResolver, ResolvedController,
};
pub use conventions::ConventionTable;
pub use manager::ResourceManager;
pub use naming::{FileCaseNaming, NamingAdapter};
pub use parser::RouteTreeParser;
pub use registry::{BoundRoute, MissingRoute, PrettyRoute, RouteRecord, RouteRegistry};
