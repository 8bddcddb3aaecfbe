//! # parsind
//!
//! Declarative resource routing. Describe resources as a nested tree, and
//! parsind binds each one to a collection route and an item route wired to
//! convention-named controller methods.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `parsind` to get everything, or depend on
//! individual crates for finer-grained control.
//!
//! ```
//! use parsind::prelude::*;
//!
//! let loader = ControllerRegistry::new("controllers")
//!     .with("booksController", Controller::new()
//!         .with_method("index", handler(|_req| async { HttpResponse::ok("Books!") })));
//!
//! let settings = Settings::new("controllers")
//!     .routes(RouteNode::list([RouteNode::from("books")]));
//!
//! let manager = parsind(settings, AxumRouter::new(), loader).unwrap();
//! assert_eq!(manager.bound_routes().len(), 1);
//! assert_eq!(manager.missing_handlers().len(), 5);
//!
//! let app: parsind::axum::Router = manager.into_router().into_axum_router();
//! ```

/// Errors, settings, the route configuration tree, and text utilities.
pub use parsind_core as core;

/// HTTP verbs, request/response types, and routers.
pub use parsind_http as http;

/// The route tree parser, binder, registry, and resource manager.
pub use parsind_resources as resources;

/// Test client, demo controllers, and route list assertions.
#[cfg(feature = "testing")]
pub use parsind_test as test;

// Third-party re-exports
pub use axum;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;

use parsind_core::{ParsindResult, Settings};
use parsind_http::Router;
use parsind_resources::{ControllerLoader, ResourceManager};

/// Binds `settings.routes` onto `router`, loading controllers with `loader`.
///
/// Equivalent to [`ResourceManager::new`].
pub fn parsind<R: Router>(
    settings: Settings,
    router: R,
    loader: impl ControllerLoader + 'static,
) -> ParsindResult<ResourceManager<R>> {
    ResourceManager::new(settings, router, loader)
}

/// The most commonly used items.
pub mod prelude {
    pub use crate::parsind;
    pub use parsind_core::logging::setup_logging;
    pub use parsind_core::{
        settings_loader, ControllerMethods, FileCase, ParsindError, ParsindResult, RouteNode,
        Settings,
    };
    pub use parsind_http::{
        handler, AxumRouter, Handler, HttpRequest, HttpResponse, HttpVerb, RouteTable, Router,
    };
    pub use parsind_resources::{
        Controller, ControllerLoader, ControllerRegistry, ConventionTable, NamingAdapter,
        PrettyRoute, ResourceManager,
    };
}
