//! Bound routes and missing handlers.
//!
//! Every binding attempt ends up in one of two append-only lists kept by
//! [`RouteRegistry`]: routes that were registered on the router, and routes
//! whose controller lacked the requested method.

use std::path::Path;

use parsind_http::{Handler, HttpVerb};
use serde::{Deserialize, Serialize};

use crate::controller::ResolvedController;

/// One binding attempt: a verb and path wired to a controller method.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// The HTTP verb.
    pub verb: HttpVerb,
    /// The route pattern (`/books/:book_id`).
    pub path: String,
    /// The controller the method was looked up on.
    pub controller: ResolvedController,
    /// The controller method name.
    pub method: String,
}

/// A record whose method was found and registered on the router.
pub type BoundRoute = RouteRecord;

/// A record whose method was absent from its controller.
pub type MissingRoute = RouteRecord;

impl RouteRecord {
    /// Returns the handler, if the controller has the method.
    pub fn handler(&self) -> Option<Handler> {
        self.controller.handler(&self.method)
    }

    /// Formats the record as `VERB path`.
    pub fn route_line(&self) -> String {
        format!("{} {}", self.verb, self.path)
    }

    /// Formats the handler as `<controller path relative to root>#<method>`.
    ///
    /// If the controller does not live under `root`, its full path is used.
    pub fn handler_line(&self, root: &Path) -> String {
        let identity = self.controller.identity();
        let relative = identity.strip_prefix(root).unwrap_or(identity);
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        format!("{name}#{}", self.method)
    }

    /// Returns the display form of this record.
    pub fn pretty(&self, root: &Path) -> PrettyRoute {
        PrettyRoute {
            route: self.route_line(),
            handler: self.handler_line(root),
        }
    }
}

/// The display form of a [`RouteRecord`].
///
/// ```json
/// { "route": "GET /books/:book_id", "handler": "booksController#show" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrettyRoute {
    /// `VERB path`.
    pub route: String,
    /// `controller#method`.
    pub handler: String,
}

/// The two lists of binding attempts.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    bound: Vec<BoundRoute>,
    missing: Vec<MissingRoute>,
}

impl RouteRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            bound: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Appends a bound route.
    pub fn record_bound(&mut self, route: BoundRoute) {
        self.bound.push(route);
    }

    /// Appends a missing handler.
    pub fn record_missing(&mut self, route: MissingRoute) {
        self.missing.push(route);
    }

    /// Bound routes in binding order.
    pub fn bound(&self) -> &[BoundRoute] {
        &self.bound
    }

    /// Missing handlers in binding order.
    pub fn missing(&self) -> &[MissingRoute] {
        &self.missing
    }

    /// Bound routes in display form, relative to `root`.
    pub fn pretty_bound(&self, root: &Path) -> Vec<PrettyRoute> {
        self.bound.iter().map(|route| route.pretty(root)).collect()
    }

    /// Missing handlers in display form, relative to `root`.
    pub fn pretty_missing(&self, root: &Path) -> Vec<PrettyRoute> {
        self.missing.iter().map(|route| route.pretty(root)).collect()
    }
}
