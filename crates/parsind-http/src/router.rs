//! The router collaborator and an in-memory implementation.
//!
//! The resource manager only ever calls [`Router::register`]. What the router
//! does with the verb/path/handler triple is up to the implementation:
//! [`RouteTable`] keeps them in memory and can dispatch requests directly,
//! while [`AxumRouter`](crate::AxumRouter) turns them into an axum app.

use std::collections::HashMap;
use std::fmt;

use crate::path::match_route;
use crate::request::HttpRequest;
use crate::response::HttpResponse;
use crate::verb::HttpVerb;
use crate::Handler;

/// Anything that can receive route registrations.
pub trait Router {
    /// Registers `handler` for `verb` requests matching `path`.
    fn register(&mut self, verb: HttpVerb, path: &str, handler: Handler);
}

impl<R: Router + ?Sized> Router for &mut R {
    fn register(&mut self, verb: HttpVerb, path: &str, handler: Handler) {
        (**self).register(verb, path, handler);
    }
}

impl<R: Router + ?Sized> Router for Box<R> {
    fn register(&mut self, verb: HttpVerb, path: &str, handler: Handler) {
        (**self).register(verb, path, handler);
    }
}

/// One registration held by a [`RouteTable`].
#[derive(Clone)]
pub struct RouteEntry {
    /// The HTTP verb.
    pub verb: HttpVerb,
    /// The route pattern (`/books/:book_id`).
    pub path: String,
    /// The bound controller method.
    pub handler: Handler,
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("verb", &self.verb)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// The result of resolving a request against a [`RouteTable`].
#[derive(Clone)]
pub struct RouteMatch {
    /// The matched handler.
    pub handler: Handler,
    /// The matched route pattern.
    pub pattern: String,
    /// The identifiers captured from the path.
    pub params: HashMap<String, String>,
}

impl fmt::Debug for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// An in-memory router.
///
/// Registrations are kept in order; when several match a request the first
/// one wins.
///
/// # Examples
///
/// ```
/// use parsind_http::{handler, HttpResponse, HttpVerb, RouteTable, Router};
///
/// let mut table = RouteTable::new();
/// table.register(HttpVerb::Get, "/books/:book_id", handler(|_req| async {
///     HttpResponse::ok("a book")
/// }));
///
/// let m = table.resolve(HttpVerb::Get, "/books/10").unwrap();
/// assert_eq!(m.params["book_id"], "10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns every registration in order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the first registration matching `verb` and a concrete `path`.
    pub fn resolve(&self, verb: HttpVerb, path: &str) -> Option<RouteMatch> {
        self.entries
            .iter()
            .filter(|entry| entry.verb == verb)
            .find_map(|entry| {
                match_route(&entry.path, path).map(|params| RouteMatch {
                    handler: entry.handler.clone(),
                    pattern: entry.path.clone(),
                    params,
                })
            })
    }

    /// Resolves and runs a request, answering 404 when nothing matches.
    pub async fn dispatch(&self, mut request: HttpRequest) -> HttpResponse {
        let resolved = HttpVerb::from_method(request.method())
            .and_then(|verb| self.resolve(verb, request.path()));
        match resolved {
            Some(route) => {
                request.set_params(route.params);
                (route.handler)(request).await
            }
            None => HttpResponse::not_found(format!(
                "No route matches {} {}",
                request.method(),
                request.path()
            )),
        }
    }
}

impl Router for RouteTable {
    fn register(&mut self, verb: HttpVerb, path: &str, handler: Handler) {
        self.entries.push(RouteEntry {
            verb,
            path: path.to_string(),
            handler,
        });
    }
}
