//! Axum integration.
//!
//! [`AxumRouter`] collects registrations like any other [`Router`] and turns
//! them into a runnable [`axum::Router`] with
//! [`into_axum_router`](AxumRouter::into_axum_router).
//!
//! # Examples
//!
//! ```
//! use parsind_http::{handler, AxumRouter, HttpResponse, HttpVerb, Router};
//!
//! let mut router = AxumRouter::new();
//! router.register(HttpVerb::Get, "/books/:book_id", handler(|req| async move {
//!     HttpResponse::ok(format!("Book #{}!", req.param("book_id").unwrap_or("?")))
//! }));
//!
//! let app: axum::Router = router.into_axum_router();
//! ```

use std::fmt;

use axum::extract::Request;
use axum::routing::MethodRouter;
use indexmap::IndexMap;

use crate::path::{match_route, route_shape, to_axum_path};
use crate::request::HttpRequest;
use crate::router::Router;
use crate::verb::HttpVerb;
use crate::Handler;

/// A [`Router`] that builds an axum application.
///
/// Registrations are grouped by route shape: patterns that differ only in
/// their capture names (`/books/:book_id` and `/books/:slug`) share one axum
/// route. Within a group the first handler registered for a verb wins and
/// later ones are dropped with a warning, so building the app never hits an
/// axum route conflict. Each handler still sees its captures under the names
/// of its own pattern.
#[derive(Clone, Default)]
pub struct AxumRouter {
    routes: IndexMap<String, RouteGroup>,
}

/// The handlers sharing one route shape.
#[derive(Clone)]
struct RouteGroup {
    axum_path: String,
    verbs: IndexMap<HttpVerb, (String, Handler)>,
}

impl fmt::Debug for AxumRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes: Vec<(&String, Vec<&String>)> = self
            .routes
            .values()
            .map(|group| (&group.axum_path, group.verbs.values().map(|(p, _)| p).collect()))
            .collect();
        f.debug_struct("AxumRouter").field("routes", &routes).finish()
    }
}

impl AxumRouter {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of verb/path registrations that will be served.
    pub fn len(&self) -> usize {
        self.routes.values().map(|group| group.verbs.len()).sum()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns `true` if `verb` on the route pattern `path` will be served.
    ///
    /// A registration shadowed by an earlier one with the same shape is not
    /// served.
    pub fn contains(&self, verb: HttpVerb, path: &str) -> bool {
        self.routes
            .get(&route_shape(path))
            .and_then(|group| group.verbs.get(&verb))
            .is_some_and(|(pattern, _)| pattern == path)
    }

    /// Builds the axum application.
    pub fn into_axum_router(self) -> axum::Router {
        self.routes
            .into_values()
            .fold(axum::Router::new(), |app, group| {
                let method_router = group.verbs.into_iter().fold(
                    MethodRouter::<()>::new(),
                    |method_router, (verb, (pattern, handler))| {
                        method_router.on(verb.method_filter(), endpoint(pattern, handler))
                    },
                );
                app.route(&group.axum_path, method_router)
            })
    }
}

impl Router for AxumRouter {
    fn register(&mut self, verb: HttpVerb, path: &str, handler: Handler) {
        let group = self
            .routes
            .entry(route_shape(path))
            .or_insert_with(|| RouteGroup {
                axum_path: to_axum_path(path),
                verbs: IndexMap::new(),
            });
        if let Some((existing, _)) = group.verbs.get(&verb) {
            tracing::warn!(
                %verb,
                path,
                existing = %existing,
                "ignoring route shadowed by an earlier registration"
            );
            return;
        }
        group.verbs.insert(verb, (path.to_string(), handler));
    }
}

/// Adapts a [`Handler`] into an axum handler for the given route pattern.
fn endpoint(
    pattern: String,
    handler: Handler,
) -> impl Fn(Request) -> crate::BoxFuture + Clone + Send + Sync + 'static {
    move |req: Request| {
        let pattern = pattern.clone();
        let handler = handler.clone();
        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = axum::body::to_bytes(body, usize::MAX)
                .await
                .map(|bytes| bytes.to_vec())
                .unwrap_or_default();
            let params = match_route(&pattern, parts.uri.path()).unwrap_or_default();
            handler(HttpRequest::from_parts(parts, body, params)).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handler, HttpResponse};
    use http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn text_handler(body: &'static str) -> Handler {
        handler(move |_req| async move { HttpResponse::ok(body) })
    }

    async fn call(app: axum::Router, method: http::Method, uri: &str) -> (StatusCode, String) {
        let request = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(axum::body::Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut router = AxumRouter::new();
        router.register(HttpVerb::Get, "/books", text_handler("first"));
        router.register(HttpVerb::Get, "/books", text_handler("second"));
        router.register(HttpVerb::Post, "/books", text_handler("store"));
        assert_eq!(router.len(), 2);
        assert!(router.contains(HttpVerb::Post, "/books"));
        assert!(!router.contains(HttpVerb::Delete, "/books"));
    }

    #[tokio::test]
    async fn test_into_axum_router_routes_verbs() {
        let mut router = AxumRouter::new();
        router.register(HttpVerb::Get, "/books", text_handler("Books!"));
        router.register(HttpVerb::Post, "/books", text_handler("stored"));
        let app = router.into_axum_router();

        let (status, body) = call(app.clone(), http::Method::GET, "/books").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Books!");

        let (_, body) = call(app.clone(), http::Method::POST, "/books").await;
        assert_eq!(body, "stored");

        let (status, _) = call(app, http::Method::DELETE, "/books").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_into_axum_router_captures_params() {
        let mut router = AxumRouter::new();
        router.register(
            HttpVerb::Patch,
            "/books/:book_id",
            handler(|req: HttpRequest| async move {
                HttpResponse::ok(format!(
                    "Book #{} has been patched!",
                    req.param("book_id").unwrap_or("?")
                ))
            }),
        );
        let app = router.into_axum_router();
        let (status, body) = call(app, http::Method::PATCH, "/books/120").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Book #120 has been patched!");
    }

    fn echo_param(name: &'static str) -> Handler {
        handler(move |req: HttpRequest| async move {
            HttpResponse::ok(format!("{name}={}", req.param(name).unwrap_or("?")))
        })
    }

    #[tokio::test]
    async fn test_routes_differing_in_capture_names_share_a_route() {
        let mut router = AxumRouter::new();
        router.register(HttpVerb::Get, "/books/:book_id", echo_param("book_id"));
        router.register(HttpVerb::Get, "/books/:slug", echo_param("slug"));
        router.register(HttpVerb::Post, "/books/:slug", echo_param("slug"));
        assert_eq!(router.len(), 2);
        assert!(router.contains(HttpVerb::Get, "/books/:book_id"));
        assert!(!router.contains(HttpVerb::Get, "/books/:slug"));
        assert!(router.contains(HttpVerb::Post, "/books/:slug"));

        let app = router.into_axum_router();
        let (status, body) = call(app.clone(), http::Method::GET, "/books/dune").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "book_id=dune");

        let (_, body) = call(app, http::Method::POST, "/books/dune").await;
        assert_eq!(body, "slug=dune");
    }

    #[tokio::test]
    async fn test_captures_are_percent_decoded() {
        let mut router = AxumRouter::new();
        router.register(HttpVerb::Get, "/books/:book_id", echo_param("book_id"));
        let app = router.into_axum_router();
        let (status, body) = call(app, http::Method::GET, "/books/caf%C3%A9%20noir").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "book_id=café noir");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let mut router = AxumRouter::new();
        router.register(HttpVerb::Get, "/books", text_handler("Books!"));
        let (status, _) = call(router.into_axum_router(), http::Method::GET, "/authors").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
