//! # parsind-http
//!
//! HTTP layer for parsind. Provides the [`HttpVerb`] set, request and response
//! types handed to controller methods, and the [`Router`] collaborator that
//! receives verb/path/handler triples.
//!
//! Two routers are provided:
//!
//! - [`RouteTable`]: an in-memory table that can resolve and dispatch requests
//!   without a server.
//! - [`AxumRouter`]: collects registrations and builds an [`axum::Router`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub mod axum_router;
pub mod path;
pub mod request;
pub mod response;
pub mod router;
pub mod verb;

pub use axum_router::AxumRouter;
pub use path::{join_url, match_route};
pub use request::HttpRequest;
pub use response::HttpResponse;
pub use router::{RouteEntry, RouteMatch, RouteTable, Router};
pub use verb::HttpVerb;

/// A boxed future returning an [`HttpResponse`].
pub type BoxFuture = Pin<Box<dyn Future<Output = HttpResponse> + Send>>;

/// A controller method: an async function from request to response.
///
/// Wrapped in an `Arc` so the same method can be bound to several routes.
pub type Handler = Arc<dyn Fn(HttpRequest) -> BoxFuture + Send + Sync>;

/// Wraps an async function or closure into a [`Handler`].
///
/// # Examples
///
/// ```
/// use parsind_http::{handler, HttpRequest, HttpResponse};
///
/// let show = handler(|req: HttpRequest| async move {
///     HttpResponse::ok(format!("Book #{}!", req.param("book_id").unwrap_or("?")))
/// });
/// ```
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}
