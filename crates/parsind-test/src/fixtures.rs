//! Demo controllers for tests.
//!
//! [`demo_loader`] registers a small book catalogue under a controllers
//! directory:
//!
//! ```text
//! indexController               welcome, postBar
//! booksController               real handlers for all six conventions
//! authorsController             fake
//! tagsController                fake
//! books/authorsController       fake
//! books/tagsController          fake + getFoo
//! books/tags/fooBarController   empty
//! books/tags/foo_bar/barsController  fake
//! authors/tagsController        fake
//! authors/booksController       fake
//! tags/authorsController        fake
//! tags/booksController          fake + postSortBooks
//! ```
//!
//! [`demo_routes`] is a route tree that uses most of them.

use std::path::PathBuf;

use parsind_core::RouteNode;
use parsind_http::{handler, Handler, HttpRequest, HttpResponse};
use parsind_resources::{Controller, ControllerRegistry};

/// The six conventional method names.
pub const CONVENTIONAL_METHODS: [&str; 6] = ["index", "store", "show", "update", "patch", "destroy"];

/// Answers with the request path as a JSON string.
fn echo_path() -> Handler {
    handler(|req: HttpRequest| async move { HttpResponse::json(&req.path()) })
}

fn text(body: &'static str) -> Handler {
    handler(move |_req| async move { HttpResponse::ok(body) })
}

fn book_id(req: &HttpRequest) -> &str {
    req.param("book_id").unwrap_or_default()
}

/// A controller with all six conventional methods, each echoing the request
/// path as JSON.
pub fn fake_controller() -> Controller {
    CONVENTIONAL_METHODS
        .into_iter()
        .map(|name| (name, echo_path()))
        .collect()
}

/// The books controller with a distinct answer per method.
pub fn books_controller() -> Controller {
    Controller::new()
        .with_method("index", text("Books!"))
        .with_method(
            "show",
            handler(|req: HttpRequest| async move {
                HttpResponse::ok(format!("Book #{}!", book_id(&req)))
            }),
        )
        .with_method("store", text("A book has been validated and stored!"))
        .with_method(
            "update",
            handler(|req: HttpRequest| async move {
                HttpResponse::ok(format!("Book #{} has been updated!", book_id(&req)))
            }),
        )
        .with_method(
            "patch",
            handler(|req: HttpRequest| async move {
                HttpResponse::ok(format!("Book #{} has been patched!", book_id(&req)))
            }),
        )
        .with_method(
            "destroy",
            handler(|req: HttpRequest| async move {
                HttpResponse::ok(format!("Book #{} has been removed!", book_id(&req)))
            }),
        )
}

/// Registers the demo controllers under `root`.
pub fn demo_loader(root: impl Into<PathBuf>) -> ControllerRegistry {
    ControllerRegistry::new(root)
        .with(
            "indexController",
            Controller::new()
                .with_method("welcome", text("Welcome!"))
                .with_method("postBar", text("postBar handler")),
        )
        .with("booksController", books_controller())
        .with("authorsController", fake_controller())
        .with("tagsController", fake_controller())
        .with("books/authorsController", fake_controller())
        .with(
            "books/tagsController",
            fake_controller().with_method("getFoo", text("getFoo handler")),
        )
        .with("books/tags/fooBarController", Controller::new())
        .with("books/tags/foo_bar/barsController", fake_controller())
        .with("authors/tagsController", fake_controller())
        .with("authors/booksController", fake_controller())
        .with("tags/authorsController", fake_controller())
        .with(
            "tags/booksController",
            fake_controller().with_method(
                "postSortBooks",
                handler(|_req| async { HttpResponse::json(&"postSortBooks handler") }),
            ),
        )
}

/// The demo route tree.
///
/// Binds 45 routes against [`demo_loader`]; the six conventional routes of
/// the empty `books/tags/fooBarController` end up as missing handlers.
pub fn demo_routes() -> RouteNode {
    RouteNode::map([
        ("GET /", RouteNode::from("indexController#welcome")),
        ("POST /", RouteNode::from("indexController#welcome")),
        (
            "books",
            RouteNode::list([
                RouteNode::from("authors"),
                RouteNode::map([(
                    "tags",
                    RouteNode::map([
                        ("GET /foo", RouteNode::from("getFoo")),
                        ("foo_bar", RouteNode::list([RouteNode::from("bars")])),
                    ]),
                )]),
            ]),
        ),
        (
            "authors",
            RouteNode::list([RouteNode::from("tags"), RouteNode::from("books")]),
        ),
    ])
}

/// A tree to add on top of [`demo_routes`]. Binds 19 more routes.
pub fn demo_extra_routes() -> RouteNode {
    RouteNode::map([(
        "tags",
        RouteNode::list([
            RouteNode::from("authors"),
            RouteNode::map([(
                "books",
                RouteNode::map([("POST sort", RouteNode::from("postSortBooks"))]),
            )]),
        ]),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsind_resources::ControllerLoader;
    use std::path::Path;

    #[test]
    fn test_fake_controller_has_conventions() {
        let controller = fake_controller();
        for method in CONVENTIONAL_METHODS {
            assert!(controller.contains(method));
        }
        assert_eq!(controller.len(), 6);
    }

    #[test]
    fn test_demo_loader_paths() {
        let loader = demo_loader("controllers");
        assert_eq!(loader.len(), 12);
        let tags = loader
            .load(Path::new("controllers/books/tagsController"))
            .unwrap();
        assert!(tags.contains("getFoo"));
        let foo_bar = loader
            .load(Path::new("controllers/books/tags/fooBarController"))
            .unwrap();
        assert!(foo_bar.is_empty());
    }

    #[tokio::test]
    async fn test_books_controller_answers() {
        let books = books_controller();
        let request = HttpRequest::builder().param("book_id", "7").build();
        let response = (books.get("patch").unwrap())(request).await;
        assert_eq!(response.text(), "Book #7 has been patched!");
    }
}
