//! Binding the demo route tree end to end, without a server.

use std::path::Path;

use parsind_core::{settings_loader, ParsindError, RouteNode, Settings};
use parsind_http::{handler, HttpResponse, HttpVerb, RouteTable};
use parsind_resources::{ControllerRegistry, PrettyRoute, ResourceManager};
use parsind_test::assertions::{assert_routes_match, route_list_compare, RouteKey};
use parsind_test::fixtures::{demo_extra_routes, demo_loader, demo_routes, fake_controller};

const CONTROLLERS: &str = "app/controllers";

fn manager() -> ResourceManager<RouteTable> {
    let settings = Settings::new(CONTROLLERS).routes(demo_routes());
    ResourceManager::new(settings, RouteTable::new(), demo_loader(CONTROLLERS)).unwrap()
}

/// The six conventional bindings of a resource at `entry`.
fn conventional(entry: &'static str, item: &'static str) -> Vec<RouteKey<'static>> {
    vec![
        (HttpVerb::Get, entry, "index"),
        (HttpVerb::Post, entry, "store"),
        (HttpVerb::Get, item, "show"),
        (HttpVerb::Put, item, "update"),
        (HttpVerb::Patch, item, "patch"),
        (HttpVerb::Delete, item, "destroy"),
    ]
}

fn expected_bound() -> Vec<RouteKey<'static>> {
    let mut routes = vec![(HttpVerb::Get, "/", "welcome"), (HttpVerb::Post, "/", "welcome")];
    routes.extend(conventional("/books", "/books/:book_id"));
    routes.extend(conventional(
        "/books/:book_id/authors",
        "/books/:book_id/authors/:author_id",
    ));
    routes.extend(conventional("/books/:book_id/tags", "/books/:book_id/tags/:tag_id"));
    routes.push((HttpVerb::Get, "/books/:book_id/tags/foo", "getFoo"));
    routes.extend(conventional(
        "/books/:book_id/tags/:tag_id/foo_bar/:foo_bar_id/bars",
        "/books/:book_id/tags/:tag_id/foo_bar/:foo_bar_id/bars/:bar_id",
    ));
    routes.extend(conventional("/authors", "/authors/:author_id"));
    routes.extend(conventional(
        "/authors/:author_id/tags",
        "/authors/:author_id/tags/:tag_id",
    ));
    routes.extend(conventional(
        "/authors/:author_id/books",
        "/authors/:author_id/books/:book_id",
    ));
    routes
}

#[test]
fn test_binds_every_expected_route() {
    let manager = manager();
    let expected = expected_bound();
    assert_eq!(expected.len(), 45);
    assert_eq!(manager.bound_routes().len(), 45);
    assert_routes_match(manager.bound_routes(), &expected);
    assert_eq!(manager.router().len(), 45);
}

#[test]
fn test_records_missing_handlers_of_empty_controller() {
    let manager = manager();
    let expected = conventional(
        "/books/:book_id/tags/:tag_id/foo_bar",
        "/books/:book_id/tags/:tag_id/foo_bar/:foo_bar_id",
    );
    assert_eq!(manager.missing_handlers().len(), 6);
    assert!(route_list_compare(manager.missing_handlers(), &expected));
    for missing in manager.missing_handlers() {
        assert_eq!(
            missing.controller.identity(),
            Path::new("app/controllers/books/tags/fooBarController")
        );
    }
}

#[test]
fn test_nested_routes_share_parent_item_prefix() {
    let manager = manager();
    for route in manager.bound_routes() {
        let identity = route.controller.identity();
        if identity.starts_with("app/controllers/books/tags/foo_bar") {
            assert!(route.path.starts_with("/books/:book_id/tags/:tag_id/foo_bar/:foo_bar_id/"));
        } else if identity.starts_with("app/controllers/books") {
            assert!(route.path.starts_with("/books/:book_id/"), "{}", route.path);
        }
    }
}

#[test]
fn test_pretty_listing() {
    let manager = manager();
    let first = &manager.bound_routes()[0];
    let pretty = &manager.pretty_bound_routes()[0];
    assert_eq!(
        *pretty,
        PrettyRoute {
            route: format!("{} {}", first.verb, first.path),
            handler: format!("indexController#{}", first.method),
        }
    );
    assert_eq!(pretty.route, "GET /");

    assert!(manager.pretty_bound_routes().contains(&PrettyRoute {
        route: "GET /books/:book_id/tags/foo".to_string(),
        handler: "books/tagsController#getFoo".to_string(),
    }));
    assert_eq!(
        manager.pretty_missing_handlers()[0],
        PrettyRoute {
            route: "GET /books/:book_id/tags/:tag_id/foo_bar".to_string(),
            handler: "books/tags/fooBarController#index".to_string(),
        }
    );
}

#[test]
fn test_pretty_listing_serializes() {
    let manager = manager();
    let json = serde_json::to_value(manager.pretty_missing_handlers()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
    assert_eq!(
        json[5],
        serde_json::json!({
            "route": "DELETE /books/:book_id/tags/:tag_id/foo_bar/:foo_bar_id",
            "handler": "books/tags/fooBarController#destroy"
        })
    );
}

#[test]
fn test_add_routes_appends() {
    let mut manager = manager();
    manager.add_routes(demo_extra_routes()).unwrap();
    assert_eq!(manager.bound_routes().len(), 64);
    assert!(manager.bound_routes().iter().any(|route| {
        route.verb == HttpVerb::Post
            && route.path == "/tags/:tag_id/books/sort"
            && route.method == "postSortBooks"
    }));

    manager.add_routes(demo_extra_routes()).unwrap();
    assert_eq!(manager.bound_routes().len(), 83);
    assert_eq!(manager.missing_handlers().len(), 6);
}

#[test]
fn test_router_resolves_concrete_paths() {
    let manager = manager();
    let router = manager.router();

    let m = router
        .resolve(HttpVerb::Put, "/books/3/tags/9/foo_bar/1/bars/2")
        .unwrap();
    assert_eq!(m.params["book_id"], "3");
    assert_eq!(m.params["bar_id"], "2");

    assert!(router.resolve(HttpVerb::Get, "/books/3/tags/foo").is_some());
    assert!(router.resolve(HttpVerb::Get, "/books/3/tags/9/foo_bar").is_none());
}

#[test]
fn test_unknown_resource_fails() {
    let settings = Settings::new(CONTROLLERS).routes(RouteNode::list([RouteNode::from("shelves")]));
    let err = ResourceManager::new(settings, RouteTable::new(), demo_loader(CONTROLLERS))
        .unwrap_err();
    match err {
        ParsindError::ResolutionError { path, .. } => {
            assert_eq!(path, Path::new("app/controllers/shelvesController"));
        }
        other => panic!("expected a resolution error, got {other}"),
    }
}

#[test]
fn test_invalid_case_from_settings_file() {
    let err = settings_loader::from_json_str(
        r#"{"controllers_dir": "app/controllers", "controllers_case": "kebab"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ParsindError::ConfigurationError(_)));
}

#[test]
fn test_routes_from_yaml_settings() {
    let yaml = r"
controllers_dir: app/controllers
routes:
  GET /: indexController#welcome
  POST /bar: indexController#postBar
  books:
    - authors
";
    let settings = settings_loader::from_yaml_str(yaml).unwrap();
    let manager =
        ResourceManager::new(settings, RouteTable::new(), demo_loader(CONTROLLERS)).unwrap();
    assert_eq!(manager.bound_routes().len(), 14);
    assert_eq!(manager.bound_routes()[1].path, "/bar");
}

#[test]
fn test_empty_suffix_resolves_bare_controller_names() {
    let loader = ControllerRegistry::new(CONTROLLERS)
        .with("books", fake_controller())
        .with("books/authors", fake_controller());
    let routes = RouteNode::map([("books", RouteNode::list([RouteNode::from("authors")]))]);
    let settings = Settings::new(CONTROLLERS)
        .controllers_suffix("")
        .routes(routes.clone());
    let manager = ResourceManager::new(settings, RouteTable::new(), loader.clone()).unwrap();

    let mut expected = conventional("/books", "/books/:book_id");
    expected.extend(conventional(
        "/books/:book_id/authors",
        "/books/:book_id/authors/:author_id",
    ));
    assert_routes_match(manager.bound_routes(), &expected);
    assert_eq!(
        manager.bound_routes()[0].controller.identity(),
        Path::new("app/controllers/books")
    );
    assert_eq!(manager.pretty_bound_routes()[6].handler, "books/authors#index");

    let settings = Settings::new(CONTROLLERS).routes(routes);
    let err = ResourceManager::new(settings, RouteTable::new(), loader).unwrap_err();
    assert!(matches!(
        err,
        ParsindError::ResolutionError { ref path, .. }
            if path == Path::new("app/controllers/booksController")
    ));
}

#[test]
fn test_special_route_in_list_mapping_uses_resource_controller() {
    let loader = ControllerRegistry::new(CONTROLLERS).with(
        "booksController",
        fake_controller().with_method("foo", handler(|_req| async { HttpResponse::ok("foo") })),
    );
    let routes = RouteNode::map([(
        "books",
        RouteNode::list([RouteNode::map([("GET /x", RouteNode::from("foo"))])]),
    )]);
    let settings = Settings::new(CONTROLLERS).routes(routes);
    let manager = ResourceManager::new(settings, RouteTable::new(), loader).unwrap();

    let mut expected = conventional("/books", "/books/:book_id");
    expected.push((HttpVerb::Get, "/books/x", "foo"));
    assert_routes_match(manager.bound_routes(), &expected);
    assert!(manager.missing_handlers().is_empty());

    let special = manager.bound_routes().last().unwrap();
    assert_eq!(
        special.controller.identity(),
        Path::new("app/controllers/booksController")
    );
    assert_eq!(
        manager.pretty_bound_routes().last().unwrap().handler,
        "booksController#foo"
    );
}
