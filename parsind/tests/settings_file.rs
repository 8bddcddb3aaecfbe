//! Settings files through to dispatched requests.

use std::io::Write;

use parsind::prelude::*;
use parsind_test::fixtures::demo_loader;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_toml_settings_drive_route_table() {
    let file = write_temp(
        ".toml",
        r#"
base_route = "/api"
controllers_dir = "controllers"

[routes]
"GET /" = "indexController#welcome"
books = ["authors"]
"#,
    );
    let settings = settings_loader::from_toml_file(file.path()).unwrap();
    let manager = parsind(settings, RouteTable::new(), demo_loader("controllers")).unwrap();
    assert_eq!(manager.bound_routes().len(), 13);

    let table = manager.router();
    let response = table
        .dispatch(HttpRequest::builder().path("/api").build())
        .await;
    assert_eq!(response.text(), "Welcome!");

    let request = HttpRequest::builder()
        .method(parsind::http::HttpVerb::Delete.method())
        .path("/api/books/6")
        .build();
    assert_eq!(table.dispatch(request).await.text(), "Book #6 has been removed!");
}

#[test]
fn test_json_settings_with_convention_overrides() {
    let file = write_temp(
        ".json",
        r#"{
            "controllers_dir": "controllers",
            "controller_methods": { "item": { "GET": "show" } },
            "routes": ["books"]
        }"#,
    );
    let settings = settings_loader::from_json_file(file.path()).unwrap();
    let manager = parsind(settings, RouteTable::new(), demo_loader("controllers")).unwrap();

    let pretty = manager.pretty_bound_routes();
    assert_eq!(pretty.len(), 3);
    assert_eq!(pretty[2].route, "GET /books/:book_id");
    assert_eq!(pretty[2].handler, "booksController#show");
    assert!(manager.missing_handlers().is_empty());
}

#[test]
fn test_yaml_settings_with_pascal_case() {
    let file = write_temp(
        ".yaml",
        "controllers_dir: controllers\ncontrollers_case: pascal\nroutes: [books]\n",
    );
    let settings = settings_loader::from_yaml_file(file.path()).unwrap();
    assert_eq!(settings.controllers_case, FileCase::Pascal);

    let err = parsind(settings, RouteTable::new(), demo_loader("controllers")).unwrap_err();
    assert!(err.to_string().contains("BooksController"));
}

#[test]
fn test_setup_logging_from_settings() {
    let settings = Settings::new("controllers");
    setup_logging(&settings);
    let manager = parsind(
        settings.routes(RouteNode::list([RouteNode::from("books")])),
        RouteTable::new(),
        demo_loader("controllers"),
    )
    .unwrap();
    assert_eq!(manager.bound_routes().len(), 6);
}
