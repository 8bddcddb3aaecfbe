//! URL path helpers.
//!
//! Route patterns use `:name` segments for captured identifiers
//! (`/books/:book_id`).

use std::collections::HashMap;

/// Joins a URL segment onto a base route and normalizes the result.
///
/// Duplicate slashes collapse, `.` segments are dropped, `..` removes the
/// previous segment, and a trailing slash is dropped except for the root.
/// The result is absolute when the base is.
///
/// # Examples
///
/// ```
/// use parsind_http::join_url;
///
/// assert_eq!(join_url("/", "books"), "/books");
/// assert_eq!(join_url("/books/:book_id", "/tags/"), "/books/:book_id/tags");
/// assert_eq!(join_url("/", "/"), "/");
/// assert_eq!(join_url("/api//v1", "../v2"), "/api/v2");
/// ```
pub fn join_url(base: &str, segment: &str) -> String {
    let absolute = base.starts_with('/') || (base.is_empty() && segment.starts_with('/'));

    let mut parts: Vec<&str> = Vec::new();
    for part in base.split('/').chain(segment.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Matches a concrete request path against a route pattern.
///
/// Returns the captured `:name` segments on success. Captured values are
/// percent-decoded; static segments are compared as written.
///
/// # Examples
///
/// ```
/// use parsind_http::match_route;
///
/// let params = match_route("/books/:book_id", "/books/10").unwrap();
/// assert_eq!(params["book_id"], "10");
/// assert!(match_route("/books/:book_id", "/books").is_none());
///
/// let params = match_route("/books/:book_id", "/books/caf%C3%A9%20noir").unwrap();
/// assert_eq!(params["book_id"], "café noir");
/// ```
pub fn match_route(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let mut pattern_parts = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_parts = path.split('/').filter(|s| !s.is_empty());
    let mut params = HashMap::new();

    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.insert(name.to_string(), decode_segment(actual));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

fn decode_segment(segment: &str) -> String {
    percent_encoding::percent_decode_str(segment)
        .decode_utf8_lossy()
        .into_owned()
}

/// Returns `pattern` with every capture name erased, so patterns that differ
/// only in how they name their captures compare equal.
///
/// # Examples
///
/// ```
/// use parsind_http::path::route_shape;
///
/// assert_eq!(route_shape("/books/:book_id"), route_shape("/books/:slug"));
/// assert_ne!(route_shape("/books/:book_id"), route_shape("/books/sort"));
/// ```
pub fn route_shape(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| if segment.starts_with(':') { ":" } else { segment })
        .collect::<Vec<_>>()
        .join("/")
}

/// Rewrites `:name` segments into axum's `{name}` capture syntax.
///
/// # Examples
///
/// ```
/// use parsind_http::path::to_axum_path;
///
/// assert_eq!(to_axum_path("/books/:book_id/tags"), "/books/{book_id}/tags");
/// assert_eq!(to_axum_path("/"), "/");
/// ```
pub fn to_axum_path(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| {
            segment
                .strip_prefix(':')
                .map_or_else(|| segment.to_string(), |name| format!("{{{name}}}"))
        })
        .collect::<Vec<_>>()
        .join("/")
}
