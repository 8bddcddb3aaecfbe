//! Assertions over route lists.

use std::collections::HashSet;

use parsind_http::HttpVerb;
use parsind_resources::RouteRecord;

/// A `(verb, path, method)` triple for comparing route lists.
pub type RouteKey<'a> = (HttpVerb, &'a str, &'a str);

fn key(record: &RouteRecord) -> RouteKey<'_> {
    (record.verb, record.path.as_str(), record.method.as_str())
}

/// Compares route records with expected `(verb, path, method)` triples,
/// ignoring order.
///
/// Both lists must be non-empty and every entry of one must appear in the
/// other.
///
/// # Examples
///
/// ```
/// use parsind_http::HttpVerb;
/// use parsind_test::assertions::route_list_compare;
///
/// assert!(!route_list_compare(&[], &[(HttpVerb::Get, "/books", "index")]));
/// ```
pub fn route_list_compare(actual: &[RouteRecord], expected: &[RouteKey<'_>]) -> bool {
    if actual.is_empty() || expected.is_empty() {
        return false;
    }
    let actual: HashSet<RouteKey<'_>> = actual.iter().map(key).collect();
    let expected: HashSet<RouteKey<'_>> = expected.iter().copied().collect();
    actual == expected
}

/// Panics with the differences if `actual` and `expected` do not match as
/// sets.
#[track_caller]
pub fn assert_routes_match(actual: &[RouteRecord], expected: &[RouteKey<'_>]) {
    let actual_set: HashSet<RouteKey<'_>> = actual.iter().map(key).collect();
    let expected_set: HashSet<RouteKey<'_>> = expected.iter().copied().collect();

    let mut unexpected: Vec<_> = actual_set.difference(&expected_set).collect();
    let mut absent: Vec<_> = expected_set.difference(&actual_set).collect();
    unexpected.sort();
    absent.sort();

    assert!(
        unexpected.is_empty() && absent.is_empty(),
        "route lists differ\n  unexpected: {unexpected:?}\n  absent: {absent:?}"
    );
}
