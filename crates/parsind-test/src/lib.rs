//! # parsind-test
//!
//! Testing utilities for parsind: a test client that drives an axum app
//! through `tower::ServiceExt::oneshot`, a set of demo controllers with a
//! matching route tree, and order-insensitive route list assertions.

pub mod assertions;
pub mod client;
pub mod fixtures;

pub use assertions::{assert_routes_match, route_list_compare, RouteKey};
pub use client::{TestClient, TestResponse};
pub use fixtures::{demo_extra_routes, demo_loader, demo_routes, fake_controller};
