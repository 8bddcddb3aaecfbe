//! HTTP test client for parsind.
//!
//! [`TestClient`] sends simulated requests through an axum application, such
//! as the one built by [`AxumRouter::into_axum_router`], and returns a
//! [`TestResponse`] for inspection.
//!
//! [`AxumRouter::into_axum_router`]: parsind_http::AxumRouter::into_axum_router
//!
//! ## Usage
//!
//! ```rust,no_run
//! use parsind_test::client::TestClient;
//! use axum::Router;
//! use axum::routing::get;
//!
//! async fn example() {
//!     let app = Router::new().route("/books", get(|| async { "Books!" }));
//!     let client = TestClient::new(app);
//!
//!     let response = client.get("/books").await;
//!     assert_eq!(response.status_code(), 200);
//!     assert_eq!(response.text(), "Books!");
//! }
//! ```

use axum::Router;
use bytes::Bytes;
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use parsind_core::ParsindError;

/// A test client for making simulated HTTP requests against an axum
/// application.
#[derive(Debug, Clone)]
pub struct TestClient {
    app: Router,
}

impl TestClient {
    /// Creates a new test client wrapping the given axum router.
    pub const fn new(app: Router) -> Self {
        Self { app }
    }

    /// Sends a GET request to the given path.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, Vec::new()).await
    }

    /// Sends a POST request with a text body.
    pub async fn post(&self, path: &str, body: &str) -> TestResponse {
        self.request(Method::POST, path, body.as_bytes().to_vec()).await
    }

    /// Sends a PUT request with a text body.
    pub async fn put(&self, path: &str, body: &str) -> TestResponse {
        self.request(Method::PUT, path, body.as_bytes().to_vec()).await
    }

    /// Sends a PATCH request with a text body.
    pub async fn patch(&self, path: &str, body: &str) -> TestResponse {
        self.request(Method::PATCH, path, body.as_bytes().to_vec()).await
    }

    /// Sends a DELETE request to the given path.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, Vec::new()).await
    }

    /// Sends a request with any method and body.
    pub async fn request(&self, method: Method, path: &str, body: Vec<u8>) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(axum::body::Body::from(body))
            .expect("request builder should not fail");
        self.send(req).await
    }

    /// Sends the request through the axum router and builds a `TestResponse`.
    async fn send(&self, req: Request<axum::body::Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("router should not error");

        let status = response.status();
        let headers = response.headers().clone();

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_or_else(|_| Bytes::new(), http_body_util::Collected::to_bytes);

        TestResponse {
            status,
            headers,
            body: body_bytes.to_vec(),
        }
    }
}

/// The response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body as raw bytes.
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Returns the response body as a UTF-8 string.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Deserializes the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParsindError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ParsindError::SerializationError(e.to_string()))
    }

    /// Returns the numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the value of a header by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
