//! Integration tests for the MMBM Clothing storefront.
//!
//! Tests drive the assembled router in-process with `tower::ServiceExt`,
//! threading the session cookie between requests the way a browser would.
//! No network, no external services: the hand-off link is only ever
//! rendered, never followed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mmbm-integration-tests
//! ```

#![allow(clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use tower::ServiceExt;

use mmbm_storefront::catalog;
use mmbm_storefront::config::{ShopInfo, StorefrontConfig};
use mmbm_storefront::state::AppState;

/// A storefront configuration for tests: no external services configured.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        base_url: "http://localhost:3000".to_owned(),
        whatsapp_number: "233503561270".to_owned(),
        shop: ShopInfo::default(),
        background_removal_url: None,
    }
}

/// Build the full application router over the seeded catalog.
#[must_use]
pub fn test_app() -> Router {
    let state = AppState::new(test_config(), catalog::seed()).expect("app state");
    mmbm_storefront::app(state)
}

/// A minimal browser stand-in: one router, one session cookie.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// Create a client over a fresh app (fresh session store).
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: test_app(),
            cookie: None,
        }
    }

    /// A second client over the same app: same session store, no cookie.
    /// Behaves like another browser visiting the same storefront.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Issue a GET request.
    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        self.request(Method::GET, uri, None).await
    }

    /// Issue a POST request with a urlencoded form body.
    pub async fn post_form(&mut self, uri: &str, body: &str) -> Response<Body> {
        self.request(Method::POST, uri, Some(body.to_owned())).await
    }

    async fn request(&mut self, method: Method, uri: &str, form: Option<String>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response");

        // Carry the session cookie forward, like a browser would
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let raw = set_cookie.to_str().expect("cookie header");
            let pair = raw.split(';').next().unwrap_or(raw).to_owned();
            self.cookie = Some(pair);
        }

        response
    }
}

/// Read a response body to a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
