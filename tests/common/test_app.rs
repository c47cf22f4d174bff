//! In-process app harness
//!
//! Builds the real router over an in-memory database and sends requests
//! through it with `tower::ServiceExt::oneshot`, without binding a socket.

use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use inkpost::backend::routes::create_router;
use inkpost::backend::server::{config::ServerConfig, state::AppState};

use super::database::create_test_pool;

/// Secret used to sign tokens in tests
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Lowest bcrypt cost, to keep hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Configuration shared by all test apps
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url(super::database::TEST_DATABASE_URL)
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(TEST_BCRYPT_COST)
        .token_ttl(Duration::from_secs(3600))
        .build()
        .expect("Test configuration is valid")
}

/// A response with its body fully read
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Body is not JSON ({}): {}", e, self.text()))
    }

    /// Body as text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The application under test
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Build a fresh app over its own empty database
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let state = AppState::new(pool, &test_config());
        let router = create_router(state.clone());
        Self { router, state }
    }

    /// Send a request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    /// Send a request with an optional JSON body and bearer token
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("Valid request")).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    /// Sign up through the API and return the issued token
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/user/signup",
                None,
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "signup failed: {}", response.text());
        response.json()["jwt"]
            .as_str()
            .expect("jwt is a string")
            .to_string()
    }

    /// Create a post through the API and return its ID
    pub async fn create_post(&self, token: &str, title: &str, content: &str) -> String {
        let response = self
            .post_json(
                "/blog/",
                Some(token),
                serde_json::json!({ "title": title, "content": content }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "create failed: {}", response.text());
        response.json()["id"]
            .as_str()
            .expect("id is a string")
            .to_string()
    }

    /// Count rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.state.db_pool)
            .await
            .expect("Failed to count rows");
        count
    }
}
