//! Shared harness for the HTTP integration tests.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`,
//! without a TCP listener.

#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use repositori_api::auth::credentials::CredentialConfig;
use repositori_api::auth::jwt::JwtConfig;
use repositori_api::config::ServerConfig;
use repositori_api::router::build_app_router;
use repositori_api::state::AppState;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "123";
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults and the `admin` / `123`
/// credential pair.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 30,
        },
        credentials: CredentialConfig::from_plaintext(TEST_USERNAME, TEST_PASSWORD)
            .expect("hashing should succeed"),
    }
}

/// Build the full application router, using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// Build the router over a pool that never connects, for tests that must
/// not reach the database (login, auth rejections, books).
///
/// The returned router owns its own book shelf; clone it to share the
/// shelf across several requests.
pub fn build_app_without_db() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://unused@127.0.0.1:1/unused")
        .expect("lazy pool URL should parse");
    build_test_app(pool)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(
    method: Method,
    uri: &str,
    authorization: Option<String>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, authorization: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

fn bearer(token: &str) -> Option<String> {
    Some(format!("Bearer {token}"))
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, bearer(token), body)).await
}

/// POST with a raw `Authorization` header value.
pub async fn post_json_with_header(
    app: Router,
    uri: &str,
    authorization: &str,
    body: serde_json::Value,
) -> Response {
    let request = json_request(Method::POST, uri, Some(authorization.to_string()), body);
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, bearer(token), body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, bearer(token))).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Log in with the test credentials and return the access token.
pub async fn login_token(app: Router) -> String {
    let body = serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .expect("access_token must be a string")
        .to_string()
}
