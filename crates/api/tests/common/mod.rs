//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use ludo_api::app::{build_cors_layer, build_router};
use ludo_api::auth::jwt::JwtConfig;
use ludo_api::auth::password::PasswordPolicy;
use ludo_api::config::{LogFormat, ServerConfig};
use ludo_api::state::AppState;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:5173";
pub const TEST_PASSWORD: &str = "correct-horse-42";

/// A `ServerConfig` with local defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            issuer: "ludo".to_string(),
            access_token_expiry_mins: 60,
        },
        password: PasswordPolicy { min_length: 8 },
    }
}

/// The production router and middleware stack over a seeded database.
pub async fn build_test_app(pool: PgPool) -> Router {
    ludo_db::seed::seed_all(&pool)
        .await
        .expect("seeding should succeed");

    let config = test_config();
    let cors = build_cors_layer(&config.cors_origins).expect("test origin is valid");
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_router(state, cors)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

/// POST a raw body that may not be valid JSON.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register through the API and return the new user id.
pub async fn register(app: Router, username: &str) -> i64 {
    let body = json!({ "username": username, "password": TEST_PASSWORD, "language": "en" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), 201, "registering {username}");
    body_json(response).await["data"]["id"]
        .as_i64()
        .expect("id should be numeric")
}

/// Log in through the API and return the bearer token.
pub async fn login(app: Router, username: &str) -> String {
    let body = json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), 200, "login of {username} should succeed");
    body_json(response).await["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}

/// Register and log in, returning `(user_id, token)`.
pub async fn signed_in(app: &Router, username: &str) -> (i64, String) {
    let id = register(app.clone(), username).await;
    let token = login(app.clone(), username).await;
    (id, token)
}
