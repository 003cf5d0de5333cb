//! HTTP-level integration tests for registration, login, and token checks.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, register, test_config, TEST_PASSWORD};
use ludo_api::auth::jwt::{generate_access_token, JwtConfig};
use ludo_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_created_with_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let body = json!({ "username": "duo", "password": TEST_PASSWORD, "language": "en" });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let user = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(user.username, "duo");
    assert_ne!(user.password_hash, TEST_PASSWORD, "stored unhashed");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_without_language_is_allowed(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = json!({ "username": "nolang", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let first = register(app.clone(), "duo").await;

    let body = json!({ "username": "duo", "password": "another-password" });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    // The original account still logs in with its own password.
    let token = common::login(app, "duo").await;
    assert!(!token.is_empty());
    let stored = UserRepo::find_by_username(&pool, "duo")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, first);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = json!({ "username": "duo", "password": "short" });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_register_body_returns_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = json!({ "username": "duo" });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("password"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsupported_language_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = json!({ "username": "duo", "password": TEST_PASSWORD, "language": "tlh" });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_expiry(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    register(app.clone(), "duo").await;

    let body = json!({ "username": "duo", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["expires_in"], 3600);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_user_look_the_same(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    register(app.clone(), "duo").await;

    let wrong = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "duo", "password": "not-the-password" }),
    )
    .await;
    let ghost = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "ghost", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ghost.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await, body_json(ghost).await);
}

// ---------------------------------------------------------------------------
// Token checks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_route_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/users/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get_auth(app, "/api/v1/courses", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_signed_with_other_secret_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let forged = JwtConfig {
        secret: "attacker-secret".to_string(),
        ..test_config().jwt
    };
    let token = generate_access_token(1, "duo", "ADMIN", &forged).unwrap();

    let response = get_auth(app, "/api/v1/users/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_with_unknown_role_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = generate_access_token(1, "duo", "ROOT", &test_config().jwt).unwrap();

    let response = get_auth(app, "/api/v1/courses", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
