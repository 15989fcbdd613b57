//! Integration tests for token issuance and bearer authentication.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, seed_user, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_token_pair(pool: PgPool) {
    seed_user(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/token",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["expires_in"], 15 * 60);
    assert_eq!(body["user"]["username"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_unauthorized(pool: PgPool) {
    seed_user(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/token",
        json!({ "username": "alice", "password": "not-the-password" }),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_unknown_user_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/token",
        json!({ "username": "nobody", "password": TEST_PASSWORD }),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Refresh rotation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_the_refresh_token(pool: PgPool) {
    seed_user(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/token",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
        None,
    )
    .await;
    let body = body_json(response).await;
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a new pair.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/token/refresh",
        json!({ "refresh_token": refresh_token }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"], refresh_token.as_str());

    // The consumed token was revoked by the rotation.
    let response = post_json(
        app,
        "/api/v1/auth/token/refresh",
        json!({ "refresh_token": refresh_token }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_with_garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/token/refresh",
        json!({ "refresh_token": "never-issued" }),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Bearer enforcement on protected routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_without_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/employees").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Error body uses the standard shape.
    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_with_garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/employees", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_with_valid_token_succeeds(pool: PgPool) {
    let token = common::seed_auth(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/employees", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
