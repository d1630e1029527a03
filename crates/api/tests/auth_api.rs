//! HTTP-level integration tests for the auth endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, post_json, post_json_auth};

#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login_round_trip(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["role"], "student");
    assert!(
        body["data"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );

    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["data"]["access_token"].is_string());
    assert!(body["data"]["refresh_token"].is_string());
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "short"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_returns_409(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;

    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Other", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_returns_401(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;

    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ada@example.com", "password": "wrong-password-entirely"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_suspended_account_returns_403(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    let body = body_json(response).await;
    let id = body["data"]["id"].as_i64().unwrap();

    sqlx::query("UPDATE users SET status = 'suspended' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;

    let (app, _) = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    let body = body_json(response).await;
    let refresh_token = body["data"]["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a different token.
    let (app, _) = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let new_token = body["data"]["refresh_token"].as_str().unwrap();
    assert_ne!(new_token, refresh_token);

    // The presented token was revoked by the rotation.
    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_all_sessions(pool: PgPool) {
    let (app, _) = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;

    let (app, _) = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ada@example.com", "password": "long-enough-password"}),
    )
    .await;
    let body = body_json(response).await;
    let access_token = body["data"]["access_token"].as_str().unwrap().to_string();
    let refresh_token = body["data"]["refresh_token"].as_str().unwrap().to_string();

    let (app, _) = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/auth/logout", &access_token, json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (app, _) = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_without_token_returns_401(pool: PgPool) {
    let (app, _) = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/users/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
