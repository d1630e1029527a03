//! Tests for catalog management: categories and course CRUD.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use learnhub_core::roles::UserRole;

use common::{body_json, delete_auth, get, patch_json_auth, post_json_auth, token_for};

#[sqlx::test(migrations = "../db/migrations")]
async fn category_lifecycle(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@example.com", UserRole::Admin).await;
    let token = token_for(admin, UserRole::Admin);
    let (app, _) = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        &token,
        json!({"name": "Web Development"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["data"]["slug"]
        .as_str()
        .unwrap()
        .starts_with("web-development-"));
    let id = body["data"]["id"].as_i64().unwrap();

    // Duplicate name is a conflict.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        &token,
        json!({"name": "Web Development"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Rename regenerates the slug.
    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/categories/{id}"),
        &token,
        json!({"name": "Data Science"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["slug"]
        .as_str()
        .unwrap()
        .starts_with("data-science-"));

    let response = delete_auth(app.clone(), &format!("/api/v1/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn category_mutations_require_admin(pool: PgPool) {
    let instructor = common::create_user(&pool, "teach@example.com", UserRole::Instructor).await;
    let (app, _) = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/categories",
        &token_for(instructor, UserRole::Instructor),
        json!({"name": "Web Development"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn course_creation_slugifies_the_title(pool: PgPool) {
    let instructor = common::create_user(&pool, "teach@example.com", UserRole::Instructor).await;
    let token = token_for(instructor, UserRole::Instructor);
    let (app, _) = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/courses",
        &token,
        json!({
            "title": "Rust for Backend Engineers!",
            "price_cents": 4999,
            "status": "published"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["data"]["slug"]
        .as_str()
        .unwrap()
        .starts_with("rust-for-backend-engineers-"));
    assert_eq!(body["data"]["instructor_id"], instructor);
    assert_eq!(body["data"]["status"], "published");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn course_pricing_is_validated(pool: PgPool) {
    let instructor = common::create_user(&pool, "teach@example.com", UserRole::Instructor).await;
    let token = token_for(instructor, UserRole::Instructor);
    let (app, _) = common::build_test_app(pool.clone());

    // Free with a nonzero price.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/courses",
        &token,
        json!({"title": "Bad", "is_free": true, "price_cents": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Paid with no price.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/courses",
        &token,
        json!({"title": "Bad", "price_cents": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/courses",
        &token,
        json!({"title": "Good", "is_free": true, "price_cents": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn students_cannot_create_courses(pool: PgPool) {
    let student = common::create_user(&pool, "student@example.com", UserRole::Student).await;
    let (app, _) = common::build_test_app(pool.clone());

    let response = post_json_auth(
        app,
        "/api/v1/courses",
        &token_for(student, UserRole::Student),
        json!({"title": "Nope", "is_free": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn course_update_regenerates_slug_and_delete_cascades(pool: PgPool) {
    let instructor = common::create_user(&pool, "teach@example.com", UserRole::Instructor).await;
    let token = token_for(instructor, UserRole::Instructor);
    let course = common::create_course(
        &pool,
        instructor,
        1999,
        learnhub_core::roles::CourseStatus::Published,
    )
    .await;
    common::create_lesson(&pool, course, 1).await;

    let (app, _) = common::build_test_app(pool.clone());

    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/courses/{course}"),
        &token,
        json!({"title": "Renamed Course"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["slug"]
        .as_str()
        .unwrap()
        .starts_with("renamed-course-"));

    let response = delete_auth(app, &format!("/api/v1/courses/{course}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(common::count_rows(&pool, "lessons").await, 0);
}
