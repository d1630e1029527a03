#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use learnhub_api::auth::jwt::{generate_access_token, JwtConfig};
use learnhub_api::auth::password::hash_password;
use learnhub_api::config::{ServerConfig, StripeConfig};
use learnhub_api::router::build_app_router;
use learnhub_api::state::AppState;
use learnhub_core::roles::{CourseStatus, UserRole};
use learnhub_core::types::DbId;
use learnhub_db::models::course::CreateCourse;
use learnhub_db::models::lesson::CreateLesson;
use learnhub_db::models::user::CreateUser;
use learnhub_db::repositories::{CourseRepo, LessonRepo, UserRepo};
use learnhub_payments::MockGateway;

const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        frontend_url: "http://localhost:5173".to_string(),
        jwt: test_jwt_config(),
        stripe: StripeConfig {
            secret_key: "sk_test_unused".to_string(),
        },
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Build the full application router with the production middleware stack
/// and a mock checkout gateway.
///
/// Returns the gateway handle too, so tests can settle or script sessions.
pub fn build_test_app(pool: PgPool) -> (Router, Arc<MockGateway>) {
    let config = test_config();
    let gateway = Arc::new(MockGateway::new());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        gateway: gateway.clone(),
    };

    (build_app_router(state, &config), gateway)
}

/// Sign an access token for an existing user id/role with the test secret.
pub fn token_for(user_id: DbId, role: UserRole) -> String {
    generate_access_token(user_id, role, &test_jwt_config())
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers (tower oneshot against the router, no TCP)
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, "GET", uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "POST", uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, "PATCH", uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, "DELETE", uri, Some(token), None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers (direct repository access)
// ---------------------------------------------------------------------------

/// Insert a user with the given role. The password is always
/// `"test-password-123"`.
pub async fn create_user(pool: &PgPool, email: &str, role: UserRole) -> DbId {
    let password_hash = hash_password("test-password-123").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: format!("Test {role}"),
            password_hash,
            role,
        },
    )
    .await
    .expect("user insert should succeed");
    user.id
}

/// Insert a course owned by `instructor_id`.
pub async fn create_course(
    pool: &PgPool,
    instructor_id: DbId,
    price_cents: i64,
    status: CourseStatus,
) -> DbId {
    let is_free = price_cents == 0;
    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            instructor_id,
            category_id: None,
            title: "Test Course".to_string(),
            slug: format!("test-course-{instructor_id}-{price_cents}"),
            description: Some("A course for testing".to_string()),
            thumbnail_url: None,
            price_cents,
            is_free,
            status,
        },
    )
    .await
    .expect("course insert should succeed");
    course.id
}

/// Insert a lesson at the given position.
pub async fn create_lesson(pool: &PgPool, course_id: DbId, position: i32) -> DbId {
    let lesson = LessonRepo::create(
        pool,
        course_id,
        &CreateLesson {
            title: format!("Lesson {position}"),
            position,
            content: Some("Lesson body".to_string()),
            video_url: None,
        },
    )
    .await
    .expect("lesson insert should succeed");
    lesson.id
}

/// The session id of a mock checkout URL (its last path segment).
pub fn session_id_from_url(url: &str) -> String {
    url.rsplit('/').next().unwrap_or_default().to_string()
}

/// Count rows in a table. Test-only convenience.
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table}");
    let (count,): (i64,) = sqlx::query_as(&query)
        .fetch_one(pool)
        .await
        .expect("count query should succeed");
    count
}
