//! Health endpoint smoke test.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, get};

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_with_database(pool: PgPool) {
    let (app, _gateway) = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
}
