//! Handlers for lesson progress tracking.
//!
//! Progress hangs off the enrollment, so every operation here first
//! resolves the caller's enrollment in the lesson's (or requested) course.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::Enrollment;
use learnhub_db::models::lesson_progress::LessonProgress;
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, LessonProgressRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `PATCH /lessons/{id}/progress`.
#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub is_completed: bool,
}

/// PATCH /api/v1/lessons/{id}/progress
///
/// Upserts the completion marker. Requires an enrollment in the lesson's
/// course.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(lesson_id): Path<DbId>,
    Json(input): Json<UpdateProgressRequest>,
) -> AppResult<Json<ApiResponse<LessonProgress>>> {
    let lesson = LessonRepo::find_by_id(&state.pool, lesson_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id: lesson_id,
        }))?;

    let enrollment = require_enrollment(&state, user, lesson.course_id).await?;

    let progress =
        LessonProgressRepo::upsert(&state.pool, enrollment.id, lesson_id, input.is_completed)
            .await?;

    Ok(Json(ApiResponse::new("Progress updated", progress)))
}

/// GET /api/v1/courses/{id}/progress
///
/// The caller's progress across the course, ordered by lesson position.
pub async fn for_course(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if CourseRepo::find_by_id(&state.pool, course_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }

    let enrollment = require_enrollment(&state, user, course_id).await?;
    let rows = LessonProgressRepo::list_for_enrollment(&state.pool, enrollment.id).await?;

    Ok(Json(ApiResponse::new(
        "Progress retrieved",
        json!({ "course_id": course_id, "lessons": rows }),
    )))
}

async fn require_enrollment(
    state: &AppState,
    user: AuthUser,
    course_id: DbId,
) -> AppResult<Enrollment> {
    EnrollmentRepo::find_by_student_course(&state.pool, user.user_id, course_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "You are not enrolled in this course".into(),
            ))
        })
}
