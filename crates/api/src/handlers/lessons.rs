//! Handlers for lessons, nested under courses for listing/creation and
//! flat for single-lesson operations.
//!
//! Reading lesson content goes through the same gate as the course student
//! view; mutations require a course-manager role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use learnhub_core::entitlement;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::lesson::{CreateLesson, Lesson, UpdateLesson};
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireCourseManager;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/lessons
///
/// Ordered by the lesson `order` field. Gated like the student view.
pub async fn list_for_course(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Lesson>>>> {
    check_content_access(&state, user, course_id).await?;

    let lessons = LessonRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(ApiResponse::new("Lessons retrieved", lessons)))
}

/// POST /api/v1/courses/{course_id}/lessons (instructor+)
pub async fn create(
    State(state): State<AppState>,
    RequireCourseManager(_user): RequireCourseManager,
    Path(course_id): Path<DbId>,
    Json(input): Json<CreateLesson>,
) -> AppResult<(StatusCode, Json<ApiResponse<Lesson>>)> {
    if CourseRepo::find_by_id(&state.pool, course_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }));
    }

    let lesson = LessonRepo::create(&state.pool, course_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Lesson created", lesson)),
    ))
}

/// GET /api/v1/lessons/{id}
pub async fn get(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Lesson>>> {
    let lesson = find_lesson(&state, id).await?;
    check_content_access(&state, user, lesson.course_id).await?;
    Ok(Json(ApiResponse::new("Lesson retrieved", lesson)))
}

/// PATCH /api/v1/lessons/{id} (instructor+)
pub async fn update(
    State(state): State<AppState>,
    RequireCourseManager(_user): RequireCourseManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLesson>,
) -> AppResult<Json<ApiResponse<Lesson>>> {
    let lesson = LessonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))?;
    Ok(Json(ApiResponse::new("Lesson updated", lesson)))
}

/// DELETE /api/v1/lessons/{id} (instructor+)
pub async fn delete(
    State(state): State<AppState>,
    RequireCourseManager(_user): RequireCourseManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LessonRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn find_lesson(state: &AppState, id: DbId) -> AppResult<Lesson> {
    LessonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lesson",
            id,
        }))
}

/// Run the content gate for `user` against `course_id`.
async fn check_content_access(state: &AppState, user: AuthUser, course_id: DbId) -> AppResult<()> {
    let course = CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    let enrolled = EnrollmentRepo::exists(&state.pool, user.user_id, course_id).await?;
    entitlement::can_view_course_content(
        user.role,
        user.user_id,
        course_id,
        course.instructor_id,
        course.parsed_status(),
        enrolled,
    )?;
    Ok(())
}
