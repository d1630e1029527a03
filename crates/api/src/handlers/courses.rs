//! Handlers for the `/courses` resource.
//!
//! Listings and metadata are public but role-aware: drafts are visible to
//! admins everywhere and to instructors for their own courses. The
//! `/student` and `/instructor` detail views are the gated surfaces that
//! expose lesson content.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use learnhub_core::entitlement;
use learnhub_core::error::CoreError;
use learnhub_core::roles::{CourseStatus, UserRole};
use learnhub_core::slug::generate_slug;
use learnhub_core::types::DbId;
use learnhub_db::models::course::{Course, CourseListFilter, CreateCourse, UpdateCourse};
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::middleware::rbac::RequireCourseManager;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub category_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub is_free: bool,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category_id: Option<DbId>,
    pub price_cents: Option<i64>,
    pub is_free: Option<bool>,
    pub status: Option<CourseStatus>,
}

/// GET /api/v1/courses
///
/// Public. The visibility filter is decided here and applied at query
/// construction, not by post-filtering rows.
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Query(query): Query<ListCoursesQuery>,
) -> AppResult<Json<ApiResponse<Vec<Course>>>> {
    let role = viewer.map(|v| v.role);
    let filter = CourseListFilter {
        published_only: !entitlement::can_list_unpublished(role),
        include_drafts_of: viewer
            .filter(|v| v.role == UserRole::Instructor)
            .map(|v| v.user_id),
        category_id: query.category_id,
        limit: query.limit,
        offset: query.offset,
    };

    let courses = CourseRepo::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::new("Courses retrieved", courses)))
}

/// GET /api/v1/courses/{id}
///
/// Public course metadata. A draft reads as absent for callers who may not
/// see it.
pub async fn get(
    State(state): State<AppState>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Course>>> {
    let course = find_course(&state, id).await?;

    let viewer = viewer.map(|v| (v.user_id, v.role));
    if !entitlement::course_visible(viewer, course.instructor_id, course.parsed_status()) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }

    Ok(Json(ApiResponse::new("Course retrieved", course)))
}

/// POST /api/v1/courses (instructor+)
pub async fn create(
    State(state): State<AppState>,
    RequireCourseManager(user): RequireCourseManager,
    Json(input): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Course>>)> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Course title must not be empty".into(),
        )));
    }
    validate_pricing(input.is_free, input.price_cents)?;

    let create = CreateCourse {
        instructor_id: user.user_id,
        category_id: input.category_id,
        slug: generate_slug(&title),
        title,
        description: input.description,
        thumbnail_url: input.thumbnail_url,
        price_cents: input.price_cents,
        is_free: input.is_free,
        status: input.status.unwrap_or(CourseStatus::Draft),
    };

    let course = CourseRepo::create(&state.pool, &create).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Course created", course)),
    ))
}

/// PATCH /api/v1/courses/{id} (instructor+)
///
/// A title change regenerates the slug.
pub async fn update(
    State(state): State<AppState>,
    RequireCourseManager(_user): RequireCourseManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourseRequest>,
) -> AppResult<Json<ApiResponse<Course>>> {
    if let Some(price_cents) = input.price_cents {
        if price_cents < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Price must not be negative".into(),
            )));
        }
    }

    let slug = input.title.as_deref().map(generate_slug);
    let update = UpdateCourse {
        category_id: input.category_id,
        title: input.title,
        slug,
        description: input.description,
        thumbnail_url: input.thumbnail_url,
        price_cents: input.price_cents,
        is_free: input.is_free,
        status: input.status,
    };

    let course = CourseRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    Ok(Json(ApiResponse::new("Course updated", course)))
}

/// DELETE /api/v1/courses/{id} (instructor+)
///
/// Lessons, enrollments, and progress cascade.
pub async fn delete(
    State(state): State<AppState>,
    RequireCourseManager(_user): RequireCourseManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/courses/{id}/student
///
/// The enrolled-student view: course plus full lesson content. 403 without
/// an enrollment, 404 when the course is not published.
pub async fn student_view(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let course = find_course(&state, id).await?;

    let enrolled = EnrollmentRepo::exists(&state.pool, user.user_id, id).await?;
    entitlement::can_view_course_content(
        user.role,
        user.user_id,
        id,
        course.instructor_id,
        course.parsed_status(),
        enrolled,
    )?;

    let lessons = LessonRepo::list_by_course(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(
        "Course content retrieved",
        json!({ "course": course, "lessons": lessons }),
    )))
}

/// GET /api/v1/courses/{id}/instructor
///
/// The management view: owner or admin only, drafts included.
pub async fn instructor_view(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let course = find_course(&state, id).await?;

    let is_owner = user.role == UserRole::Instructor && course.instructor_id == user.user_id;
    if !user.role.is_admin() && !is_owner {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this course".into(),
        )));
    }

    let lessons = LessonRepo::list_by_course(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(
        "Course retrieved",
        json!({ "course": course, "lessons": lessons }),
    )))
}

fn validate_pricing(is_free: bool, price_cents: i64) -> AppResult<()> {
    if is_free && price_cents != 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Free courses must have a price of zero".into(),
        )));
    }
    if !is_free && price_cents <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Paid courses must have a positive price".into(),
        )));
    }
    Ok(())
}

async fn find_course(state: &AppState, id: DbId) -> AppResult<Course> {
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
}
