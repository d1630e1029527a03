//! Handlers for the `/users` resource: self-profile and admin management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use learnhub_core::entitlement;
use learnhub_core::error::CoreError;
use learnhub_core::roles::{UserRole, UserStatus};
use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::Enrollment;
use learnhub_db::models::user::{UpdateUser, User, UserListFilter, UserResponse};
use learnhub_db::repositories::{EnrollmentRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `PATCH /users/me`.
#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `PATCH /users/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: UserStatus,
}

/// Request body for `PATCH /users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let row = find_user(&state, user.user_id).await?;
    Ok(Json(ApiResponse::new("Profile retrieved", row.into())))
}

/// GET /api/v1/users/me/enrollments
///
/// The caller's enrollments, newest first.
pub async fn my_enrollments(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Enrollment>>>> {
    let enrollments = EnrollmentRepo::list_by_student(&state.pool, user.user_id).await?;
    Ok(Json(ApiResponse::new("Enrollments retrieved", enrollments)))
}

/// PATCH /api/v1/users/me
///
/// Self-profile update. A duplicate email fails `uq_users_email` and
/// surfaces as 409.
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateMeRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let password_hash = match &input.password {
        Some(password) => {
            validate_password_strength(password)
                .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
            Some(
                hash_password(password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
            )
        }
        None => None,
    };

    let update = UpdateUser {
        name: input.name,
        email: input.email,
        password_hash,
    };

    let updated = UserRepo::update(&state.pool, user.user_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    Ok(Json(ApiResponse::new("Profile updated", updated.into())))
}

/// GET /api/v1/users (admin)
///
/// Filterable by role, status, and a name/email substring search.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(filter): Query<UserListFilter>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let users = UserRepo::list(&state.pool, &filter).await?;
    let total = UserRepo::count(&state.pool, &filter).await?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::new(
        "Users retrieved",
        json!({ "users": users, "total": total }),
    )))
}

/// PATCH /api/v1/users/{id}/status (admin)
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let target = find_user(&state, id).await?;
    let target_role: UserRole = target.role.parse()?;

    entitlement::can_modify_user_status(admin.user_id, admin.role, target.id, target_role)?;

    let updated = UserRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    Ok(Json(ApiResponse::new("User status updated", updated.into())))
}

/// PATCH /api/v1/users/{id}/role (admin)
///
/// Only a super-admin may grant the super-admin role.
pub async fn update_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let target = find_user(&state, id).await?;
    let target_role: UserRole = target.role.parse()?;

    entitlement::can_modify_user_role(admin.user_id, admin.role, target.id, target_role, input.role)?;

    let updated = UserRepo::update_role(&state.pool, id, input.role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    Ok(Json(ApiResponse::new("User role updated", updated.into())))
}

/// DELETE /api/v1/users/{id} (admin)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let target = find_user(&state, id).await?;
    let target_role: UserRole = target.role.parse()?;

    entitlement::can_delete_user(admin.user_id, admin.role, target.id, target_role)?;

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn find_user(state: &AppState, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))
}
