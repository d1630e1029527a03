//! Handlers for the `/categories` resource. Reads are public; mutations
//! are admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use learnhub_core::error::CoreError;
use learnhub_core::slug::generate_slug;
use learnhub_core::types::DbId;
use learnhub_db::models::category::{Category, CreateCategory, UpdateCategory};
use learnhub_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(ApiResponse::new("Categories retrieved", categories)))
}

/// GET /api/v1/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(ApiResponse::new("Category retrieved", category)))
}

/// POST /api/v1/categories (admin)
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name must not be empty".into(),
        )));
    }

    if CategoryRepo::find_by_name(&state.pool, &name).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Category with this name already exists".into(),
        )));
    }

    let slug = generate_slug(&name);
    let category = CategoryRepo::create(&state.pool, &CreateCategory { name, slug }).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Category created", category)),
    ))
}

/// PATCH /api/v1/categories/{id} (admin)
///
/// A name change regenerates the slug.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let slug = input.name.as_deref().map(generate_slug);
    let update = UpdateCategory {
        name: input.name,
        slug,
    };

    let category = CategoryRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(ApiResponse::new("Category updated", category)))
}

/// DELETE /api/v1/categories/{id} (admin)
///
/// Courses in the category survive with `category_id` set NULL.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
