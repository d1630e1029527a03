//! Course entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use learnhub_core::roles::CourseStatus;
use learnhub_core::types::{DbId, Timestamp};

/// Full course row from the `courses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: DbId,
    pub instructor_id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Price in the currency's minor unit (cents).
    pub price_cents: i64,
    pub is_free: bool,
    /// Stored as TEXT; parse with `str::parse::<CourseStatus>()`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Course {
    /// Parsed course status. Falls back to `Draft` if the row somehow holds
    /// an unknown value (the CHECK constraint prevents this).
    pub fn parsed_status(&self) -> CourseStatus {
        self.status.parse().unwrap_or(CourseStatus::Draft)
    }
}

/// DTO for inserting a new course. Slug and instructor are resolved by
/// the handler.
#[derive(Debug)]
pub struct CreateCourse {
    pub instructor_id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub price_cents: i64,
    pub is_free: bool,
    pub status: CourseStatus,
}

/// DTO for a course patch. Only non-`None` fields are applied; a `Some`
/// slug accompanies a title change.
#[derive(Debug, Default)]
pub struct UpdateCourse {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub price_cents: Option<i64>,
    pub is_free: Option<bool>,
    pub status: Option<CourseStatus>,
}

/// Visibility filter for course listings, decided at the handler from the
/// caller's role (the access-control gate).
#[derive(Debug, Default)]
pub struct CourseListFilter {
    /// When true, only published courses are returned -- except those owned
    /// by `include_drafts_of`, if set.
    pub published_only: bool,
    /// Instructor whose drafts remain visible despite `published_only`.
    pub include_drafts_of: Option<DbId>,
    pub category_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
