//! Repository for the `courses` table.

use sqlx::PgPool;

use learnhub_core::roles::CourseStatus;
use learnhub_core::types::DbId;

use crate::models::course::{Course, CourseListFilter, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, instructor_id, category_id, title, slug, description, \
    thumbnail_url, price_cents, is_free, status, created_at, updated_at";

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and listing operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (instructor_id, category_id, title, slug, description, thumbnail_url,
                 price_cents, is_free, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.instructor_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.thumbnail_url)
            .bind(input.price_cents)
            .bind(input.is_free)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List courses under the caller's visibility filter, newest first.
    ///
    /// The status restriction is applied here, at query construction: when
    /// `published_only` is set, drafts are excluded unless owned by
    /// `include_drafts_of`.
    pub async fn list(
        pool: &PgPool,
        filter: &CourseListFilter,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = filter.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE ($1::bigint IS NULL OR category_id = $1)
               AND (NOT $2
                    OR status = 'published'
                    OR ($3::bigint IS NOT NULL AND instructor_id = $3))
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(filter.category_id)
            .bind(filter.published_only)
            .bind(filter.include_drafts_of)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a course. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                category_id = COALESCE($2, category_id),
                title = COALESCE($3, title),
                slug = COALESCE($4, slug),
                description = COALESCE($5, description),
                thumbnail_url = COALESCE($6, thumbnail_url),
                price_cents = COALESCE($7, price_cents),
                is_free = COALESCE($8, is_free),
                status = COALESCE($9, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.thumbnail_url)
            .bind(input.price_cents)
            .bind(input.is_free)
            .bind(input.status.map(CourseStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a course. Lessons and enrollments cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
