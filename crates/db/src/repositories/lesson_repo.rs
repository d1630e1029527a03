//! Repository for the `lessons` table.

use sqlx::PgPool;

use learnhub_core::types::DbId;

use crate::models::lesson::{CreateLesson, Lesson, UpdateLesson};

const COLUMNS: &str = "id, course_id, title, position, content, video_url, created_at, updated_at";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        input: &CreateLesson,
    ) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (course_id, title, position, content, video_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .bind(&input.title)
            .bind(input.position)
            .bind(&input.content)
            .bind(&input.video_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a course's lessons in display order.
    pub async fn list_by_course(pool: &PgPool, course_id: DbId) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons
             WHERE course_id = $1
             ORDER BY position ASC, id ASC"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Update a lesson. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "UPDATE lessons SET
                title = COALESCE($2, title),
                position = COALESCE($3, position),
                content = COALESCE($4, content),
                video_url = COALESCE($5, video_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.position)
            .bind(&input.content)
            .bind(&input.video_url)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a lesson. Progress rows cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
