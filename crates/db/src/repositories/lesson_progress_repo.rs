//! Repository for the `lesson_progress` table.

use sqlx::PgPool;

use learnhub_core::types::DbId;

use crate::models::lesson_progress::{LessonProgress, ProgressWithLesson};

const COLUMNS: &str =
    "id, enrollment_id, lesson_id, is_completed, completed_at, created_at, updated_at";

pub struct LessonProgressRepo;

impl LessonProgressRepo {
    /// Upsert the completion marker for (enrollment, lesson).
    ///
    /// `completed_at` is set when marking complete and cleared when
    /// un-marking, matching the unique pair constraint.
    pub async fn upsert(
        pool: &PgPool,
        enrollment_id: DbId,
        lesson_id: DbId,
        is_completed: bool,
    ) -> Result<LessonProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO lesson_progress (enrollment_id, lesson_id, is_completed, completed_at)
             VALUES ($1, $2, $3, CASE WHEN $3 THEN NOW() END)
             ON CONFLICT ON CONSTRAINT uq_lesson_progress_enrollment_lesson
             DO UPDATE SET
                is_completed = EXCLUDED.is_completed,
                completed_at = CASE WHEN EXCLUDED.is_completed THEN NOW() END,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonProgress>(&query)
            .bind(enrollment_id)
            .bind(lesson_id)
            .bind(is_completed)
            .fetch_one(pool)
            .await
    }

    /// Progress rows for one enrollment, joined with lesson metadata and
    /// ordered by lesson position.
    pub async fn list_for_enrollment(
        pool: &PgPool,
        enrollment_id: DbId,
    ) -> Result<Vec<ProgressWithLesson>, sqlx::Error> {
        sqlx::query_as::<_, ProgressWithLesson>(
            "SELECT l.id AS lesson_id, l.title AS lesson_title, l.position,
                    p.is_completed, p.completed_at
             FROM lesson_progress p
             JOIN lessons l ON l.id = p.lesson_id
             WHERE p.enrollment_id = $1
             ORDER BY l.position ASC, l.id ASC",
        )
        .bind(enrollment_id)
        .fetch_all(pool)
        .await
    }
}
