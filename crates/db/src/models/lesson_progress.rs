//! Lesson progress model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use learnhub_core::types::{DbId, Timestamp};

/// Full row from the `lesson_progress` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LessonProgress {
    pub id: DbId,
    pub enrollment_id: DbId,
    pub lesson_id: DbId,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Progress joined with lesson metadata, for the per-course progress view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProgressWithLesson {
    pub lesson_id: DbId,
    pub lesson_title: String,
    #[serde(rename = "order")]
    pub position: i32,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
}
