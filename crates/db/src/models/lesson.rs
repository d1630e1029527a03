//! Lesson entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use learnhub_core::types::{DbId, Timestamp};

/// Full lesson row from the `lessons` table.
///
/// The ordering column is `position` in SQL (avoids quoting the `ORDER`
/// keyword) but serializes as `order` in API payloads.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lesson {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    #[serde(rename = "order")]
    pub position: i32,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateLesson {
    pub title: String,
    #[serde(rename = "order")]
    pub position: i32,
    pub content: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLesson {
    pub title: Option<String>,
    #[serde(rename = "order")]
    pub position: Option<i32>,
    pub content: Option<String>,
    pub video_url: Option<String>,
}
