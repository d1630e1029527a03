//! Enrollment entity model.
//!
//! Enrollments are created once per (student, course) pair and never
//! updated; there is no update DTO.

use serde::Serialize;
use sqlx::FromRow;

use learnhub_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub created_at: Timestamp,
}
