//! Category entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use learnhub_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new category. The slug is derived from the name by
/// the handler.
#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
}
