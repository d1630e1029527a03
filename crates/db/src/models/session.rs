//! Refresh-token session model and DTO.

use sqlx::FromRow;

use learnhub_core::types::{DbId, Timestamp};

/// One refresh-token session per login. Rotated on refresh, revoked on
/// logout.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked: bool,
    pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
