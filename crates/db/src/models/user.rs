//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use learnhub_core::roles::{UserRole, UserStatus};
use learnhub_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    /// Stored as TEXT; parse with `str::parse::<UserRole>()`.
    pub role: String,
    /// Stored as TEXT; parse with `str::parse::<UserStatus>()`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            email: u.email,
            name: u.name,
            role: u.role,
            status: u.status,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// DTO for inserting a new user. The password is already hashed by the
/// caller.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// DTO for a user's self-profile update. All fields optional; a `Some`
/// password hash replaces the stored one.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Filters for the admin user listing.
#[derive(Debug, Default, Deserialize)]
pub struct UserListFilter {
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    /// Case-insensitive substring match against name or email.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
