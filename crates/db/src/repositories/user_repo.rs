//! Repository for the `users` table.

use sqlx::PgPool;

use learnhub_core::roles::{UserRole, UserStatus};
use learnhub_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User, UserListFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, password_hash, role, status, created_at, updated_at";

/// Default and maximum page sizes for the admin listing.
const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.password_hash)
            .bind(input.role.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List users with optional role/status/search filters, newest first.
    pub async fn list(pool: &PgPool, filter: &UserListFilter) -> Result<Vec<User>, sqlx::Error> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = filter.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE ($1::text IS NULL OR role = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::text IS NULL OR name ILIKE '%' || $3 || '%' OR email ILIKE '%' || $3 || '%')
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(filter.role.map(UserRole::as_str))
            .bind(filter.status.map(UserStatus::as_str))
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total row count under the same filters as [`Self::list`].
    pub async fn count(pool: &PgPool, filter: &UserListFilter) -> Result<i64, sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM users
             WHERE ($1::text IS NULL OR role = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::text IS NULL OR name ILIKE '%' || $3 || '%' OR email ILIKE '%' || $3 || '%')",
        )
        .bind(filter.role.map(UserRole::as_str))
        .bind(filter.status.map(UserStatus::as_str))
        .bind(&filter.search)
        .fetch_one(pool)
        .await?;
        Ok(total)
    }

    /// Self-profile update. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Set a user's account status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: UserStatus,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Set a user's role.
    pub async fn update_role(
        pool: &PgPool,
        id: DbId,
        role: UserRole,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET role = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a user. Returns `true` if a row was removed.
    ///
    /// Enrollments, payments, and sessions cascade via foreign keys.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
