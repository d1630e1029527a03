//! Idempotent super-admin seeding, run once at startup.

use learnhub_core::roles::UserRole;
use learnhub_db::models::user::CreateUser;
use learnhub_db::repositories::UserRepo;
use learnhub_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Ensure a super-admin account exists.
///
/// Reads `SUPER_ADMIN_NAME`, `SUPER_ADMIN_EMAIL`, and `SUPER_ADMIN_PASSWORD`
/// from the environment. If any is unset the seed is skipped with a warning;
/// if an account with that email already exists this is a no-op, so restarts
/// are safe.
pub async fn ensure_super_admin(pool: &DbPool) -> AppResult<()> {
    let (name, email, password) = match (
        std::env::var("SUPER_ADMIN_NAME"),
        std::env::var("SUPER_ADMIN_EMAIL"),
        std::env::var("SUPER_ADMIN_PASSWORD"),
    ) {
        (Ok(name), Ok(email), Ok(password)) => (name, email, password),
        _ => {
            tracing::warn!("SUPER_ADMIN_* env vars not fully set, skipping super-admin seed");
            return Ok(());
        }
    };

    if UserRepo::find_by_email(pool, &email).await?.is_some() {
        tracing::debug!(%email, "Super-admin account already present");
        return Ok(());
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        email: email.clone(),
        name,
        password_hash,
        role: UserRole::SuperAdmin,
    };
    UserRepo::create(pool, &input).await?;
    tracing::info!(%email, "Super-admin account seeded");

    Ok(())
}
