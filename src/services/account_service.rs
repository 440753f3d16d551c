//! Account store - user identity and credentials.
//!
//! This service handles:
//! - Signup with a unique email
//! - Credential verification for login
//! - Password reset

use chrono::Utc;

use crate::{
    db::DbPool, error::AppError, models::account::Account, utils::password::PasswordHasher,
};

/// Look up an account by email.
pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Account>, AppError> {
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, email, password_hash, created_at FROM accounts WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Register a new account.
///
/// # Errors
///
/// - `DuplicateEmail`: an account with this email already exists
/// - `Storage`: database error occurred
pub async fn create(
    pool: &DbPool,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<Account, AppError> {
    if find_by_email(pool, email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(*hasher, password).await?;

    // The UNIQUE constraint still decides when two signups race past the check above
    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (email, password_hash, created_at)
        VALUES (?1, ?2, ?3)
        RETURNING id, email, password_hash, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => AppError::DuplicateEmail,
        other => AppError::Storage(other),
    })?;

    tracing::info!(account_id = account.id, "account created");

    Ok(account)
}

/// Check an email/password pair.
///
/// Unknown email and wrong password produce the same error.
pub async fn verify_credentials(
    pool: &DbPool,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<Account, AppError> {
    let account = find_by_email(pool, email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if verify_password(*hasher, password, &account.password_hash).await? {
        Ok(account)
    } else {
        Err(AppError::InvalidCredentials)
    }
}

/// Replace the password of an existing account.
///
/// # Errors
///
/// - `NotFound`: no account with this email
pub async fn update_password(
    pool: &DbPool,
    hasher: &PasswordHasher,
    email: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let password_hash = hash_password(*hasher, new_password).await?;

    let updated = sqlx::query("UPDATE accounts SET password_hash = ?1 WHERE email = ?2")
        .bind(password_hash)
        .bind(email)
        .execute(pool)
        .await?
        .rows_affected();

    if updated == 0 {
        return Err(AppError::NotFound("Account"));
    }

    tracing::info!("password reset");

    Ok(())
}

/// PBKDF2 is CPU-bound, so both directions run on the blocking pool.
async fn hash_password(hasher: PasswordHasher, password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {e}")))?
}

async fn verify_password(
    hasher: PasswordHasher,
    password: &str,
    stored_hash: &str,
) -> Result<bool, AppError> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();

    tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {e}")))?
}
