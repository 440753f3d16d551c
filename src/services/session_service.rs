//! Login sessions backed by the `sessions` table.
//!
//! A session token is 32 random bytes, hex encoded, handed to the client
//! once. Only its SHA-256 digest is stored.

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{db::DbPool, error::AppError, models::account::Account};

/// Hash a bearer token the way it is stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Open a session for `account` and return the raw token.
pub async fn create_session(pool: &DbPool, account: &Account) -> Result<String, AppError> {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    let token = hex::encode(bytes);

    sqlx::query(
        "INSERT INTO sessions (id, token_hash, account_id, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(Uuid::new_v4())
    .bind(hash_token(&token))
    .bind(account.id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    tracing::info!(account_id = account.id, "session opened");

    Ok(token)
}

/// Resolve a raw token to the account that owns it.
pub async fn find_account(pool: &DbPool, token: &str) -> Result<Option<Account>, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT a.id, a.email, a.password_hash, a.created_at
        FROM sessions s
        JOIN accounts a ON a.id = s.account_id
        WHERE s.token_hash = ?1
        "#,
    )
    .bind(hash_token(token))
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Delete the session for a raw token. Returns whether one existed.
pub async fn delete_session(pool: &DbPool, token: &str) -> Result<bool, AppError> {
    let deleted = sqlx::query("DELETE FROM sessions WHERE token_hash = ?1")
        .bind(hash_token(token))
        .execute(pool)
        .await?
        .rows_affected();

    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::test_pool, services::account_service, utils::password::PasswordHasher};

    #[test]
    fn token_hash_is_sha256_hex() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let pool = test_pool().await;
        let account = account_service::create(&pool, &PasswordHasher::new(1_000), "e1@example.com", "p1")
            .await
            .unwrap();

        let token = create_session(&pool, &account).await.unwrap();
        assert_eq!(token.len(), 64);

        let resolved = find_account(&pool, &token).await.unwrap().unwrap();
        assert_eq!(resolved.email, "e1@example.com");

        assert!(delete_session(&pool, &token).await.unwrap());
        assert!(find_account(&pool, &token).await.unwrap().is_none());
        assert!(!delete_session(&pool, &token).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_nobody() {
        let pool = test_pool().await;
        assert!(find_account(&pool, "deadbeef").await.unwrap().is_none());
    }
}
