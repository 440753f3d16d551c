//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a registered user
//! - Request bodies for signup, login and password reset
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. The email column carries a UNIQUE
/// constraint, so at most one account exists per address.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique identifier for this account
    pub id: i64,

    /// Login identifier, also the owner key of bookings
    pub email: String,

    /// Werkzeug-format PBKDF2 hash (`pbkdf2:sha256:<rounds>$<salt>$<hex>`)
    pub password_hash: String,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,
}

/// Email and password pair submitted by the signup and login forms.
///
/// Fields are optional so that a missing field surfaces as a validation
/// error instead of a deserialization rejection.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "traveller@example.com",
///   "password": "password123"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Returns `(email, password)` when both are present and non-empty.
    pub fn into_parts(self) -> Result<(String, String), AppError> {
        let email = non_empty(self.email);
        let password = non_empty(self.password);

        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AppError::Validation(
                "Please provide both email and password".to_string(),
            )),
        }
    }
}

/// Request body for the forgot-password step.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for setting a new password.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

/// Response body for account endpoints. Never exposes the password hash.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            created_at: account.created_at,
        }
    }
}

/// Trim a form value and treat blank as missing.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
