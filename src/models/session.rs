//! Login session types.
//!
//! Sessions authenticate requests after login. The `sessions` table stores
//! only the SHA-256 hash of each bearer token, next to the account it
//! belongs to; see [`crate::services::session_service`].

use serde::Serialize;

/// Returned by a successful login. The token is shown only once.
///
/// # JSON Example
///
/// ```json
/// {
///   "token": "9f86d081884c7d65...",
///   "email": "traveller@example.com"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
}
