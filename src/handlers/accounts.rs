//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Sign up
//! - POST /api/v1/accounts/forgot_password - Check an email before reset
//! - POST /api/v1/accounts/reset_password - Set a new password

use crate::{
    error::AppError,
    models::account::{
        AccountResponse, CredentialsRequest, ForgotPasswordRequest, ResetPasswordRequest,
        non_empty,
    },
    services::account_service,
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "email": "traveller@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: Email or password missing
/// - **Error (409)**: Email already exists
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let (email, password) = request.into_parts()?;

    let account = account_service::create(&state.pool, &state.hasher, &email, &password).await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// First step of a password reset: confirm the email is registered.
///
/// # Response
///
/// - **Success (200 OK)**: `{"email": "...", "message": "..."}`
/// - **Error (404)**: Email not found
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    let email = non_empty(request.email)
        .ok_or_else(|| AppError::Validation("Please provide an email".to_string()))?;

    account_service::find_by_email(&state.pool, &email)
        .await?
        .ok_or(AppError::NotFound("Email"))?;

    Ok(Json(json!({
        "email": email,
        "message": "Enter a new password for this account"
    })))
}

/// Set a new password for an account.
///
/// # Response
///
/// - **Success (200 OK)**: Password has been reset
/// - **Error (400)**: Password missing
/// - **Error (404)**: Unknown email
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<Value>, AppError> {
    let password = non_empty(request.password)
        .ok_or_else(|| AppError::Validation("Please enter a new password".to_string()))?;
    let email = non_empty(request.email)
        .ok_or_else(|| AppError::Validation("Please provide an email".to_string()))?;

    account_service::update_password(&state.pool, &state.hasher, &email, &password).await?;

    Ok(Json(json!({ "message": "Password has been reset successfully" })))
}
