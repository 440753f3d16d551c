//! Login and logout handlers.
//!
//! - POST /api/v1/sessions - Exchange email and password for a bearer token
//! - DELETE /api/v1/sessions - Revoke the current token

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::{account::CredentialsRequest, session::LoginResponse},
    services::{account_service, session_service},
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use serde_json::{Value, json};

/// Log in.
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "...", "email": "..."}`
/// - **Error (400)**: Email or password missing
/// - **Error (401)**: Invalid email or password
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (email, password) = request.into_parts()?;

    let account =
        account_service::verify_credentials(&state.pool, &state.hasher, &email, &password).await?;
    let token = session_service::create_session(&state.pool, &account).await?;

    Ok(Json(LoginResponse {
        token,
        email: account.email,
    }))
}

/// Log out. Any seat held by the user is released.
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Value>, AppError> {
    session_service::delete_session(&state.pool, &auth.token).await?;
    state.selections.release(&auth.email);

    tracing::info!(account_id = auth.account_id, "session closed");

    Ok(Json(json!({ "message": "You have been logged out" })))
}
