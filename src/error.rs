//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every operation of the booking core returns one of these variants. The
/// HTTP layer is the only place they are turned into user-facing messages.
///
/// # Error Categories
///
/// - **Validation**: missing or malformed input, seat coordinates off the grid
/// - **Conflict**: the seat was already booked when the booking was written
/// - **Authorization**: acting on a booking owned by someone else
/// - **Lookup**: referenced flight, booking or account does not exist
/// - **Storage**: the database failed; the unit of work was rolled back
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, commit failure).
    ///
    /// Returns HTTP 500. Details are logged, never sent to the client.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Required input missing or malformed.
    ///
    /// Returns HTTP 400 Bad Request with the given message.
    #[error("{0}")]
    Validation(String),

    /// The seat is held by an existing booking.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Seat already booked")]
    SeatConflict,

    /// The requester does not own the resource.
    ///
    /// Returns HTTP 403 Forbidden with a generic message.
    #[error("Unauthorized action")]
    Unauthorized,

    /// Referenced resource does not exist. Carries the resource kind.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Signup with an email that is already registered.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Email already exists")]
    DuplicateEmail,

    /// Login with an unknown email or a wrong password.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed or revoked session token.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Please login first")]
    Unauthenticated,

    /// Unexpected failure outside the database (e.g. password hashing).
    ///
    /// Returns HTTP 500.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(ref msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::SeatConflict => (StatusCode::CONFLICT, "seat_already_booked", self.to_string()),
            AppError::Unauthorized => (StatusCode::FORBIDDEN, "unauthorized", self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::DuplicateEmail => (StatusCode::CONFLICT, "email_exists", self.to_string()),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                self.to_string(),
            ),
            AppError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "unauthenticated", self.to_string())
            }
            AppError::Storage(ref err) => {
                tracing::error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    "An error occurred. Please try again.".to_string(),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An error occurred. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
