//! Seat selection and booking HTTP handlers.
//!
//! - POST /api/v1/flights/:id/seats/selection - Hold a seat
//! - GET /api/v1/selection - Currently held seat
//! - DELETE /api/v1/selection - Release the held seat
//! - POST /api/v1/flights/:id/payment - Pay and confirm the held seat
//! - GET /api/v1/bookings - Booking history
//! - DELETE /api/v1/bookings/:id - Cancel a booking
//!
//! All routes require a session; bookings and selections belong to the
//! authenticated email.

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::booking::{Booking, HeldSeat, SelectSeatRequest},
    services::{booking_flow, booking_service},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Hold a seat for the authenticated user.
///
/// # Request Body
///
/// ```json
/// { "seat": "1,1" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The held seat
/// - **Error (400)**: Missing, non-numeric or out-of-range seat
/// - **Error (404)**: Flight not found
/// - **Error (409)**: Seat already booked
pub async fn select_seat(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(flight_id): Path<i64>,
    Json(request): Json<SelectSeatRequest>,
) -> Result<Json<HeldSeat>, AppError> {
    let held = booking_flow::select_seat(
        &state.pool,
        &state.selections,
        &auth.email,
        flight_id,
        request.seat.as_deref(),
    )
    .await?;

    Ok(Json(held))
}

pub async fn current_selection(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<HeldSeat>, AppError> {
    state
        .selections
        .get(&auth.email)
        .map(Json)
        .ok_or(AppError::NotFound("Seat selection"))
}

pub async fn release_selection(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> StatusCode {
    state.selections.release(&auth.email);
    StatusCode::NO_CONTENT
}

/// Pay for the held seat. Payment always succeeds; the booking is then written.
///
/// # Response
///
/// - **Success (201 Created)**: The booking
/// - **Error (400)**: No seat held for this flight
/// - **Error (409)**: Seat was booked by someone else in the meantime
pub async fn pay(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(flight_id): Path<i64>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking =
        booking_flow::confirm_selection(&state.pool, &state.selections, &auth.email, flight_id)
            .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn booking_history(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = booking_service::bookings_for_user(&state.pool, &auth.email).await?;
    Ok(Json(bookings))
}

/// Cancel one of the user's bookings.
///
/// # Response
///
/// - **Success (200 OK)**: The cancelled booking
/// - **Error (403)**: Booking belongs to someone else
/// - **Error (404)**: Booking not found
pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let booking = booking_flow::cancel(&state.pool, &auth.email, booking_id).await?;
    Ok(Json(booking))
}
