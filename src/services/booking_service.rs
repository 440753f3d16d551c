//! Booking ledger - the single source of truth for seat ownership.
//!
//! This service handles:
//! - Atomic seat booking
//! - Owner-only cancellation
//! - Booking history
//! - Deriving the seat map of a flight from its bookings
//!
//! # Atomicity Guarantees
//!
//! A booking is one INSERT inside a database transaction. The
//! `unique_seat_booking` constraint on `(flight_id, seat_row, seat_col)` is
//! the arbiter between concurrent callers: whoever commits second gets a
//! unique violation, reported as `SeatConflict`, and nothing is written.

use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        booking::Booking,
        seat::{Seat, SeatMap},
    },
};

const BOOKING_COLUMNS: &str =
    "id, user_email, flight_id, seat_row, seat_col, seat_label, booked_at";

/// Book a seat on a flight.
///
/// # Process
///
/// 1. Start database transaction
/// 2. Insert the ledger row, selecting the flight so a missing flight inserts nothing
/// 3. Commit (or rollback on error)
///
/// # Errors
///
/// - `NotFound`: flight doesn't exist
/// - `SeatConflict`: seat already booked; the ledger is unchanged
/// - `Storage`: database error occurred; the transaction was rolled back
pub async fn create_booking(
    pool: &DbPool,
    user_email: &str,
    flight_id: i64,
    seat: Seat,
) -> Result<Booking, AppError> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query_as::<_, Booking>(&format!(
        r#"
        INSERT INTO bookings (user_email, flight_id, seat_row, seat_col, seat_label, booked_at)
        SELECT ?1, id, ?2, ?3, ?4, ?5
        FROM flights
        WHERE id = ?6
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(user_email)
    .bind(seat.row)
    .bind(seat.col)
    .bind(seat.label())
    .bind(Utc::now())
    .bind(flight_id)
    .fetch_optional(&mut *tx)
    .await;

    let booking = match inserted {
        Ok(Some(booking)) => booking,
        Ok(None) => {
            tx.rollback().await?;
            return Err(AppError::NotFound("Flight"));
        }
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            tx.rollback().await?;
            tracing::warn!(flight_id, seat = %seat.label(), "seat already booked");
            return Err(AppError::SeatConflict);
        }
        Err(err) => {
            tx.rollback().await?;
            return Err(err.into());
        }
    };

    tx.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        flight_id,
        seat = %booking.seat_label,
        "seat booked"
    );

    Ok(booking)
}

/// Cancel a booking on behalf of `requesting_email`.
///
/// The delete only matches a booking owned by the requester, so another
/// user's booking is never touched.
///
/// # Errors
///
/// - `NotFound`: no booking with this ID
/// - `Unauthorized`: booking belongs to a different user
pub async fn cancel_booking(
    pool: &DbPool,
    booking_id: i64,
    requesting_email: &str,
) -> Result<Booking, AppError> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query_as::<_, Booking>(&format!(
        "DELETE FROM bookings WHERE id = ?1 AND user_email = ?2 RETURNING {BOOKING_COLUMNS}"
    ))
    .bind(booking_id)
    .bind(requesting_email)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(booking) = deleted else {
        tx.rollback().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bookings WHERE id = ?1)")
            .bind(booking_id)
            .fetch_one(pool)
            .await?;

        return Err(if exists {
            tracing::warn!(booking_id, "cancellation refused for non-owner");
            AppError::Unauthorized
        } else {
            AppError::NotFound("Booking")
        });
    };

    tx.commit().await?;

    tracing::info!(booking_id, flight_id = booking.flight_id, "booking cancelled");

    Ok(booking)
}

/// All bookings owned by `email`, oldest first.
pub async fn bookings_for_user(pool: &DbPool, email: &str) -> Result<Vec<Booking>, AppError> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_email = ?1 ORDER BY booked_at, id"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// All bookings on a flight, by seat.
#[cfg(test)]
pub(crate) async fn bookings_for_flight(pool: &DbPool, flight_id: i64) -> Result<Vec<Booking>, AppError> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE flight_id = ?1 ORDER BY seat_row, seat_col"
    ))
    .bind(flight_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Current occupancy grid of a flight, rebuilt from the ledger.
///
/// A flight without bookings (or an unknown flight id) yields an empty grid.
pub async fn occupancy(pool: &DbPool, flight_id: i64) -> Result<SeatMap, AppError> {
    let rows: Vec<(i64, i64)> =
        sqlx::query_as("SELECT seat_row, seat_col FROM bookings WHERE flight_id = ?1")
            .bind(flight_id)
            .fetch_all(pool)
            .await?;

    let seats = rows.into_iter().filter_map(|(row, col)| match Seat::new(row, col) {
        Ok(seat) => Some(seat),
        Err(_) => {
            tracing::warn!(flight_id, row, col, "ignoring booking outside the seat map");
            None
        }
    });

    Ok(SeatMap::from_seats(seats))
}
