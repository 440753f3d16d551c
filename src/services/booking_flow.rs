//! Seat selection flow: select a seat, then pay to confirm it.
//!
//! Between the two steps the chosen seat is HELD for the user in memory:
//!
//! ```text
//! NONE -> HELD(flight, seat) -> CONFIRMED  (booking written)
//!                            -> RELEASED   (explicit release, logout, or lost race)
//! ```
//!
//! A held seat is not written to the ledger, so it does not block anyone
//! else. Whoever confirms first gets the seat; the loser sees `SeatConflict`.
//! Holds never expire.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        booking::{Booking, HeldSeat},
        seat::Seat,
    },
    services::{booking_service, flight_service},
};

/// Pending seat selections keyed by user email. One selection per user.
#[derive(Debug, Default)]
pub struct SeatSelections {
    held: Mutex<HashMap<String, HeldSeat>>,
}

impl SeatSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a seat for `email`, replacing any earlier selection.
    pub fn hold(&self, email: &str, held: HeldSeat) {
        self.lock().insert(email.to_string(), held);
    }

    pub fn get(&self, email: &str) -> Option<HeldSeat> {
        self.lock().get(email).cloned()
    }

    /// Drop the selection of `email`, returning it if there was one.
    pub fn release(&self, email: &str) -> Option<HeldSeat> {
        self.lock().remove(email)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, HeldSeat>> {
        // The map holds plain data, so a panic elsewhere cannot leave it half-updated
        self.held.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Pick a seat on a flight and hold it until payment.
///
/// # Errors
///
/// - `Validation`: seat input missing, non-numeric or off the grid
/// - `NotFound`: flight doesn't exist
/// - `SeatConflict`: seat is already booked
pub async fn select_seat(
    pool: &DbPool,
    selections: &SeatSelections,
    email: &str,
    flight_id: i64,
    seat_input: Option<&str>,
) -> Result<HeldSeat, AppError> {
    let seat = Seat::parse(seat_input.unwrap_or_default())?;
    flight_service::get_flight(pool, flight_id).await?;

    let map = booking_service::occupancy(pool, flight_id).await?;
    if map.is_occupied(seat) {
        return Err(AppError::SeatConflict);
    }

    let held = HeldSeat::new(flight_id, seat);
    selections.hold(email, held.clone());

    tracing::debug!(flight_id, seat = %held.seat_label, "seat held");

    Ok(held)
}

/// Pay for the held seat and write the booking.
///
/// Payment is not processed; it always succeeds.
///
/// # Errors
///
/// - `Validation`: nothing held for this flight
/// - `SeatConflict`: someone else booked the seat first; the hold is released
/// - `NotFound`: flight no longer exists; the hold is released
/// - `Storage`: database failure; the hold is kept so the user may retry
pub async fn confirm_selection(
    pool: &DbPool,
    selections: &SeatSelections,
    email: &str,
    flight_id: i64,
) -> Result<Booking, AppError> {
    let held = selections
        .get(email)
        .filter(|held| held.flight_id == flight_id)
        .ok_or_else(|| AppError::Validation("Please select a seat for this flight first".to_string()))?;

    match booking_service::create_booking(pool, email, flight_id, held.seat).await {
        Ok(booking) => {
            selections.release(email);
            Ok(booking)
        }
        Err(err @ (AppError::SeatConflict | AppError::NotFound(_))) => {
            selections.release(email);
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Cancel a booking and free its seat.
pub async fn cancel(pool: &DbPool, email: &str, booking_id: i64) -> Result<Booking, AppError> {
    booking_service::cancel_booking(pool, booking_id, email).await
}
