//! Booking ledger entity and the seat-selection request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::seat::{Seat, SeatMap};

/// Represents one row of the booking ledger.
///
/// # Database Table
///
/// Maps to the `bookings` table. The `(flight_id, seat_row, seat_col)`
/// triple is UNIQUE, which is what prevents double-booking.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Booking {
    pub id: i64,

    /// Owner of the booking; only this user may cancel it
    pub user_email: String,

    pub flight_id: i64,

    /// 0-indexed seat row
    pub seat_row: i64,

    /// 0-indexed seat column
    pub seat_col: i64,

    /// Display label derived from row and column (e.g. "2B")
    pub seat_label: String,

    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn seat(&self) -> Seat {
        Seat {
            row: self.seat_row,
            col: self.seat_col,
        }
    }
}

/// Seat picker form submission.
///
/// # JSON Example
///
/// ```json
/// { "seat": "1,1" }
/// ```
///
/// A label such as `"2B"` is accepted as well.
#[derive(Debug, Deserialize)]
pub struct SelectSeatRequest {
    #[serde(default)]
    pub seat: Option<String>,
}

/// A seat held for a user between selection and payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeldSeat {
    pub flight_id: i64,
    pub seat: Seat,
    pub seat_label: String,
    pub held_at: DateTime<Utc>,
}

impl HeldSeat {
    pub fn new(flight_id: i64, seat: Seat) -> Self {
        Self {
            flight_id,
            seat,
            seat_label: seat.label(),
            held_at: Utc::now(),
        }
    }
}

/// Seat map as returned to the seat picker.
#[derive(Debug, Serialize)]
pub struct SeatMapResponse {
    pub flight_id: i64,
    pub flight_number: String,

    /// `seats[row][col]` is `true` when the seat is booked
    pub seats: SeatMap,

    pub available: usize,
}
