//! Flight catalog models and search request types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, models::account::non_empty};

/// Represents a flight record from the database.
///
/// Flights are reference data seeded at startup. Seat occupancy is not a
/// column here; see [`crate::models::seat::SeatMap`].
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Flight {
    pub id: i64,

    /// Carrier flight number, unique across the catalog (e.g. "AB123")
    pub flight_number: String,

    /// IATA code of the origin airport
    pub departure_airport: String,

    /// IATA code of the destination
    pub arrival_location: String,

    /// Local departure time (no timezone, as published in the schedule)
    pub departure_time: NaiveDateTime,

    pub arrival_time: NaiveDateTime,

    /// Ticket price in cents
    pub cost_cents: i64,
}

/// Search form submitted by the booking page.
///
/// # JSON Example
///
/// ```json
/// {
///   "departure_airport": "JFK",
///   "arrival_location": "LAX",
///   "departure_date": "2024-11-05"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct FlightSearchRequest {
    #[serde(default)]
    pub departure_airport: Option<String>,

    #[serde(default)]
    pub arrival_location: Option<String>,

    #[serde(default)]
    pub departure_date: Option<String>,
}

/// Validated search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub departure_airport: String,
    pub arrival_location: String,
    pub departure_date: NaiveDate,
}

impl TryFrom<FlightSearchRequest> for FlightQuery {
    type Error = AppError;

    fn try_from(request: FlightSearchRequest) -> Result<Self, Self::Error> {
        let (Some(departure_airport), Some(arrival_location), Some(departure_date)) = (
            non_empty(request.departure_airport),
            non_empty(request.arrival_location),
            non_empty(request.departure_date),
        ) else {
            return Err(AppError::Validation(
                "Please provide all required information".to_string(),
            ));
        };

        let departure_date = NaiveDate::parse_from_str(&departure_date, "%Y-%m-%d")
            .map_err(|_| {
                AppError::Validation(format!(
                    "Departure date must be YYYY-MM-DD, got '{departure_date}'"
                ))
            })?;

        Ok(Self {
            departure_airport,
            arrival_location,
            departure_date,
        })
    }
}
