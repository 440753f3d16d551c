//! Flight catalog HTTP handlers.
//!
//! - POST /api/v1/flights/search - Search by route and date
//! - GET /api/v1/airports - Airport codes for the search form
//! - GET /api/v1/flights/:id - Flight details
//! - GET /api/v1/flights/:id/seats - Current seat map

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        booking::SeatMapResponse,
        flight::{Flight, FlightQuery, FlightSearchRequest},
    },
    services::{booking_service, flight_service},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Search flights.
///
/// # Request Body
///
/// ```json
/// {
///   "departure_airport": "JFK",
///   "arrival_location": "LAX",
///   "departure_date": "2024-11-05"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: Array of matching flights, empty when nothing matches
/// - **Error (400)**: A field is missing or the date is not `YYYY-MM-DD`
pub async fn search_flights(
    State(pool): State<DbPool>,
    Json(request): Json<FlightSearchRequest>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let query = FlightQuery::try_from(request)?;
    let flights = flight_service::search(&pool, &query).await?;

    Ok(Json(flights))
}

/// Distinct airport codes across departures and arrivals.
pub async fn list_airports(State(pool): State<DbPool>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(flight_service::airport_codes(&pool).await?))
}

pub async fn get_flight(
    State(pool): State<DbPool>,
    Path(flight_id): Path<i64>,
) -> Result<Json<Flight>, AppError> {
    Ok(Json(flight_service::get_flight(&pool, flight_id).await?))
}

/// Seat map of a flight, derived from its bookings at request time.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "flight_id": 1,
///   "flight_number": "AB123",
///   "seats": { "rows": [[false, false, false, false], [false, true, false, false], ...] },
///   "available": 19
/// }
/// ```
pub async fn seat_map(
    State(pool): State<DbPool>,
    Path(flight_id): Path<i64>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let flight = flight_service::get_flight(&pool, flight_id).await?;
    let seats = booking_service::occupancy(&pool, flight_id).await?;

    Ok(Json(SeatMapResponse {
        flight_id: flight.id,
        flight_number: flight.flight_number,
        available: seats.available_count(),
        seats,
    }))
}
