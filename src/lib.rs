//! Flight Booking Service
//!
//! A REST API for searching flights, reserving a seat and tracking bookings.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries)
//! - **Authentication**: Session bearer tokens stored as SHA-256 hashes
//! - **Format**: JSON requests/responses
//!
//! The booking ledger (`bookings` table) is the only record of seat
//! ownership. Seat maps are derived from it on every read, and a UNIQUE
//! constraint on `(flight_id, seat_row, seat_col)` rules out double-booking.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use app::build_router;
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
