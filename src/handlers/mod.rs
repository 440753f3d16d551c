//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, auth context)
//! 2. Calls into the services
//! 3. Returns HTTP response (JSON, status code)

/// Signup and password reset
pub mod accounts;
/// Seat selection, payment, history and cancellation
pub mod bookings;
/// Flight search and seat maps
pub mod flights;
/// Liveness probe
pub mod health;
/// Login and logout
pub mod sessions;
