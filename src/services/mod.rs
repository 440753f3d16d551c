//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions, validation, and the seat selection flow.

pub mod account_service;
pub mod booking_flow;
pub mod booking_service;
pub mod flight_service;
pub mod session_service;
