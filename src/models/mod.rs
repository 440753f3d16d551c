//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the derived seat grid.

/// Registered user accounts
pub mod account;
/// Seat ledger rows and seat selection types
pub mod booking;
/// Flight catalog
pub mod flight;
/// Seat coordinates and occupancy grid
pub mod seat;
/// Login sessions
pub mod session;
