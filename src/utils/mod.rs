//! Shared helpers that are not tied to a single table.

/// Werkzeug-compatible password hashing
pub mod password;
