//! Shared application state handed to every handler.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{db::DbPool, services::booking_flow::SeatSelections, utils::password::PasswordHasher};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,

    /// Seats held between selection and payment
    pub selections: Arc<SeatSelections>,

    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(pool: DbPool, hasher: PasswordHasher) -> Self {
        Self {
            pool,
            selections: Arc::new(SeatSelections::new()),
            hasher,
        }
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
