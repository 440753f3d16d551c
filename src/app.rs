//! Router construction.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, state::AppState};

/// Build the HTTP router with every route and middleware applied.
pub fn build_router(state: AppState) -> Router {
    // Routes that act on behalf of a logged-in user
    let authenticated_routes = Router::new()
        .route("/api/v1/sessions", delete(handlers::sessions::logout))
        .route("/api/v1/airports", get(handlers::flights::list_airports))
        .route("/api/v1/flights/{id}", get(handlers::flights::get_flight))
        .route("/api/v1/flights/{id}/seats", get(handlers::flights::seat_map))
        .route(
            "/api/v1/flights/{id}/seats/selection",
            post(handlers::bookings::select_seat),
        )
        .route(
            "/api/v1/selection",
            get(handlers::bookings::current_selection).delete(handlers::bookings::release_selection),
        )
        .route("/api/v1/flights/{id}/payment", post(handlers::bookings::pay))
        .route("/api/v1/bookings", get(handlers::bookings::booking_history))
        .route(
            "/api/v1/bookings/{id}",
            delete(handlers::bookings::cancel_booking),
        )
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/accounts", post(handlers::accounts::signup))
        .route(
            "/api/v1/accounts/forgot_password",
            post(handlers::accounts::forgot_password),
        )
        .route(
            "/api/v1/accounts/reset_password",
            post(handlers::accounts::reset_password),
        )
        .route("/api/v1/sessions", post(handlers::sessions::login))
        .route("/api/v1/flights/search", post(handlers::flights::search_flights))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
