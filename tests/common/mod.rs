//! Common test utilities for API integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use flight_booking_server::{
    AppState, build_router,
    db::{self, DbPool},
    utils::password::PasswordHasher,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router plus a handle on its database, for asserting on the ledger directly.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
}

/// Create a router over a fresh in-memory database holding the sample flights
pub async fn create_test_app() -> TestApp {
    let pool = db::create_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    db::run_migrations(&pool).await.expect("Failed to migrate");
    db::seed_sample_flights(&pool).await.expect("Failed to seed");

    // Low iteration count keeps hashing fast in debug builds
    let state = AppState::new(pool.clone(), PasswordHasher::new(1_000));

    TestApp {
        router: build_router(state),
        pool,
    }
}

impl TestApp {
    /// Send a request and return the status and JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }

    /// Sign up and log in, returning the session token
    pub async fn create_user(&self, email: &str, password: &str) -> String {
        let credentials = json!({ "email": email, "password": password });

        let (status, _) = self.post("/api/v1/accounts", None, credentials.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self.post("/api/v1/sessions", None, credentials).await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().expect("No session token").to_string()
    }

    /// Flight id for a flight number in the seeded catalog
    pub async fn flight_id(&self, flight_number: &str) -> i64 {
        sqlx::query_scalar("SELECT id FROM flights WHERE flight_number = ?1")
            .bind(flight_number)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    /// Ledger rows of a flight as (seat_row, seat_col, user_email)
    pub async fn ledger(&self, flight_id: i64) -> Vec<(i64, i64, String)> {
        sqlx::query_as(
            "SELECT seat_row, seat_col, user_email FROM bookings WHERE flight_id = ?1 ORDER BY id",
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await
        .unwrap()
    }
}
