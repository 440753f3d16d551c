//! Signup, login, logout and password reset through the HTTP API

mod common;

use axum::http::{Method, StatusCode};
use common::create_test_app;
use serde_json::json;

/// Test: login with valid credentials returns a usable token
#[tokio::test]
async fn test_login_valid_credentials() {
    let app = create_test_app().await;
    let token = app.create_user("test@example.com", "password123").await;

    let (status, _) = app.get("/api/v1/bookings", &token).await;
    assert_eq!(status, StatusCode::OK);
}

/// Test: wrong password is rejected
#[tokio::test]
async fn test_login_invalid_password() {
    let app = create_test_app().await;
    app.create_user("test@example.com", "password123").await;

    let (status, body) = app
        .post(
            "/api/v1/sessions",
            None,
            json!({ "email": "test@example.com", "password": "wrongpassword" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid email or password");
}

/// Test: login requires both fields
#[tokio::test]
async fn test_login_missing_fields() {
    let app = create_test_app().await;

    let (status, body) = app
        .post("/api/v1/sessions", None, json!({ "email": "test@example.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Please provide both email and password");
}

/// Test: signup returns the account without its password hash
#[tokio::test]
async fn test_signup_success() {
    let app = create_test_app().await;

    let (status, body) = app
        .post(
            "/api/v1/accounts",
            None,
            json!({ "email": "newuser@example.com", "password": "newpassword123" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "newuser@example.com");
    assert!(body.get("password_hash").is_none());
}

/// Test: signing up twice with the same email fails
#[tokio::test]
async fn test_signup_existing_email() {
    let app = create_test_app().await;
    app.create_user("test@example.com", "password123").await;

    let (status, body) = app
        .post(
            "/api/v1/accounts",
            None,
            json!({ "email": "test@example.com", "password": "newpassword123" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already exists");
}

/// Test: forgot password only accepts registered emails
#[tokio::test]
async fn test_forgot_password() {
    let app = create_test_app().await;
    app.create_user("test@example.com", "password123").await;

    let (status, _) = app
        .post(
            "/api/v1/accounts/forgot_password",
            None,
            json!({ "email": "test@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post(
            "/api/v1/accounts/forgot_password",
            None,
            json!({ "email": "ghost@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Email not found");
}

/// Test: reset password replaces the old one
#[tokio::test]
async fn test_reset_password_success() {
    let app = create_test_app().await;
    app.create_user("test@example.com", "password123").await;

    let (status, body) = app
        .post(
            "/api/v1/accounts/reset_password",
            None,
            json!({ "email": "test@example.com", "password": "newpassword123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password has been reset successfully");

    let (status, _) = app
        .post(
            "/api/v1/sessions",
            None,
            json!({ "email": "test@example.com", "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post(
            "/api/v1/sessions",
            None,
            json!({ "email": "test@example.com", "password": "newpassword123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

/// Test: reset password requires a new password
#[tokio::test]
async fn test_reset_password_no_password() {
    let app = create_test_app().await;
    app.create_user("test@example.com", "password123").await;

    let (status, body) = app
        .post(
            "/api/v1/accounts/reset_password",
            None,
            json!({ "email": "test@example.com", "password": "" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Please enter a new password");
}

/// Test: logout revokes the token and drops the held seat
#[tokio::test]
async fn test_logout() {
    let app = create_test_app().await;
    let token = app.create_user("test@example.com", "password123").await;
    let flight_id = app.flight_id("AB123").await;

    app.post(
        &format!("/api/v1/flights/{flight_id}/seats/selection"),
        Some(&token),
        json!({ "seat": "0,0" }),
    )
    .await;

    let (status, body) = app.delete("/api/v1/sessions", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have been logged out");

    let (status, _) = app.get("/api/v1/bookings", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A fresh login finds no leftover selection
    let (_, login) = app
        .post(
            "/api/v1/sessions",
            None,
            json!({ "email": "test@example.com", "password": "password123" }),
        )
        .await;
    let token = login["token"].as_str().unwrap();
    let (status, _) = app.get("/api/v1/selection", token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Test: health endpoint reports the seeded catalog
#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["flights"], 2);
}
