//! User API integration tests
//!
//! Tests for `/user/signup` and `/user/signin`.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use inkpost::backend::auth::users::create_user;
use inkpost::shared::inputs::MAX_PASSWORD_BYTES;

use crate::common::auth_helpers::create_test_user;
use crate::common::test_app::{TestApp, TEST_BCRYPT_COST};
use crate::{assert_ok, assert_status};

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/user/signup",
            None,
            json!({ "email": "a@x.com", "password": "password123" }),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let body = response.json();
    let jwt = body["jwt"].as_str().expect("jwt present");

    let claims = app.state.tokens.verify(jwt).expect("token verifies");
    let user = inkpost::backend::auth::users::get_user_by_email(&app.state.db_pool, "a@x.com")
        .await
        .unwrap()
        .expect("user stored");
    assert_eq!(claims.id, user.id);
}

#[tokio::test]
async fn test_signup_stores_hash_not_password() {
    let app = TestApp::new().await;
    app.signup("hash@example.com", "password123").await;

    let (stored,): (String,) = sqlx::query_as("SELECT password_hash FROM users WHERE email = ?")
        .bind("hash@example.com")
        .fetch_one(&app.state.db_pool)
        .await
        .unwrap();

    assert!(stored != "password123");
    assert!(stored.starts_with("$2"));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new().await;
    app.signup("dup@example.com", "password123").await;

    let response = app
        .post_json(
            "/user/signup",
            None,
            json!({ "email": "dup@example.com", "password": "another-password" }),
        )
        .await;

    assert_status!(response, StatusCode::CONFLICT);
    assert_eq!(response.json(), json!({ "message": "Email already registered" }));
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn test_signup_invalid_input() {
    let app = TestApp::new().await;

    let bad_bodies = [
        json!({ "email": "not-an-email", "password": "password123" }),
        json!({ "email": "a@x.com", "password": "short" }),
        json!({ "email": "a@x.com" }),
        json!({ "password": "password123" }),
        json!({ "email": 42, "password": "password123" }),
        json!([]),
    ];

    for body in bad_bodies {
        let response = app.post_json("/user/signup", None, body.clone()).await;
        assert_eq!(response.status, StatusCode::LENGTH_REQUIRED, "body: {}", body);
        assert_eq!(response.json(), json!({ "message": "Invalid input" }));
    }

    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn test_signup_without_content_type() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/user/signup")
        .body(axum::body::Body::from(
            r#"{"email":"a@x.com","password":"password123"}"#,
        ))
        .unwrap();
    let response = app.send(request).await;

    assert_status!(response, StatusCode::LENGTH_REQUIRED);
}

#[tokio::test]
async fn test_signin_success() {
    let app = TestApp::new().await;
    let user = assert_ok!(
        create_test_user(&app.state.db_pool, &app.state.tokens, "test@example.com", "password123")
            .await
    );

    let response = app
        .post_json(
            "/user/signin",
            None,
            json!({ "email": user.email, "password": user.password }),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let jwt = response.json()["jwt"].as_str().unwrap().to_string();
    assert_eq!(app.state.tokens.verify(&jwt).map(|c| c.id), Some(user.id));
    assert_eq!(app.state.tokens.verify(&user.token).map(|c| c.id), Some(user.id));
}

#[tokio::test]
async fn test_signin_after_signup() {
    let app = TestApp::new().await;
    let signup_token = app.signup("round@example.com", "password123").await;

    let response = app
        .post_json(
            "/user/signin",
            None,
            json!({ "email": "round@example.com", "password": "password123" }),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let signin_token = response.json()["jwt"].as_str().unwrap().to_string();

    let tokens = &app.state.tokens;
    assert_eq!(
        tokens.verify(&signup_token).map(|c| c.id),
        tokens.verify(&signin_token).map(|c| c.id)
    );
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let app = TestApp::new().await;
    app.signup("test@example.com", "password123").await;

    let response = app
        .post_json(
            "/user/signin",
            None,
            json!({ "email": "test@example.com", "password": "wrongpassword" }),
        )
        .await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_eq!(response.json(), json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_signin_with_shared_long_prefix_is_forbidden() {
    let app = TestApp::new().await;
    let prefix = "a".repeat(72);

    // Hash made by plain bcrypt, which only reads the first 72 bytes
    let truncated = bcrypt::hash(format!("{}REALSECRET", prefix), TEST_BCRYPT_COST).unwrap();
    create_user(&app.state.db_pool, "t@x.com", &truncated)
        .await
        .unwrap();

    let response = app
        .post_json(
            "/user/signin",
            None,
            json!({ "email": "t@x.com", "password": format!("{}totally-different", prefix) }),
        )
        .await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_eq!(response.json(), json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_signin_at_password_limit() {
    let app = TestApp::new().await;
    let password = "a".repeat(MAX_PASSWORD_BYTES);
    app.signup("t@x.com", &password).await;

    let accepted = app
        .post_json("/user/signin", None, json!({ "email": "t@x.com", "password": password }))
        .await;
    assert_status!(accepted, StatusCode::OK);

    let rejected = app
        .post_json(
            "/user/signin",
            None,
            json!({ "email": "t@x.com", "password": format!("{}b", password) }),
        )
        .await;
    assert_status!(rejected, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_signup_password_over_bcrypt_limit() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/user/signup",
            None,
            json!({ "email": "t@x.com", "password": format!("{}REALSECRET", "a".repeat(72)) }),
        )
        .await;

    assert_status!(response, StatusCode::LENGTH_REQUIRED);
    assert_eq!(response.json(), json!({ "message": "Invalid input" }));
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn test_signin_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/user/signin",
            None,
            json!({ "email": "nonexistent@example.com", "password": "password123" }),
        )
        .await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_eq!(response.json(), json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_signin_invalid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/user/signin", None, json!({ "email": "nope" }))
        .await;

    assert_status!(response, StatusCode::LENGTH_REQUIRED);
    assert_eq!(response.json(), json!({ "message": "Invalid input" }));
}
