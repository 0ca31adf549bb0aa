//! Authentication test helpers

use axum::http::StatusCode;
use serde_json::json;

use super::app::TestApp;

/// A signed-up, logged-in user
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Sign up through the API and return the status
pub async fn signup(app: &TestApp, username: &str, password: &str, profile: &str) -> StatusCode {
    let (status, _) = app
        .post(
            "/signup",
            None,
            json!({"username": username, "password": password, "userProfile": profile}),
        )
        .await;
    status
}

/// Log in through the API and return the token
pub async fn login(app: &TestApp, username: &str, password: &str) -> String {
    let (status, body) = app
        .post("/login", None, json!({"username": username, "password": password}))
        .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Sign up and log in a user with a default password
pub async fn create_test_user(app: &TestApp, username: &str) -> TestUser {
    let password = "password123";
    assert_eq!(signup(app, username, password, "").await, StatusCode::CREATED);
    let token = login(app, username, password).await;
    let id = app
        .state
        .store
        .get_user_by_username(username)
        .await
        .expect("store lookup")
        .expect("user exists after signup")
        .id;

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}
