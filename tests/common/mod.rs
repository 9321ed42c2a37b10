#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::{Value, json};
use user_api::api::handlers::{health_handler, root_handler};
use user_api::api::routes::user_routes;
use user_api::prelude::{NewUser, PasswordHasher};
use user_api::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_state() -> AppState {
    AppState::new(
        PasswordHasher::new(TEST_SECRET),
        "127.0.0.1:3000".to_string(),
        64 * 1024,
    )
}

/// Router with every route the service exposes, without tracing or path
/// normalization.
pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(user_routes(&state))
        .with_state(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_router(state)).unwrap()
}

pub async fn create_test_user(state: &AppState, email: &str, password: &str) -> String {
    state
        .user_service
        .create_user(NewUser {
            email: email.to_string(),
            password: password.to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            permission_level: Some(1),
        })
        .await
        .unwrap()
}

pub async fn post_user(server: &TestServer, body: Value) -> String {
    let response = server.post("/users").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn user_body(email: &str) -> Value {
    json!({ "email": email, "password": "p" })
}
