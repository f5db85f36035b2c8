//! Shared helpers for the integration tests.
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use serde_json::Value;
use tower::ServiceExt;

pub use vitrine::config::Config;
pub use vitrine::db::{AppState, queries};
pub use vitrine::models::*;

use vitrine::geo::CountryLocator;
use vitrine::jwt::TokenSigner;
use vitrine::password::hash_password;

pub const TEST_ADMIN: &str = "admin";
pub const TEST_PASSWORD: &str = "admin123";

/// In-memory state with the schema but no seeded data.
///
/// Each in-memory connection is its own database, so the pool holds exactly
/// one. Tests must drop any connection they take before calling the app.
pub fn create_test_app_state() -> AppState {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder().max_size(1).build(manager).unwrap();
    {
        let conn = pool.get().unwrap();
        vitrine::db::init_db(&conn).unwrap();
    }
    AppState {
        db: pool,
        tokens: TokenSigner::ephemeral(60),
        locator: CountryLocator::new(None, "BR"),
    }
}

/// Same as [`create_test_app_state`] plus first-boot defaults.
pub fn create_seeded_app_state() -> AppState {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        vitrine::db::seed_defaults(&conn).unwrap();
    }
    state
}

pub fn test_app(state: AppState) -> Router {
    vitrine::app(state, &Config::default())
}

pub fn dev_app(state: AppState) -> Router {
    let config = Config {
        dev_mode: true,
        ..Config::default()
    };
    vitrine::app(state, &config)
}

pub fn create_test_admin(conn: &Connection, username: &str, password: &str, is_admin: bool) -> Admin {
    let hash = hash_password(password).unwrap();
    queries::create_admin(conn, username, &hash, is_admin).unwrap()
}

/// Create the default admin and return a valid bearer token for it.
pub fn admin_token(state: &AppState) -> String {
    {
        let conn = state.db.get().unwrap();
        create_test_admin(&conn, TEST_ADMIN, TEST_PASSWORD, true);
    }
    state.tokens.issue(TEST_ADMIN, true).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn send_empty(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Run one request and decode the body as JSON (`Value::Null` when empty).
pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

pub fn sample_ebook() -> CreateEbook {
    serde_json::from_value(serde_json::json!({
        "title": "Trading Setup",
        "subtitle": "Sub",
        "description": "Desc",
        "price": 97.0,
        "original_price": 297.0,
        "features": ["A", "B"],
        "bonuses": ["C"],
        "buy_buttons": [
            {"platform": "Kiwify", "url": "https://kiwify.example/a", "color": "green", "enabled": true},
            {"platform": "Hotmart", "url": "https://hotmart.example/b", "color": "orange", "enabled": false},
            {"platform": "Eduzz", "url": "https://eduzz.example/c", "color": "blue", "enabled": true}
        ]
    }))
    .unwrap()
}
