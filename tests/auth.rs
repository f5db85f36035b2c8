//! Login, token gate on dashboard routes, and the dev-only admin bootstrap.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn login_returns_bearer_token_for_valid_credentials() {
    let state = create_seeded_app_state();
    {
        let conn = state.db.get().unwrap();
        create_test_admin(&conn, "admin", "admin123", true);
    }

    let (status, body) = call(
        test_app(state.clone()),
        send_json(
            "POST",
            "/api/login",
            None,
            &json!({"username": "admin", "password": "admin123"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["is_admin"], true);

    let token = body["access_token"].as_str().unwrap();
    let claims = state.tokens.verify(token).unwrap();
    assert_eq!(claims.username, "admin");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let state = create_seeded_app_state();
    {
        let conn = state.db.get().unwrap();
        create_test_admin(&conn, "admin", "admin123", true);
    }

    let (status, body) = call(
        test_app(state),
        send_json(
            "POST",
            "/api/login",
            None,
            &json!({"username": "admin", "password": "wrongpassword"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn login_with_unknown_user_gives_same_error() {
    let state = create_seeded_app_state();

    let (status, body) = call(
        test_app(state),
        send_json(
            "POST",
            "/api/login",
            None,
            &json!({"username": "nobody", "password": "admin123"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn malformed_login_body_is_bad_request_with_detail() {
    let state = create_seeded_app_state();

    let (status, body) = call(
        test_app(state),
        send_json("POST", "/api/login", None, &json!({"username": "admin"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn dashboard_routes_require_a_token() {
    let state = create_seeded_app_state();

    let requests = [
        get("/api/me", None),
        get("/api/analytics", None),
        get("/api/analytics/summary", None),
        send_json("PUT", "/api/site-content", None, &json!({})),
        send_json("PUT", "/api/sections", None, &json!({"hero": false})),
        send_json("POST", "/api/ebooks", None, &json!({"title": "x"})),
        send_json("POST", "/api/proofs-of-gains", None, &json!({"title": "x"})),
        send_empty("DELETE", "/api/proofs-of-gains/some-id", None),
        send_empty("POST", "/api/geo-config/presets", None),
    ];

    for request in requests {
        let uri = request.uri().to_string();
        let (status, _) = call(test_app(state.clone()), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} should need a token", uri);
    }
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let state = create_seeded_app_state();
    let (status, _) = call(test_app(state), get("/api/me", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_deleted_account_is_unauthorized() {
    let state = create_seeded_app_state();
    // Signed by the right key, but no such admin row exists
    let token = state.tokens.issue("ghost", true).unwrap();
    let (status, _) = call(test_app(state), get("/api/me", Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_user_is_forbidden() {
    let state = create_seeded_app_state();
    {
        let conn = state.db.get().unwrap();
        create_test_admin(&conn, "viewer", "viewer-pass", false);
    }
    let token = state.tokens.issue("viewer", false).unwrap();

    let (status, _) = call(test_app(state), get("/api/analytics", Some(&token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn me_returns_session_user() {
    let state = create_seeded_app_state();
    let token = admin_token(&state);

    let (status, body) = call(test_app(state), get("/api/me", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"username": TEST_ADMIN, "is_admin": true}));
}

#[tokio::test]
async fn public_reads_need_no_token() {
    let state = create_seeded_app_state();

    for uri in [
        "/api/",
        "/api",
        "/api/site-content",
        "/api/config",
        "/api/vsl-config",
        "/api/sections",
        "/api/ebooks",
        "/api/products",
        "/api/proofs-of-gains",
        "/api/geo-config",
        "/api/landing",
        "/health",
    ] {
        let (status, _) = call(test_app(state.clone()), get(uri, None)).await;
        assert_eq!(status, StatusCode::OK, "{} should be public", uri);
    }
}

#[tokio::test]
async fn init_admin_only_exists_in_dev_mode() {
    let state = create_seeded_app_state();
    let (status, _) = call(test_app(state), send_empty("POST", "/api/init-admin", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn init_admin_creates_default_admin_once() {
    let state = create_seeded_app_state();

    let (status, body) = call(dev_app(state.clone()), send_empty("POST", "/api/init-admin", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Admin user created");
    assert_eq!(body["username"], "admin");

    let (status, body) = call(dev_app(state.clone()), send_empty("POST", "/api/init-admin", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Admin user already exists");

    let (status, _) = call(
        dev_app(state),
        send_json(
            "POST",
            "/api/login",
            None,
            &json!({"username": "admin", "password": "admin123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_version() {
    let state = create_test_app_state();
    let (status, body) = call(test_app(state), get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
