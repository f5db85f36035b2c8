//! Client contracts against a local server that answers like the real API.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use vitrine_sdk::storage::keys;
use vitrine_sdk::*;

const STUB_TOKEN: &str = "stub-token";

#[derive(Default)]
struct Hits {
    page_views: AtomicUsize,
    button_clicks: AtomicUsize,
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "admin" && body["password"] == "admin123" {
        return Json(json!({
            "access_token": STUB_TOKEN,
            "token_type": "bearer",
            "is_admin": true
        }))
        .into_response();
    }
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "unauthorized", "detail": "Incorrect username or password"})),
    )
        .into_response()
}

async fn me(headers: HeaderMap) -> Response {
    let expected = format!("Bearer {}", STUB_TOKEN);
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value == expected.as_str() => {
            Json(json!({"username": "admin", "is_admin": true})).into_response()
        }
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn landing(
    State(hits): State<Arc<Hits>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    hits.page_views.fetch_add(1, Ordering::SeqCst);
    let language = query.get("lang").cloned().unwrap_or_else(|| "pt".into());
    Json(json!({
        "language": language,
        "sections": {"hero": true, "vsl": false, "pricing": true},
        "content": {"site_title": "Loja", "hero_title": "Aprenda"},
        "product": {
            "id": "ebook-1",
            "title": "Setup",
            "price": 97.0,
            "original_price": null,
            "buy_buttons": [
                {"platform": "Outro", "url": "https://pay.example/1", "color": "gray", "enabled": true}
            ],
            "enabled": true,
            "created_at": 1,
            "updated_at": 1
        },
        "is_fallback_product": false,
        "testimonials": [{"name": "Lia", "role": "", "content": "Ótimo", "rating": 5}],
        "vsl": {"enabled": false},
        "proofs": [{"id": "p1", "title": "Mês 1", "amount": "R$ 1.000"}]
    }))
}

async fn count_page_view(State(hits): State<Arc<Hits>>) -> Json<Value> {
    hits.page_views.fetch_add(1, Ordering::SeqCst);
    Json(json!({"message": "Page view tracked"}))
}

async fn fail_button_click(State(hits): State<Arc<Hits>>) -> Response {
    hits.button_clicks.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "internal_error", "detail": "Internal server error"})),
    )
        .into_response()
}

/// Serves the stub on an ephemeral port and returns its base URL.
async fn spawn_server() -> (String, Arc<Hits>) {
    let hits = Arc::new(Hits::default());
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/me", get(me))
        .route("/api/landing", get(landing))
        .route("/api/analytics/page-view", post(count_page_view))
        .route("/api/analytics/button-click", post(fail_button_click))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), hits)
}

fn client_for(base_url: &str) -> (VitrineClient, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let client = VitrineClient::new(base_url)
        .unwrap()
        .with_storage(storage.clone());
    (client, storage)
}

#[tokio::test]
async fn login_stores_session_and_opens_admin() {
    let (base_url, _) = spawn_server().await;
    let (client, storage) = client_for(&base_url);
    assert_eq!(client.route("/admin"), RouteDecision::Redirect("/login"));

    let user = client.login("admin", "admin123").await.unwrap();
    assert_eq!(user.username, "admin");
    assert!(user.is_admin);
    assert_eq!(storage.get(keys::TOKEN).as_deref(), Some(STUB_TOKEN));
    assert_eq!(client.session(), Some(user));
    assert_eq!(client.route("/admin"), RouteDecision::Allow);

    // The stored token is sent on admin calls
    let me = client.me().await.unwrap();
    assert_eq!(me.username, "admin");
}

#[tokio::test]
async fn rejected_login_surfaces_server_detail() {
    let (base_url, _) = spawn_server().await;
    let (client, storage) = client_for(&base_url);

    let err = client.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.message, "Incorrect username or password");
    assert_eq!(err.code, VitrineErrorCode::Unauthorized);
    assert_eq!(err.status_code, Some(401));
    assert!(storage.get(keys::TOKEN).is_none());
    assert_eq!(client.route("/admin"), RouteDecision::Redirect("/login"));
}

#[tokio::test]
async fn buy_returns_url_when_click_endpoint_fails() {
    let (base_url, hits) = spawn_server().await;
    let (client, _) = client_for(&base_url);
    let button = BuyButton {
        platform: "Kiwify".into(),
        url: "https://pay.kiwify.com.br/abc".into(),
        color: String::new(),
        enabled: true,
    };

    assert_eq!(client.buy(&button).await, "https://pay.kiwify.com.br/abc");
    assert_eq!(hits.button_clicks.load(Ordering::SeqCst), 1);

    // Other beacons still land
    client.track_page_view().await;
    assert_eq!(hits.page_views.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn load_landing_uses_server_view() {
    let (base_url, hits) = spawn_server().await;
    let (client, _) = client_for(&base_url);
    client.set_language("en").unwrap();

    let page = client.load_landing().await;
    assert_eq!(page.language, "en");
    assert!(!page.is_fallback_product);
    assert_eq!(page.product.id, "ebook-1");
    assert_eq!(page.product.buy_buttons[0].platform, "Outro");
    assert_eq!(page.content.hero_title, "Aprenda");
    assert_eq!(page.testimonials.len(), 1);
    assert_eq!(page.proofs.len(), 1);
    assert!(!page.is_visible("vsl"));
    assert!(page.is_visible("faq"));

    // The landing read counts the page view; no extra beacon is sent
    assert_eq!(hits.page_views.load(Ordering::SeqCst), 1);
}
