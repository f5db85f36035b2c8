use std::sync::Arc;

use vitrine_sdk::storage::keys;
use vitrine_sdk::*;

// Nothing listens on the discard port, so every request fails fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn offline_client() -> (VitrineClient, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let client = VitrineClient::new(UNREACHABLE)
        .unwrap()
        .with_storage(storage.clone());
    (client, storage)
}

fn store_session(storage: &dyn StorageAdapter, is_admin: bool) {
    let user = SessionUser {
        username: "admin".into(),
        is_admin,
    };
    storage.set(keys::TOKEN, "token");
    storage.set(keys::USER, &serde_json::to_string(&user).unwrap());
}

#[tokio::test]
async fn tracking_never_fails() {
    let (client, _) = offline_client();
    client.track_page_view().await;
    client.track_video_view().await;
    client.track_button_click().await;
}

#[tokio::test]
async fn buy_returns_destination_when_tracking_fails() {
    let (client, _) = offline_client();
    let button = BuyButton {
        platform: "Kiwify".into(),
        url: "https://pay.kiwify.com.br/abc".into(),
        color: String::new(),
        enabled: true,
    };

    assert_eq!(client.buy(&button).await, "https://pay.kiwify.com.br/abc");
}

#[tokio::test]
async fn landing_degrades_to_defaults() {
    let (client, storage) = offline_client();
    storage.set(keys::LANGUAGE, "es");

    let page = client.load_landing().await;
    assert_eq!(page.language, "es");
    assert!(page.is_fallback_product);
    assert_eq!(page.product.id, "default");
    assert_eq!(page.testimonials.len(), 3);
    for section in ["hero", "vsl", "proofs_of_gains", "pricing", "faq"] {
        assert!(page.is_visible(section), "{} hidden", section);
    }
}

#[tokio::test]
async fn failed_login_reports_login_failed_and_keeps_no_session() {
    let (client, storage) = offline_client();

    let err = client.login("admin", "admin123").await.unwrap_err();
    assert_eq!(err.message, "Login failed");
    assert_eq!(err.code, VitrineErrorCode::NetworkError);
    assert!(storage.get(keys::TOKEN).is_none());
    assert!(client.session().is_none());
}

#[tokio::test]
async fn admin_helpers_need_a_session() {
    let (client, _) = offline_client();

    let err = client.analytics().await.unwrap_err();
    assert_eq!(err.code, VitrineErrorCode::NoSession);

    let err = client.delete_proof("p1").await.unwrap_err();
    assert_eq!(err.code, VitrineErrorCode::NoSession);
}

#[tokio::test]
async fn stored_session_reaches_the_network() {
    let (client, storage) = offline_client();
    store_session(&*storage, true);

    let err = client.analytics_summary().await.unwrap_err();
    assert_eq!(err.code, VitrineErrorCode::NetworkError);
}

#[test]
fn admin_route_redirects_without_admin_session() {
    let (client, storage) = offline_client();
    assert_eq!(client.route("/admin"), RouteDecision::Redirect("/login"));
    assert_eq!(client.route("/"), RouteDecision::Allow);

    store_session(&*storage, false);
    assert_eq!(client.route("/admin"), RouteDecision::Redirect("/login"));

    store_session(&*storage, true);
    assert_eq!(client.route("/admin"), RouteDecision::Allow);

    client.logout();
    assert_eq!(client.route("/admin"), RouteDecision::Redirect("/login"));
    assert!(!client.is_admin());
}

#[test]
fn user_without_token_is_not_a_session() {
    let (client, storage) = offline_client();
    store_session(&*storage, true);
    storage.remove(keys::TOKEN);
    assert!(client.session().is_none());
}

#[test]
fn language_prefers_saved_then_browser_then_portuguese() {
    let (client, _) = offline_client();
    assert_eq!(client.language(None), "pt");
    assert_eq!(client.language(Some("en-US")), "en");
    assert_eq!(client.language(Some("de-DE")), "pt");

    client.set_language("it").unwrap();
    assert_eq!(client.language(Some("en-US")), "it");

    let err = client.set_language("de").unwrap_err();
    assert_eq!(err.code, VitrineErrorCode::ValidationError);
    assert_eq!(client.language(None), "it");
}

#[test]
fn session_survives_in_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitrine.json");

    {
        let storage = Arc::new(FileStorage::at(&path));
        store_session(&*storage, true);
    }

    let client = VitrineClient::new(UNREACHABLE)
        .unwrap()
        .with_storage(Arc::new(FileStorage::at(&path)));
    assert!(client.is_admin());
    assert_eq!(client.route("/admin"), RouteDecision::Allow);
}
