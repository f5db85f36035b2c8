//! Landing view composition and translation endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn empty_store_degrades_to_builtin_defaults() {
    let state = create_test_app_state();
    let (status, body) = call(test_app(state.clone()), get("/api/landing", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_fallback_product"], true);
    assert_eq!(body["product"]["id"], Ebook::fallback().id);
    assert_eq!(body["testimonials"].as_array().unwrap().len(), 3);
    assert_eq!(body["language"], "pt");
    for (key, visible) in body["sections"].as_object().unwrap() {
        assert_eq!(visible, &json!(true), "{} should default to visible", key);
    }

    let conn = state.db.get().unwrap();
    let today = queries::get_analytics_for_date(&conn, &vitrine::util::today())
        .unwrap()
        .unwrap();
    assert_eq!(today.page_views, 1);
}

#[tokio::test]
async fn first_enabled_ebook_is_the_product() {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        let mut retired = sample_ebook();
        retired.title = "Retired".into();
        retired.enabled = false;
        queries::create_ebook(&conn, &retired).unwrap();
        queries::create_ebook(&conn, &sample_ebook()).unwrap();
    }

    let (_, body) = call(test_app(state), get("/api/landing", None)).await;
    assert_eq!(body["is_fallback_product"], false);
    assert_eq!(body["product"]["title"], "Trading Setup");
}

#[tokio::test]
async fn configured_testimonials_replace_defaults() {
    let state = create_seeded_app_state();
    let token = admin_token(&state);
    call(
        test_app(state.clone()),
        send_json(
            "PUT",
            "/api/site-content",
            Some(&token),
            &json!({"testimonials": [{"name": "Lia", "content": "Top"}]}),
        ),
    )
    .await;

    let (_, body) = call(test_app(state), get("/api/landing", None)).await;
    let testimonials = body["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0]["name"], "Lia");
}

#[tokio::test]
async fn only_explicit_false_hides_a_section() {
    let state = create_seeded_app_state();
    let token = admin_token(&state);
    call(
        test_app(state.clone()),
        send_json(
            "PUT",
            "/api/sections",
            Some(&token),
            &json!({"vsl": false, "faq": true, "bonus_banner": false}),
        ),
    )
    .await;

    let (_, body) = call(test_app(state), get("/api/landing", None)).await;
    let sections = &body["sections"];
    assert_eq!(sections["vsl"], false);
    assert_eq!(sections["faq"], true);
    assert_eq!(sections["proofs_of_gains"], true);
    assert_eq!(sections["hero"], true);
    assert_eq!(sections["bonus_banner"], false);
}

#[tokio::test]
async fn at_most_six_enabled_proofs_are_shown() {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        for i in 0..8 {
            let proof: CreateProof = serde_json::from_value(json!({
                "title": format!("Proof {}", i),
                "enabled": i != 0
            }))
            .unwrap();
            queries::create_proof(&conn, &proof).unwrap();
        }
    }

    let (_, body) = call(test_app(state), get("/api/landing", None)).await;
    let proofs = body["proofs"].as_array().unwrap();
    assert_eq!(proofs.len(), 6);
    assert!(proofs.iter().all(|p| p["enabled"] == true));
}

#[tokio::test]
async fn language_comes_from_query_then_browser() {
    let state = create_test_app_state();

    let (_, body) = call(test_app(state.clone()), get("/api/landing?lang=es", None)).await;
    assert_eq!(body["language"], "es");

    let request = Request::builder()
        .uri("/api/landing?lang=xx")
        .header(header::ACCEPT_LANGUAGE, "it-IT,it;q=0.9,en;q=0.8")
        .body(Body::empty())
        .unwrap();
    let (_, body) = call(test_app(state.clone()), request).await;
    assert_eq!(body["language"], "it");

    let request = Request::builder()
        .uri("/api/landing")
        .header(header::ACCEPT_LANGUAGE, "ja-JP")
        .body(Body::empty())
        .unwrap();
    let (_, body) = call(test_app(state), request).await;
    assert_eq!(body["language"], "pt");
}

#[tokio::test]
async fn languages_lists_all_locales() {
    let state = create_test_app_state();
    let (status, body) = call(test_app(state), get("/api/languages", None)).await;
    assert_eq!(status, StatusCode::OK);

    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["pt", "en", "es", "it", "fr"]);
}

#[tokio::test]
async fn translations_fill_gaps_from_portuguese() {
    let state = create_test_app_state();

    let (status, fr) = call(test_app(state.clone()), get("/api/translations/fr", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, pt) = call(test_app(state.clone()), get("/api/translations/pt", None)).await;

    assert_eq!(fr["pricing.buy"], "ACHETER MAINTENANT");
    assert_eq!(fr["footer.investment.warning"], pt["footer.investment.warning"]);

    let (status, _) = call(test_app(state), get("/api/translations/de", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
