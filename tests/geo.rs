//! Geo-targeting config, platform recommendation and country detection.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

mod common;
use common::*;

fn geo_body(enabled: bool) -> serde_json::Value {
    json!({
        "geo_targeting_enabled": enabled,
        "default_platform": "hotmart",
        "platform_configs": [],
        "geo_platform_mappings": [
            {"country_code": "BR", "country_name": "Brasil", "primary_platform": "hotmart", "backup_platforms": ["monetizze"], "enabled": true},
            {"country_code": "US", "country_name": "Estados Unidos", "primary_platform": "clickbank", "backup_platforms": ["hotmart"], "enabled": true},
            {"country_code": "MX", "country_name": "México", "primary_platform": "kiwify", "backup_platforms": [], "enabled": false}
        ]
    })
}

async fn put_geo(state: &AppState, token: &str, body: &serde_json::Value) -> (StatusCode, serde_json::Value) {
    call(
        test_app(state.clone()),
        send_json("PUT", "/api/geo-config", Some(token), body),
    )
    .await
}

#[tokio::test]
async fn brazil_gets_hotmart_with_monetizze_backup() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    put_geo(&state, &token, &geo_body(true)).await;

    let (status, body) = call(test_app(state), get("/api/recommended-platform/BR", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"country_code": "BR", "platform": "hotmart", "backup_platforms": ["monetizze"]})
    );
}

#[tokio::test]
async fn lowercase_country_is_normalized() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    put_geo(&state, &token, &geo_body(true)).await;

    let (_, body) = call(test_app(state), get("/api/recommended-platform/us", None)).await;
    assert_eq!(body["country_code"], "US");
    assert_eq!(body["platform"], "clickbank");
}

#[tokio::test]
async fn unmapped_and_disabled_countries_get_default() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    put_geo(&state, &token, &geo_body(true)).await;

    for country in ["JP", "MX", "ZZ"] {
        let (_, body) = call(
            test_app(state.clone()),
            get(&format!("/api/recommended-platform/{}", country), None),
        )
        .await;
        assert_eq!(body["platform"], "hotmart", "{}", country);
        assert_eq!(body["backup_platforms"], json!([]), "{}", country);
    }
}

#[tokio::test]
async fn disabled_targeting_ignores_mappings() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    put_geo(&state, &token, &geo_body(false)).await;

    for country in ["BR", "US"] {
        let (_, body) = call(
            test_app(state.clone()),
            get(&format!("/api/recommended-platform/{}", country), None),
        )
        .await;
        assert_eq!(body["platform"], "hotmart");
        assert_eq!(body["backup_platforms"], json!([]));
    }
}

#[tokio::test]
async fn put_normalizes_codes_and_collapses_duplicates() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    let body = json!({
        "default_platform": "hotmart",
        "geo_platform_mappings": [
            {"country_code": " br ", "primary_platform": "monetizze"},
            {"country_code": "BR", "primary_platform": "eduzz", "backup_platforms": ["hotmart"]}
        ]
    });

    let (status, stored) = put_geo(&state, &token, &body).await;
    assert_eq!(status, StatusCode::OK);
    let mappings = stored["geo_platform_mappings"].as_array().unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0]["country_code"], "BR");
    assert_eq!(mappings[0]["primary_platform"], "eduzz");

    let (_, rec) = call(test_app(state), get("/api/recommended-platform/BR", None)).await;
    assert_eq!(rec["platform"], "eduzz");
    assert_eq!(rec["backup_platforms"], json!(["hotmart"]));
}

#[tokio::test]
async fn put_rejects_invalid_country_code() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    let body = json!({
        "geo_platform_mappings": [{"country_code": "BRA", "primary_platform": "hotmart"}]
    });

    let (status, body) = put_geo(&state, &token, &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("country_code"));
}

#[tokio::test]
async fn preset_replaces_mappings_and_keeps_default_platform() {
    let state = create_test_app_state();
    let token = admin_token(&state);
    put_geo(
        &state,
        &token,
        &json!({"geo_targeting_enabled": false, "default_platform": "kiwify"}),
    )
    .await;

    let (status, body) = call(
        test_app(state),
        send_empty("POST", "/api/geo-config/presets", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default_platform"], "kiwify");
    assert_eq!(body["geo_targeting_enabled"], false);
    assert_eq!(body["geo_platform_mappings"].as_array().unwrap().len(), 12);
    assert_eq!(body["platform_configs"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn seeded_config_already_maps_brazil() {
    let state = create_seeded_app_state();
    let (_, body) = call(test_app(state), get("/api/recommended-platform/BR", None)).await;
    assert_eq!(body["platform"], "hotmart");
    assert_eq!(body["backup_platforms"], json!(["monetizze"]));
}

#[tokio::test]
async fn detect_country_uses_edge_header_and_mapping_name() {
    let state = create_seeded_app_state();
    let request = Request::builder()
        .uri("/api/detect-country")
        .header("cf-ipcountry", "br")
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(test_app(state), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country_code"], "BR");
    assert_eq!(body["country_name"], "Brasil");
    assert_eq!(body["ip"], "203.0.113.7");
}

#[tokio::test]
async fn detect_country_falls_back_to_default_country() {
    let state = create_seeded_app_state();
    let (status, body) = call(test_app(state), get("/api/detect-country", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country_code"], "BR");
}
