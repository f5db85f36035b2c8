//! HTTP client for the Vitrine API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, VitrineError, VitrineErrorCode, map_status_to_error_code};
use crate::fallback;
use crate::session::{self, RouteDecision};
use crate::storage::{MemoryStorage, StorageAdapter, keys};
use crate::types::*;

pub const BACKEND_URL_ENV: &str = "VITRINE_BACKEND_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const LOGIN_FAILED: &str = "Login failed";

pub const DEFAULT_LANGUAGE: &str = "pt";
pub const SUPPORTED_LANGUAGES: [&str; 5] = ["pt", "en", "es", "it", "fr"];

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Clone)]
pub struct VitrineClient {
    http: Client,
    api_base: String,
    storage: Arc<dyn StorageAdapter>,
}

impl std::fmt::Debug for VitrineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VitrineClient")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl VitrineClient {
    /// Client for the server at `base_url` (without the `/api` suffix),
    /// keeping its session in memory.
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| VitrineError::validation(format!("Invalid backend URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VitrineError::validation(
                "Backend URL must use http or https",
            ));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VitrineError::network(e.to_string()))?;

        Ok(Self {
            http,
            api_base: format!("{}/api", url.as_str().trim_end_matches('/')),
            storage: Arc::new(MemoryStorage::new()),
        })
    }

    /// Client for the server named by `VITRINE_BACKEND_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BACKEND_URL_ENV)
            .map_err(|_| VitrineError::validation(format!("{} is not set", BACKEND_URL_ENV)))?;
        Self::new(&base_url)
    }

    pub fn with_storage(mut self, storage: Arc<dyn StorageAdapter>) -> Self {
        self.storage = storage;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    // ============ Session ============

    /// Exchanges credentials for a token and stores the session.
    ///
    /// A rejected login carries the server's `detail`; anything without one
    /// reports "Login failed".
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser> {
        let response = self
            .http
            .post(self.endpoint("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Login request failed: {}", e);
                VitrineError::network(LOGIN_FAILED)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = read_detail(response).await;
            return Err(VitrineError::with_status(
                map_status_to_error_code(status.as_u16()),
                detail.unwrap_or_else(|| LOGIN_FAILED.into()),
                status.as_u16(),
            ));
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            tracing::warn!("Unreadable login response: {}", e);
            VitrineError::new(VitrineErrorCode::ServerError, LOGIN_FAILED)
        })?;

        let user = SessionUser {
            username: username.to_string(),
            is_admin: body.is_admin,
        };
        let encoded = serde_json::to_string(&user)
            .map_err(|e| VitrineError::new(VitrineErrorCode::ServerError, e.to_string()))?;
        self.storage.set(keys::TOKEN, &body.access_token);
        self.storage.set(keys::USER, &encoded);
        Ok(user)
    }

    pub fn logout(&self) {
        self.storage.remove(keys::TOKEN);
        self.storage.remove(keys::USER);
    }

    /// The stored user, when a token is stored alongside it.
    pub fn session(&self) -> Option<SessionUser> {
        self.storage.get(keys::TOKEN)?;
        let raw = self.storage.get(keys::USER)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_admin(&self) -> bool {
        self.session().is_some_and(|u| u.is_admin)
    }

    pub fn route(&self, path: &str) -> RouteDecision {
        session::guard(path, self.session().as_ref())
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = self
            .storage
            .get(keys::TOKEN)
            .ok_or_else(VitrineError::no_session)?;
        Ok(builder.bearer_auth(token))
    }

    // ============ Language ============

    /// Saved preference if supported, else the browser language's first two
    /// letters if supported, else Portuguese.
    pub fn language(&self, browser_lang: Option<&str>) -> String {
        let saved = self.storage.get(keys::LANGUAGE);
        if let Some(lang) = saved.filter(|l| is_supported_language(l)) {
            return lang;
        }

        browser_lang
            .map(|tag| tag.trim().chars().take(2).collect::<String>().to_lowercase())
            .filter(|prefix| is_supported_language(prefix))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    pub fn set_language(&self, code: &str) -> Result<()> {
        if !is_supported_language(code) {
            return Err(VitrineError::validation(format!(
                "Unsupported language: {}",
                code
            )));
        }
        self.storage.set(keys::LANGUAGE, code);
        Ok(())
    }

    // ============ Beacons ============

    async fn beacon(&self, path: &str) {
        match self.http.post(self.endpoint(path)).send().await {
            Ok(r) if r.status().is_success() => {}
            Ok(r) => tracing::warn!("Tracking {} returned {}", path, r.status()),
            Err(e) => tracing::warn!("Tracking {} failed: {}", path, e),
        }
    }

    pub async fn track_page_view(&self) {
        self.beacon("/analytics/page-view").await;
    }

    pub async fn track_video_view(&self) {
        self.beacon("/analytics/video-view").await;
    }

    pub async fn track_button_click(&self) {
        self.beacon("/analytics/button-click").await;
    }

    /// Counts the click and returns where the visitor should go.
    pub async fn buy(&self, button: &BuyButton) -> String {
        self.track_button_click().await;
        button.url.clone()
    }

    // ============ Public reads ============

    /// The public page. The server counts the page view. When the API is
    /// unreachable the built-in product and testimonials are shown with
    /// every section visible.
    pub async fn load_landing(&self) -> LandingView {
        let saved = self
            .storage
            .get(keys::LANGUAGE)
            .filter(|l| is_supported_language(l));

        let mut request = self.http.get(self.endpoint("/landing"));
        if let Some(lang) = &saved {
            request = request.query(&[("lang", lang)]);
        }

        match execute(request).await {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!("Landing fetch failed, using defaults: {}", e);
                fallback::landing(saved.as_deref().unwrap_or(DEFAULT_LANGUAGE))
            }
        }
    }

    pub async fn site_content(&self) -> Result<SiteContent> {
        execute(self.http.get(self.endpoint("/site-content"))).await
    }

    pub async fn vsl_config(&self) -> Result<VslConfig> {
        execute(self.http.get(self.endpoint("/vsl-config"))).await
    }

    pub async fn sections(&self) -> Result<SectionsConfig> {
        execute(self.http.get(self.endpoint("/sections"))).await
    }

    pub async fn ebooks(&self) -> Result<Vec<Ebook>> {
        execute(self.http.get(self.endpoint("/ebooks"))).await
    }

    /// Enabled ebooks only.
    pub async fn products(&self) -> Result<Vec<Ebook>> {
        execute(self.http.get(self.endpoint("/products"))).await
    }

    pub async fn ebook(&self, id: &str) -> Result<Ebook> {
        let path = format!("/ebooks/{}", Self::segment(id));
        execute(self.http.get(self.endpoint(&path))).await
    }

    pub async fn proofs(&self) -> Result<Vec<ProofOfGains>> {
        execute(self.http.get(self.endpoint("/proofs-of-gains"))).await
    }

    pub async fn proof(&self, id: &str) -> Result<ProofOfGains> {
        let path = format!("/proofs-of-gains/{}", Self::segment(id));
        execute(self.http.get(self.endpoint(&path))).await
    }

    pub async fn geo_config(&self) -> Result<GeoConfig> {
        execute(self.http.get(self.endpoint("/geo-config"))).await
    }

    pub async fn recommended_platform(&self, country: &str) -> Result<Recommendation> {
        let path = format!("/recommended-platform/{}", Self::segment(country));
        execute(self.http.get(self.endpoint(&path))).await
    }

    pub async fn detect_country(&self) -> Result<DetectedLocation> {
        execute(self.http.get(self.endpoint("/detect-country"))).await
    }

    pub async fn languages(&self) -> Result<Vec<Language>> {
        execute(self.http.get(self.endpoint("/languages"))).await
    }

    pub async fn translations(
        &self,
        lang: &str,
    ) -> Result<std::collections::BTreeMap<String, String>> {
        let path = format!("/translations/{}", Self::segment(lang));
        execute(self.http.get(self.endpoint(&path))).await
    }

    // ============ Admin ============

    pub async fn me(&self) -> Result<SessionUser> {
        execute(self.authorized(self.http.get(self.endpoint("/me")))?).await
    }

    pub async fn update_site_content(&self, content: &SiteContent) -> Result<SiteContent> {
        let request = self.http.put(self.endpoint("/site-content")).json(content);
        execute(self.authorized(request)?).await
    }

    pub async fn update_vsl_config(&self, config: &VslConfig) -> Result<VslConfig> {
        let request = self.http.put(self.endpoint("/vsl-config")).json(config);
        execute(self.authorized(request)?).await
    }

    pub async fn update_sections(&self, sections: &SectionsConfig) -> Result<SectionsConfig> {
        let request = self.http.put(self.endpoint("/sections")).json(sections);
        execute(self.authorized(request)?).await
    }

    pub async fn create_ebook(&self, input: &EbookInput) -> Result<Ebook> {
        let request = self.http.post(self.endpoint("/ebooks")).json(input);
        execute(self.authorized(request)?).await
    }

    pub async fn update_ebook(&self, id: &str, input: &EbookInput) -> Result<Ebook> {
        let path = format!("/ebooks/{}", Self::segment(id));
        let request = self.http.put(self.endpoint(&path)).json(input);
        execute(self.authorized(request)?).await
    }

    pub async fn create_proof(&self, input: &ProofInput) -> Result<ProofOfGains> {
        let request = self.http.post(self.endpoint("/proofs-of-gains")).json(input);
        execute(self.authorized(request)?).await
    }

    pub async fn update_proof(&self, id: &str, input: &ProofInput) -> Result<ProofOfGains> {
        let path = format!("/proofs-of-gains/{}", Self::segment(id));
        let request = self.http.put(self.endpoint(&path)).json(input);
        execute(self.authorized(request)?).await
    }

    pub async fn delete_proof(&self, id: &str) -> Result<()> {
        let path = format!("/proofs-of-gains/{}", Self::segment(id));
        let request = self.http.delete(self.endpoint(&path));
        let _: serde_json::Value = execute(self.authorized(request)?).await?;
        Ok(())
    }

    pub async fn update_geo_config(&self, config: &GeoConfig) -> Result<GeoConfig> {
        let request = self.http.put(self.endpoint("/geo-config")).json(config);
        execute(self.authorized(request)?).await
    }

    /// Replaces platforms and country mappings with the built-in preset.
    pub async fn apply_geo_preset(&self) -> Result<GeoConfig> {
        let request = self.http.post(self.endpoint("/geo-config/presets"));
        execute(self.authorized(request)?).await
    }

    /// Daily counters, newest first.
    pub async fn analytics(&self) -> Result<Vec<AnalyticsRecord>> {
        execute(self.authorized(self.http.get(self.endpoint("/analytics")))?).await
    }

    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary> {
        let request = self.http.get(self.endpoint("/analytics/summary"));
        execute(self.authorized(request)?).await
    }
}

pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

async fn read_detail(response: Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    body.detail.or(body.error)
}

async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| VitrineError::network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = read_detail(response).await;
        return Err(VitrineError::with_status(
            map_status_to_error_code(status.as_u16()),
            detail.unwrap_or_else(|| format!("Request failed with status {}", status)),
            status.as_u16(),
        ));
    }

    response.json().await.map_err(|e| {
        VitrineError::new(
            VitrineErrorCode::ServerError,
            format!("Unreadable response: {}", e),
        )
    })
}
