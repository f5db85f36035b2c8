//! Wire types of the Vitrine API.
//!
//! Mirrors of the server's JSON documents. Most fields carry serde defaults
//! so older or partial documents still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub site_title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub vsl_title: String,
    pub features_title: String,
    pub features_subtitle: String,
    pub pricing_title: String,
    pub pricing_subtitle: String,
    pub proofs_title: String,
    pub proofs_subtitle: String,
    pub testimonials: Vec<Testimonial>,
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyButton {
    /// Platform name as entered in the dashboard ("Hotmart", "Outro", ...)
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ebook {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub bonuses: Vec<String>,
    #[serde(default)]
    pub buy_buttons: Vec<BuyButton>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Body for creating or replacing an ebook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EbookInput {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub features: Vec<String>,
    pub bonuses: Vec<String>,
    pub buy_buttons: Vec<BuyButton>,
    pub enabled: bool,
}

impl From<Ebook> for EbookInput {
    fn from(ebook: Ebook) -> Self {
        Self {
            title: ebook.title,
            subtitle: ebook.subtitle,
            description: ebook.description,
            price: ebook.price,
            original_price: ebook.original_price,
            features: ebook.features,
            bonuses: ebook.bonuses,
            buy_buttons: ebook.buy_buttons,
            enabled: ebook.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VslConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub video_url: String,
    pub video_thumbnail: String,
    pub call_to_action: String,
    pub description: String,
}

/// Section key → toggle. A key that is absent is visible.
pub type SectionsConfig = BTreeMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub platform_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub supported_countries: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub commission_rate: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMapping {
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    pub primary_platform: String,
    #[serde(default)]
    pub backup_platforms: Vec<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub geo_targeting_enabled: bool,
    pub default_platform: String,
    pub platform_configs: Vec<PlatformConfig>,
    pub geo_platform_mappings: Vec<CountryMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub country_code: String,
    pub platform: String,
    pub backup_platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedLocation {
    pub ip: String,
    pub country_code: String,
    pub country_name: String,
    pub region: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofOfGains {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image_base64: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default = "default_true")]
    pub show_amount: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Body for creating a proof card, or the fields to change on update.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProofInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_amount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub date: String,
    pub page_views: i64,
    pub video_views: i64,
    pub button_clicks: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub days: i64,
    pub page_views: i64,
    pub video_views: i64,
    pub button_clicks: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
    pub is_admin: bool,
}

/// The logged-in user, as kept in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub flag: String,
}

/// Everything the public page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingView {
    pub language: String,
    pub sections: BTreeMap<String, bool>,
    pub content: SiteContent,
    pub product: Ebook,
    #[serde(default)]
    pub is_fallback_product: bool,
    pub testimonials: Vec<Testimonial>,
    pub vsl: VslConfig,
    #[serde(default)]
    pub proofs: Vec<ProofOfGains>,
}

impl LandingView {
    /// Visible unless explicitly `false`.
    pub fn is_visible(&self, section: &str) -> bool {
        self.sections.get(section) != Some(&false)
    }
}
