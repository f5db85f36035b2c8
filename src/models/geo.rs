use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub platform_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub supported_countries: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    /// Affiliate commission, in percent
    #[serde(default)]
    pub commission_rate: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMapping {
    /// ISO 3166-1 alpha-2, stored uppercase
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    pub primary_platform: String,
    #[serde(default)]
    pub backup_platforms: Vec<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_platform() -> String {
    "hotmart".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    #[serde(default = "default_true")]
    pub geo_targeting_enabled: bool,
    #[serde(default = "default_platform")]
    pub default_platform: String,
    #[serde(default)]
    pub platform_configs: Vec<PlatformConfig>,
    #[serde(default)]
    pub geo_platform_mappings: Vec<CountryMapping>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            geo_targeting_enabled: true,
            default_platform: default_platform(),
            platform_configs: Vec::new(),
            geo_platform_mappings: Vec::new(),
        }
    }
}

/// Trim and uppercase a country code; `None` unless it is two ASCII letters.
pub fn normalize_country_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    (code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())).then_some(code)
}

impl GeoConfig {
    /// Canonical form for storage: codes normalized, platform names trimmed,
    /// one mapping per country with the last occurrence winning.
    pub fn normalized(mut self) -> Result<Self> {
        self.default_platform = self.default_platform.trim().to_string();
        if self.default_platform.is_empty() {
            return Err(AppError::BadRequest("default_platform is required".into()));
        }

        let mut mappings = Vec::with_capacity(self.geo_platform_mappings.len());
        let mut last_seen: HashMap<String, usize> = HashMap::new();
        for (index, mut mapping) in self.geo_platform_mappings.into_iter().enumerate() {
            let code = normalize_country_code(&mapping.country_code).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "geo_platform_mappings[{}].country_code must be a 2-letter country code",
                    index
                ))
            })?;
            mapping.primary_platform = mapping.primary_platform.trim().to_string();
            if mapping.primary_platform.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "geo_platform_mappings[{}].primary_platform is required",
                    index
                )));
            }
            last_seen.insert(code.clone(), index);
            mapping.country_code = code;
            mappings.push(mapping);
        }
        // Each country keeps the position of its last occurrence
        self.geo_platform_mappings = mappings
            .into_iter()
            .enumerate()
            .filter(|(index, m)| last_seen.get(&m.country_code) == Some(index))
            .map(|(_, m)| m)
            .collect();

        for platform in &mut self.platform_configs {
            platform.supported_countries = platform
                .supported_countries
                .iter()
                .filter_map(|c| normalize_country_code(c))
                .collect();
        }

        Ok(self)
    }

    /// Built-in platforms and country mappings offered by the dashboard's
    /// "load defaults" action.
    pub fn preset(&self) -> Self {
        let platform = |name: &str, display: &str, countries: &[&str], methods: &[&str], rate: f64| {
            PlatformConfig {
                platform_name: name.into(),
                display_name: display.into(),
                supported_countries: countries.iter().map(|c| c.to_string()).collect(),
                payment_methods: methods.iter().map(|m| m.to_string()).collect(),
                commission_rate: rate,
                enabled: true,
            }
        };
        let mapping = |code: &str, name: &str, primary: &str, backup: &str| CountryMapping {
            country_code: code.into(),
            country_name: name.into(),
            primary_platform: primary.into(),
            backup_platforms: vec![backup.into()],
            enabled: true,
        };

        Self {
            geo_targeting_enabled: self.geo_targeting_enabled,
            default_platform: self.default_platform.clone(),
            platform_configs: vec![
                platform(
                    "hotmart",
                    "Hotmart",
                    &["BR", "PT", "MX", "AR", "CL", "CO", "PE"],
                    &["Pix", "Cartão", "Boleto"],
                    70.0,
                ),
                platform(
                    "clickbank",
                    "ClickBank",
                    &["US", "CA", "GB", "AU", "NZ", "DE", "FR", "IT", "ES"],
                    &["PayPal", "Credit Card"],
                    75.0,
                ),
                platform("monetizze", "Monetizze", &["BR"], &["Pix", "Cartão", "Boleto"], 60.0),
            ],
            geo_platform_mappings: vec![
                mapping("BR", "Brasil", "hotmart", "monetizze"),
                mapping("US", "Estados Unidos", "clickbank", "hotmart"),
                mapping("CA", "Canadá", "clickbank", "hotmart"),
                mapping("GB", "Reino Unido", "clickbank", "hotmart"),
                mapping("AU", "Austrália", "clickbank", "hotmart"),
                mapping("DE", "Alemanha", "clickbank", "hotmart"),
                mapping("FR", "França", "clickbank", "hotmart"),
                mapping("IT", "Itália", "clickbank", "hotmart"),
                mapping("ES", "Espanha", "clickbank", "hotmart"),
                mapping("PT", "Portugal", "hotmart", "clickbank"),
                mapping("MX", "México", "hotmart", "clickbank"),
                mapping("AR", "Argentina", "hotmart", "clickbank"),
            ],
        }
    }
}
