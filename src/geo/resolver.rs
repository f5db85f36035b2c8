use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{CountryMapping, GeoConfig};

/// Platform to send a visitor to, with alternatives in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub country_code: String,
    pub platform: String,
    pub backup_platforms: Vec<String>,
}

/// Country → platform lookup over a [`GeoConfig`].
///
/// Mappings are indexed by normalized country code. When a config carries
/// several mappings for one country, the later entry wins.
pub struct GeoResolver<'a> {
    enabled: bool,
    default_platform: &'a str,
    mappings: HashMap<String, &'a CountryMapping>,
}

impl<'a> GeoResolver<'a> {
    pub fn new(config: &'a GeoConfig) -> Self {
        let mut mappings = HashMap::with_capacity(config.geo_platform_mappings.len());
        for mapping in &config.geo_platform_mappings {
            mappings.insert(normalize(&mapping.country_code), mapping);
        }
        Self {
            enabled: config.geo_targeting_enabled,
            default_platform: &config.default_platform,
            mappings,
        }
    }

    /// Unknown, disabled and unmapped countries all fall back to the default
    /// platform with no backups; this never fails.
    pub fn recommend(&self, country: &str) -> Recommendation {
        let country_code = normalize(country);

        if self.enabled {
            if let Some(mapping) = self.mappings.get(&country_code).filter(|m| m.enabled) {
                return Recommendation {
                    country_code,
                    platform: mapping.primary_platform.clone(),
                    backup_platforms: mapping.backup_platforms.clone(),
                };
            }
        }

        Recommendation {
            country_code,
            platform: self.default_platform.to_string(),
            backup_platforms: Vec::new(),
        }
    }

    /// Display name for a country, when a mapping names it.
    pub fn country_name(&self, country: &str) -> Option<&'a str> {
        self.mappings
            .get(&normalize(country))
            .map(|m| m.country_name.as_str())
            .filter(|name| !name.is_empty())
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
