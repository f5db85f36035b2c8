//! Visitor country detection.
//!
//! Order: CDN/edge country headers, then the optional IP lookup service,
//! then the configured default country. Lookup failures are logged and
//! never surface to the visitor.

use std::net::IpAddr;
use std::time::Duration;

use axum::http::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::normalize_country_code;
use crate::util::extract_client_ip;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Headers set by common edges (Cloudflare, Vercel, custom proxies).
const COUNTRY_HEADERS: [&str; 3] = ["cf-ipcountry", "x-vercel-ip-country", "x-country-code"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedLocation {
    pub ip: String,
    pub country_code: String,
    pub country_name: String,
    pub region: String,
    pub city: String,
}

/// Response of the IP lookup service (ipapi.co and ip-api.com field names).
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default, alias = "countryCode")]
    country_code: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default, alias = "regionName")]
    region: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

/// Lookup service endpoint and the client that calls it.
#[derive(Clone)]
struct LookupService {
    client: Client,
    base_url: String,
}

#[derive(Clone)]
pub struct CountryLocator {
    lookup: Option<LookupService>,
    default_country: String,
}

impl CountryLocator {
    /// A lookup service whose HTTP client cannot be built is disabled with
    /// an error log; detection then relies on headers and the default.
    pub fn new(lookup_url: Option<String>, default_country: impl Into<String>) -> Self {
        let lookup = lookup_url.and_then(|url| {
            match Client::builder().timeout(LOOKUP_TIMEOUT).build() {
                Ok(client) => Some(LookupService {
                    client,
                    base_url: url.trim_end_matches('/').to_string(),
                }),
                Err(e) => {
                    tracing::error!("Geo lookup disabled, HTTP client failed to start: {}", e);
                    None
                }
            }
        });
        Self {
            lookup,
            default_country: default_country.into(),
        }
    }

    pub fn has_lookup_service(&self) -> bool {
        self.lookup.is_some()
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    pub async fn locate(&self, headers: &HeaderMap) -> DetectedLocation {
        let ip = extract_client_ip(headers).unwrap_or_default();

        if let Some(code) = country_from_headers(headers) {
            return DetectedLocation {
                ip,
                country_code: code,
                ..Default::default()
            };
        }

        if let Some(found) = self.lookup(&ip).await {
            return DetectedLocation { ip, ..found };
        }

        DetectedLocation {
            ip,
            country_code: self.default_country.clone(),
            ..Default::default()
        }
    }

    async fn lookup(&self, ip: &str) -> Option<DetectedLocation> {
        let service = self.lookup.as_ref()?;
        if !is_public_ip(ip) {
            return None;
        }

        let url = format!("{}/{}", service.base_url, ip);
        let response = match service.client.get(&url).send().await {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                tracing::warn!("Geo lookup for {} returned {}", ip, r.status());
                return None;
            }
            Err(e) => {
                tracing::warn!("Geo lookup for {} failed: {}", ip, e);
                return None;
            }
        };

        let body: LookupResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("Geo lookup for {} returned unreadable body: {}", ip, e);
                return None;
            }
        };

        let country_code = body.country_code.as_deref().and_then(normalize_country_code)?;
        Some(DetectedLocation {
            ip: ip.to_string(),
            country_code,
            country_name: body.country_name.unwrap_or_default(),
            region: body.region.unwrap_or_default(),
            city: body.city.unwrap_or_default(),
        })
    }
}

fn country_from_headers(headers: &HeaderMap) -> Option<String> {
    COUNTRY_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|v| v.to_str().ok())
        .filter_map(normalize_country_code)
        // Cloudflare reports XX for unknown and T1 for Tor
        .find(|code| code != "XX")
}

fn is_public_ip(ip: &str) -> bool {
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => {
            !(v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_unspecified())
        }
        Ok(IpAddr::V6(v6)) => !(v6.is_loopback() || v6.is_unspecified()),
        Err(_) => false,
    }
}
