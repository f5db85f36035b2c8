use std::env;

const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub dev_mode: bool,
    /// HS256 signing secret for admin tokens (None = random per-process key)
    pub jwt_secret: Option<String>,
    pub access_token_ttl_minutes: u64,
    pub bootstrap_admin_username: Option<String>,
    pub bootstrap_admin_password: Option<String>,
    /// IP geolocation endpoint, called as `{url}/{ip}` (None = headers only)
    pub geoip_lookup_url: Option<String>,
    /// Country assumed when neither headers nor the lookup service know better
    pub default_country: String,
    /// Request body limit; proof images arrive base64-encoded
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let dev_mode = env::var("VITRINE_ENV")
            .map(|v| v == "dev" || v == "development")
            .unwrap_or(false);

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8001);

        let access_token_ttl_minutes: u64 = env::var("ACCESS_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(24 * 60);

        let max_body_bytes: usize = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let default_country = env::var("DEFAULT_COUNTRY")
            .ok()
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "BR".to_string());

        Self {
            host,
            port,
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "vitrine.db".to_string()),
            dev_mode,
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            access_token_ttl_minutes,
            bootstrap_admin_username: env::var("BOOTSTRAP_ADMIN_USERNAME").ok(),
            bootstrap_admin_password: env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
            geoip_lookup_url: env::var("GEOIP_LOOKUP_URL").ok().filter(|s| !s.is_empty()),
            default_country,
            max_body_bytes,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    /// In-process defaults (no env lookup), used by tests and tooling.
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8001,
            database_path: "vitrine.db".to_string(),
            dev_mode: false,
            jwt_secret: None,
            access_token_ttl_minutes: 24 * 60,
            bootstrap_admin_username: None,
            bootstrap_admin_password: None,
            geoip_lookup_url: None,
            default_country: "BR".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
