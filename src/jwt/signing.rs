use std::sync::Arc;

use jwt_simple::prelude::*;
use thiserror::Error;

use super::AdminClaims;

const ISSUER: &str = "vitrine";

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("invalid or expired token")]
    Invalid,
}

/// Issues and verifies HS256 admin access tokens.
#[derive(Clone)]
pub struct TokenSigner {
    key: Arc<HS256Key>,
    ttl_minutes: u64,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl_minutes: u64) -> Self {
        Self {
            key: Arc::new(HS256Key::from_bytes(secret)),
            ttl_minutes,
        }
    }

    /// Random key; tokens do not survive a restart.
    pub fn ephemeral(ttl_minutes: u64) -> Self {
        Self {
            key: Arc::new(HS256Key::generate()),
            ttl_minutes,
        }
    }

    pub fn issue(&self, username: &str, is_admin: bool) -> Result<String, TokenError> {
        let claims = Claims::with_custom_claims(
            AdminClaims {
                username: username.to_string(),
                is_admin,
            },
            Duration::from_mins(self.ttl_minutes),
        )
        .with_issuer(ISSUER)
        .with_subject(username);

        self.key
            .authenticate(claims)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let options = VerificationOptions {
            allowed_issuers: Some(HashSet::from_strings(&[ISSUER])),
            ..Default::default()
        };
        self.key
            .verify_token::<AdminClaims>(token, Some(options))
            .map(|claims| claims.custom)
            .map_err(|_| TokenError::Invalid)
    }
}
