use serde::{Deserialize, Serialize};

/// Custom claims carried by an admin access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub username: String,
    pub is_admin: bool,
}
