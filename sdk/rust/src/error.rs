//! Error types for the Vitrine SDK

use thiserror::Error;

/// Error codes for Vitrine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitrineErrorCode {
    /// No admin session stored
    NoSession,
    /// Credentials rejected or token no longer valid
    Unauthorized,
    /// Session is valid but not an admin
    Forbidden,
    /// Resource does not exist
    NotFound,
    /// Invalid request parameters
    ValidationError,
    /// Network request failed
    NetworkError,
    /// Server failed to handle the request
    ServerError,
}

impl std::fmt::Display for VitrineErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSession => write!(f, "NO_SESSION"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::ValidationError => write!(f, "VALIDATION_ERROR"),
            Self::NetworkError => write!(f, "NETWORK_ERROR"),
            Self::ServerError => write!(f, "SERVER_ERROR"),
        }
    }
}

/// Vitrine SDK error
#[derive(Debug, Error)]
#[error("{message} (code: {code})")]
pub struct VitrineError {
    pub code: VitrineErrorCode,
    /// Human-readable message; for API errors this is the server's `detail`
    pub message: String,
    /// HTTP status code (for API errors)
    pub status_code: Option<u16>,
}

impl VitrineError {
    pub fn new(code: VitrineErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(code: VitrineErrorCode, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(VitrineErrorCode::ValidationError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(VitrineErrorCode::NetworkError, message)
    }

    pub fn no_session() -> Self {
        Self::new(VitrineErrorCode::NoSession, "Not logged in")
    }
}

/// Result type for Vitrine operations
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Map HTTP status code to error code
pub(crate) fn map_status_to_error_code(status: u16) -> VitrineErrorCode {
    match status {
        401 => VitrineErrorCode::Unauthorized,
        403 => VitrineErrorCode::Forbidden,
        404 => VitrineErrorCode::NotFound,
        400 | 413 | 422 => VitrineErrorCode::ValidationError,
        500..=599 => VitrineErrorCode::ServerError,
        _ => VitrineErrorCode::NetworkError,
    }
}
