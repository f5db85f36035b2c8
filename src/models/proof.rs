use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Image + caption card used as social proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofOfGains {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form amount as displayed, e.g. "R$ 12.450,00"
    pub amount: String,
    /// Free-form date as displayed
    pub date: String,
    /// Base64 image, optionally with a `data:image/...;base64,` prefix
    pub image_base64: String,
    pub image_alt: String,
    pub show_amount: bool,
    pub enabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProof {
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

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProof {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub image_base64: Option<String>,
    pub image_alt: Option<String>,
    pub show_amount: Option<bool>,
    pub enabled: Option<bool>,
}

/// Check that an image payload decodes. Empty means "no image".
pub fn validate_image(image: &str) -> Result<()> {
    if image.is_empty() {
        return Ok(());
    }
    let payload = match image.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest
                .split_once(',')
                .ok_or_else(|| AppError::BadRequest("Malformed image data URL".into()))?;
            if !meta.starts_with("image/") || !meta.ends_with(";base64") {
                return Err(AppError::BadRequest(
                    "Image data URL must be a base64 image".into(),
                ));
            }
            data
        }
        None => image,
    };
    STANDARD
        .decode(payload.trim())
        .map_err(|_| AppError::BadRequest("image_base64 is not valid base64".into()))?;
    Ok(())
}

impl CreateProof {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".into()));
        }
        validate_image(&self.image_base64)
    }
}

impl UpdateProof {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("title cannot be empty".into()));
            }
        }
        match &self.image_base64 {
            Some(image) => validate_image(image),
            None => Ok(()),
        }
    }
}
