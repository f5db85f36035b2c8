use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::util::is_http_url;

/// Video sales letter block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VslConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    /// Embed URL (YouTube `/embed/…`, Vimeo `player.vimeo.com/video/…`)
    pub video_url: String,
    pub video_thumbnail: String,
    pub call_to_action: String,
    pub description: String,
}

impl Default for VslConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Assista ao Vídeo e Descubra Como Ganhar Consistentemente".into(),
            subtitle: "Veja como eu transformei apenas R$ 1.000 em mais de R$ 100.000 em apenas 6 meses usando essa estratégia simples e eficaz.".into(),
            video_url: String::new(),
            video_thumbnail: String::new(),
            call_to_action: "Quero Acessar Agora".into(),
            description: String::new(),
        }
    }
}

impl VslConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("video_url", &self.video_url),
            ("video_thumbnail", &self.video_thumbnail),
        ] {
            if !value.is_empty() && !is_http_url(value) {
                return Err(AppError::BadRequest(format!(
                    "{} must be empty or an http(s) URL",
                    field
                )));
            }
        }
        Ok(())
    }
}
