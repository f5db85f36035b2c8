use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, EnumString};

use crate::error::{AppError, Result};
use crate::util::is_http_url;

/// Checkout platforms the dashboard offers by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    Hotmart,
    Monetizze,
    Eduzz,
    Kiwify,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyButton {
    /// Stored exactly as the dashboard sent it ("Hotmart", "Outro", ...).
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl BuyButton {
    /// The named platform behind `platform`, if it is one of the known ones.
    pub fn known_platform(&self) -> Option<Platform> {
        self.platform.trim().parse().ok()
    }
}

fn default_true() -> bool {
    true
}

/// The sellable item. `buy_buttons` order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ebook {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub features: Vec<String>,
    pub bonuses: Vec<String>,
    pub buy_buttons: Vec<BuyButton>,
    pub enabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Ebook {
    /// Buy buttons the visitor can actually click, in display order.
    pub fn active_buttons(&self) -> impl Iterator<Item = &BuyButton> {
        self.buy_buttons.iter().filter(|b| b.enabled)
    }

    /// Built-in product shown when nothing is configured or the store is unreachable.
    pub fn fallback() -> Self {
        Self {
            id: "default".into(),
            title: "Codigo R - Trading Setup Completo".into(),
            subtitle: "O método completo para dominar o trading".into(),
            description: "O método completo para dominar o trading de criptomoedas".into(),
            price: 197.0,
            original_price: Some(497.0),
            features: vec![
                "Ebook Completo (150+ páginas)".into(),
                "Setup de Trading Passo a Passo".into(),
                "Estratégias de Gestão de Risco".into(),
            ],
            bonuses: vec![
                "Planilha de Controle de Trades".into(),
                "Acesso ao Grupo VIP no Telegram".into(),
            ],
            buy_buttons: vec![
                BuyButton {
                    platform: Platform::Hotmart.as_ref().into(),
                    url: "https://hotmart.com/seu-produto".into(),
                    color: "bg-orange-500 hover:bg-orange-600".into(),
                    enabled: true,
                },
                BuyButton {
                    platform: Platform::Monetizze.as_ref().into(),
                    url: "https://monetizze.com.br/seu-produto".into(),
                    color: "bg-blue-500 hover:bg-blue-600".into(),
                    enabled: true,
                },
            ],
            enabled: true,
            created_at: 0,
            updated_at: 0,
        }
    }
}

/// Legacy `/products` shape: the ebook plus a `name` mirror of its title.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub ebook: Ebook,
    pub name: String,
}

impl From<Ebook> for ProductView {
    fn from(ebook: Ebook) -> Self {
        let name = ebook.title.clone();
        Self { ebook, name }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEbook {
    #[serde(alias = "name")]
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

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEbook {
    #[serde(alias = "name")]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub original_price: Option<Option<f64>>,
    pub features: Option<Vec<String>>,
    pub bonuses: Option<Vec<String>>,
    pub buy_buttons: Option<Vec<BuyButton>>,
    pub enabled: Option<bool>,
}

/// Distinguishes an explicit `null` (clear) from an absent field (keep).
fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_price(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

fn validate_buttons(buttons: &[BuyButton]) -> Result<()> {
    for (index, button) in buttons.iter().enumerate() {
        if !is_http_url(&button.url) {
            return Err(AppError::BadRequest(format!(
                "buy_buttons[{}].url must be an http(s) URL",
                index
            )));
        }
    }
    Ok(())
}

impl CreateEbook {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".into()));
        }
        validate_price("price", self.price)?;
        if let Some(original) = self.original_price {
            validate_price("original_price", original)?;
        }
        validate_buttons(&self.buy_buttons)
    }
}

impl UpdateEbook {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("title cannot be empty".into()));
            }
        }
        if let Some(price) = self.price {
            validate_price("price", price)?;
        }
        if let Some(Some(original)) = self.original_price {
            validate_price("original_price", original)?;
        }
        if let Some(buttons) = &self.buy_buttons {
            validate_buttons(buttons)?;
        }
        Ok(())
    }
}
