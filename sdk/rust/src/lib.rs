//! Client for the Vitrine landing page and dashboard API.
//!
//! ```no_run
//! use vitrine_sdk::{RouteDecision, VitrineClient};
//!
//! # async fn run() -> vitrine_sdk::Result<()> {
//! let client = VitrineClient::from_env()?;
//!
//! let page = client.load_landing().await;
//! if let Some(button) = page.product.buy_buttons.iter().find(|b| b.enabled) {
//!     let destination = client.buy(button).await;
//!     println!("redirect to {destination}");
//! }
//!
//! client.login("admin", "secret").await?;
//! assert_eq!(client.route("/admin"), RouteDecision::Allow);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
pub mod fallback;
pub mod session;
pub mod storage;
pub mod types;

pub use client::{
    BACKEND_URL_ENV, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, VitrineClient, is_supported_language,
};
pub use error::{Result, VitrineError, VitrineErrorCode};
pub use session::RouteDecision;
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use types::*;
