use axum::{extract::State, response::Redirect};

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::extractors::Path;
use crate::models::{AnalyticsEvent, Ebook};

/// Count the click, then send the visitor to the checkout page.
///
/// `index` addresses the ebook's enabled buttons in display order. A failed
/// counter update is logged and the redirect still happens.
pub async fn buy_redirect(
    State(state): State<AppState>,
    Path((ebook_id, index)): Path<(String, usize)>,
) -> Result<Redirect> {
    let conn = state.db.get()?;

    let ebook = match queries::get_ebook_by_id(&conn, &ebook_id)? {
        Some(ebook) if ebook.enabled => ebook,
        Some(_) => return Err(AppError::NotFound("Ebook not found".into())),
        None if ebook_id == Ebook::fallback().id => Ebook::fallback(),
        None => return Err(AppError::NotFound("Ebook not found".into())),
    };

    let button = ebook
        .active_buttons()
        .nth(index)
        .ok_or_else(|| AppError::NotFound("Buy button not found".into()))?;

    if let Err(e) = queries::increment_counter(&conn, AnalyticsEvent::ButtonClicks) {
        tracing::warn!("Failed to count buy click for {}: {}", ebook.id, e);
    }

    match button.known_platform() {
        Some(platform) => tracing::info!(
            "Buy redirect: ebook {} via {} -> {}",
            ebook.id,
            platform.as_ref(),
            button.url
        ),
        None => tracing::info!(
            "Buy redirect: ebook {} via other platform '{}' -> {}",
            ebook.id,
            button.platform,
            button.url
        ),
    }
    Ok(Redirect::temporary(&button.url))
}
