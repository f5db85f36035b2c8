use std::collections::BTreeMap;

use crate::error::{AppError, Result};
use crate::extractors::{Json, Path};
use crate::i18n::{self, LANGUAGES, Language};

pub async fn list_languages() -> Json<Vec<Language>> {
    Json(LANGUAGES.to_vec())
}

pub async fn get_translations(Path(lang): Path<String>) -> Result<Json<BTreeMap<String, String>>> {
    let lang = lang.to_lowercase();
    i18n::translations(&lang)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unsupported language: {}", lang)))
}
