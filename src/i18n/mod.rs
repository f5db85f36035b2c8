//! Static string tables for the public page.
//!
//! Every locale is embedded at compile time. Lookups fall back to
//! Portuguese and then to the key itself, so a missing string never
//! breaks rendering.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Serialize;

pub const DEFAULT_LANGUAGE: &str = "pt";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const LANGUAGES: [Language; 5] = [
    Language { code: "pt", name: "Português", flag: "🇧🇷" },
    Language { code: "en", name: "English", flag: "🇺🇸" },
    Language { code: "es", name: "Español", flag: "🇪🇸" },
    Language { code: "it", name: "Italiano", flag: "🇮🇹" },
    Language { code: "fr", name: "Français", flag: "🇫🇷" },
];

type Table = HashMap<String, String>;

static TABLES: LazyLock<HashMap<&'static str, Table>> = LazyLock::new(|| {
    [
        ("pt", include_str!("locales/pt.json")),
        ("en", include_str!("locales/en.json")),
        ("es", include_str!("locales/es.json")),
        ("it", include_str!("locales/it.json")),
        ("fr", include_str!("locales/fr.json")),
    ]
    .into_iter()
    .map(|(code, raw)| (code, parse_table(code, raw)))
    .collect()
});

fn parse_table(code: &str, raw: &str) -> Table {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::error!("Locale table '{}' is malformed: {}", code, e);
        Table::new()
    })
}

pub fn is_supported(lang: &str) -> bool {
    LANGUAGES.iter().any(|l| l.code == lang)
}

/// Looks up `key` in `lang`, then Portuguese, then returns the key.
///
/// Each `{name}` placeholder is replaced once with its value.
pub fn translate(lang: &str, key: &str, params: &[(&str, &str)]) -> String {
    let mut text = lookup(lang, key)
        .or_else(|| lookup(DEFAULT_LANGUAGE, key))
        .unwrap_or(key)
        .to_string();

    for (name, value) in params {
        text = text.replacen(&format!("{{{}}}", name), value, 1);
    }
    text
}

fn lookup(lang: &str, key: &str) -> Option<&'static str> {
    TABLES
        .get(lang)
        .and_then(|t| t.get(key))
        .map(String::as_str)
}

/// Picks the display language: a supported saved preference, otherwise the
/// browser's primary language when supported, otherwise Portuguese.
pub fn negotiate(saved: Option<&str>, accept_language: Option<&str>) -> &'static str {
    if let Some(lang) = saved.and_then(supported_code) {
        return lang;
    }

    accept_language
        .and_then(|header| header.split(',').next())
        .map(|tag| tag.trim().chars().take(2).collect::<String>().to_lowercase())
        .and_then(|prefix| supported_code(&prefix))
        .unwrap_or(DEFAULT_LANGUAGE)
}

fn supported_code(lang: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.code == lang).map(|l| l.code)
}

/// Full table for `lang` with Portuguese filling any gaps.
pub fn translations(lang: &str) -> Option<BTreeMap<String, String>> {
    if !is_supported(lang) {
        return None;
    }

    let mut merged: BTreeMap<String, String> = TABLES
        .get(DEFAULT_LANGUAGE)
        .map(|t| t.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();

    if lang != DEFAULT_LANGUAGE {
        if let Some(table) = TABLES.get(lang) {
            merged.extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    Some(merged)
}
