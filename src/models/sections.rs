//! Per-section visibility toggles.
//!
//! A section renders unless its toggle is explicitly `false`; an absent key
//! means visible. Older stored documents lack some keys entirely and must
//! keep rendering those sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Landing page blocks, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Header,
    Hero,
    Vsl,
    Features,
    ProofsOfGains,
    Testimonials,
    Pricing,
    Faq,
    Footer,
}

impl Section {
    /// The dashboard refuses to switch these off. Advisory only: the store
    /// accepts `false` for them like any other key.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Section::Header | Section::Hero | Section::Pricing | Section::Footer
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proofs_of_gains: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<bool>,
    /// Keys this server does not know about, kept so a PUT/GET round trip
    /// never drops dashboard state.
    #[serde(flatten)]
    pub extra: BTreeMap<String, bool>,
}

impl SectionsConfig {
    /// Document written on first boot. `proofs_of_gains` stays unset, as in
    /// documents created before that section existed.
    pub fn initial() -> Self {
        Self {
            header: Some(true),
            hero: Some(true),
            vsl: Some(true),
            features: Some(true),
            proofs_of_gains: None,
            testimonials: Some(true),
            pricing: Some(true),
            faq: Some(true),
            footer: Some(true),
            extra: BTreeMap::new(),
        }
    }

    pub fn get(&self, section: Section) -> Option<bool> {
        match section {
            Section::Header => self.header,
            Section::Hero => self.hero,
            Section::Vsl => self.vsl,
            Section::Features => self.features,
            Section::ProofsOfGains => self.proofs_of_gains,
            Section::Testimonials => self.testimonials,
            Section::Pricing => self.pricing,
            Section::Faq => self.faq,
            Section::Footer => self.footer,
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        is_visible(self.get(section))
    }

    /// Visibility for a raw key, including keys outside [`Section`].
    pub fn is_key_visible(&self, key: &str) -> bool {
        match key.parse::<Section>() {
            Ok(section) => self.is_visible(section),
            Err(_) => is_visible(self.extra.get(key).copied()),
        }
    }

    /// Every known section plus any extra dashboard key, with its
    /// resolved visibility.
    pub fn resolved(&self) -> BTreeMap<String, bool> {
        let mut resolved: BTreeMap<String, bool> = Section::iter()
            .map(|s| (section_key(s).to_string(), self.is_visible(s)))
            .collect();
        for key in self.extra.keys() {
            resolved.insert(key.clone(), self.is_key_visible(key));
        }
        resolved
    }
}

/// Visible unless explicitly `false`.
pub fn is_visible(toggle: Option<bool>) -> bool {
    toggle != Some(false)
}

fn section_key(section: Section) -> &'static str {
    match section {
        Section::Header => "header",
        Section::Hero => "hero",
        Section::Vsl => "vsl",
        Section::Features => "features",
        Section::ProofsOfGains => "proofs_of_gains",
        Section::Testimonials => "testimonials",
        Section::Pricing => "pricing",
        Section::Faq => "faq",
        Section::Footer => "footer",
    }
}

/// Catalog row for the dashboard's section controls.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStatus {
    pub key: &'static str,
    pub required: bool,
    pub visible: bool,
}

pub fn catalog(config: &SectionsConfig) -> Vec<SectionStatus> {
    Section::iter()
        .map(|s| SectionStatus {
            key: section_key(s),
            required: s.is_required(),
            visible: config.is_visible(s),
        })
        .collect()
}
