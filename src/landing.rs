//! Everything the public page renders, resolved in one read.

use std::collections::BTreeMap;

use rusqlite::Connection;
use serde::Serialize;

use crate::db::queries;
use crate::error::Result;
use crate::models::{Ebook, ProofOfGains, SiteContent, Testimonial, VslConfig};

/// Proof cards shown on the page; the rest stay in the dashboard.
pub const LANDING_PROOF_LIMIT: i64 = 6;

#[derive(Debug, Serialize)]
pub struct LandingView {
    pub language: &'static str,
    pub sections: BTreeMap<String, bool>,
    pub content: SiteContent,
    pub product: Ebook,
    /// True when no enabled ebook exists and the built-in one is shown.
    pub is_fallback_product: bool,
    pub testimonials: Vec<Testimonial>,
    pub vsl: VslConfig,
    pub proofs: Vec<ProofOfGains>,
}

pub fn build(conn: &Connection, language: &'static str) -> Result<LandingView> {
    let sections = queries::get_sections(conn)?.resolved();
    let content = queries::get_site_content(conn)?;
    let vsl = queries::get_vsl_config(conn)?;
    let proofs = queries::list_enabled_proofs(conn, LANDING_PROOF_LIMIT)?;

    let (product, is_fallback_product) = match queries::list_enabled_ebooks(conn)?.into_iter().next()
    {
        Some(ebook) => (ebook, false),
        None => (Ebook::fallback(), true),
    };

    let testimonials = if content.testimonials.is_empty() {
        Testimonial::defaults()
    } else {
        content.testimonials.clone()
    };

    Ok(LandingView {
        language,
        sections,
        content,
        product,
        is_fallback_product,
        testimonials,
        vsl,
        proofs,
    })
}
