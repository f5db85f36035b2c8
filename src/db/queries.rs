use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params, types::Value};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::util::today;

use super::from_row::{
    ADMIN_COLS, ANALYTICS_COLS, EBOOK_COLS, PROOF_COLS, query_all, query_one,
};
use super::keys;

fn now() -> i64 {
    Utc::now().timestamp()
}

fn gen_id() -> String {
    Uuid::new_v4().to_string()
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Builder for dynamic UPDATE statements with optional fields.
/// Combines multiple field updates into a single query.
struct UpdateBuilder {
    table: &'static str,
    id: String,
    fields: Vec<(&'static str, Value)>,
}

impl UpdateBuilder {
    fn new(table: &'static str, id: &str) -> Self {
        Self {
            table,
            id: id.to_string(),
            fields: Vec::new(),
        }
    }

    fn set(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    fn set_opt<V: Into<Value>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Set a column to an explicit value (including NULL).
    /// Use this for Option<T> where Some(v) = set to v, None = set to NULL.
    fn set_nullable<V: Into<Value>>(mut self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.fields.push((column, v.into())),
            None => self.fields.push((column, Value::Null)),
        }
        self
    }

    /// Set a JSON text column when a value is present.
    fn set_json<T: Serialize>(self, column: &'static str, value: Option<&T>) -> Result<Self> {
        match value {
            Some(v) => Ok(self.set(column, to_json(v)?)),
            None => Ok(self),
        }
    }

    /// Runs the update, stamping `updated_at`. Returns whether a row matched.
    fn execute(mut self, conn: &Connection) -> Result<bool> {
        self.fields.push(("updated_at", now().into()));
        let sets: Vec<String> = self
            .fields
            .iter()
            .map(|(col, _)| format!("{} = ?", col))
            .collect();
        let mut values: Vec<Value> = self.fields.into_iter().map(|(_, v)| v).collect();
        values.push(self.id.into());
        let sql = format!("UPDATE {} SET {} WHERE id = ?", self.table, sets.join(", "));
        let affected = conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(affected > 0)
    }
}

// ============ Settings (singleton documents) ============

pub fn get_setting<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Replace a singleton document. Last write wins.
pub fn put_setting<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, to_json(value)?, now()],
    )?;
    Ok(())
}

/// Returns true when the document was written.
pub fn insert_setting_if_absent<T: Serialize>(
    conn: &Connection,
    key: &str,
    value: &T,
) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO NOTHING",
        params![key, to_json(value)?, now()],
    )?;
    Ok(inserted > 0)
}

pub fn get_site_content(conn: &Connection) -> Result<SiteContent> {
    Ok(get_setting(conn, keys::SITE_CONTENT)?.unwrap_or_default())
}

pub fn put_site_content(conn: &Connection, content: &SiteContent) -> Result<()> {
    put_setting(conn, keys::SITE_CONTENT, content)
}

pub fn get_vsl_config(conn: &Connection) -> Result<VslConfig> {
    Ok(get_setting(conn, keys::VSL)?.unwrap_or_default())
}

pub fn put_vsl_config(conn: &Connection, config: &VslConfig) -> Result<()> {
    put_setting(conn, keys::VSL, config)
}

/// Missing document reads as all-unset, which resolves to every section visible.
pub fn get_sections(conn: &Connection) -> Result<SectionsConfig> {
    Ok(get_setting(conn, keys::SECTIONS)?.unwrap_or_default())
}

pub fn put_sections(conn: &Connection, sections: &SectionsConfig) -> Result<()> {
    put_setting(conn, keys::SECTIONS, sections)
}

pub fn get_geo_config(conn: &Connection) -> Result<GeoConfig> {
    Ok(get_setting(conn, keys::GEO)?.unwrap_or_default())
}

pub fn put_geo_config(conn: &Connection, config: &GeoConfig) -> Result<()> {
    put_setting(conn, keys::GEO, config)
}

// ============ Ebooks ============

pub fn create_ebook(conn: &Connection, input: &CreateEbook) -> Result<Ebook> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO ebooks (id, title, subtitle, description, price, original_price, features, bonuses, buy_buttons, enabled, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            &id,
            &input.title,
            &input.subtitle,
            &input.description,
            input.price,
            input.original_price,
            to_json(&input.features)?,
            to_json(&input.bonuses)?,
            to_json(&input.buy_buttons)?,
            input.enabled,
            now,
            now
        ],
    )?;

    Ok(Ebook {
        id,
        title: input.title.clone(),
        subtitle: input.subtitle.clone(),
        description: input.description.clone(),
        price: input.price,
        original_price: input.original_price,
        features: input.features.clone(),
        bonuses: input.bonuses.clone(),
        buy_buttons: input.buy_buttons.clone(),
        enabled: input.enabled,
        created_at: now,
        updated_at: now,
    })
}

pub fn get_ebook_by_id(conn: &Connection, id: &str) -> Result<Option<Ebook>> {
    query_one(
        conn,
        &format!("SELECT {} FROM ebooks WHERE id = ?1", EBOOK_COLS),
        &[&id],
    )
}

/// Oldest first, so the first enabled ebook is the landing page's product.
pub fn list_ebooks(conn: &Connection) -> Result<Vec<Ebook>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM ebooks ORDER BY created_at ASC, rowid ASC",
            EBOOK_COLS
        ),
        &[],
    )
}

pub fn list_enabled_ebooks(conn: &Connection) -> Result<Vec<Ebook>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM ebooks WHERE enabled = 1 ORDER BY created_at ASC, rowid ASC",
            EBOOK_COLS
        ),
        &[],
    )
}

pub fn count_ebooks(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM ebooks", [], |row| row.get(0))?;
    Ok(count)
}

pub fn update_ebook(conn: &Connection, id: &str, input: &UpdateEbook) -> Result<bool> {
    let mut builder = UpdateBuilder::new("ebooks", id)
        .set_opt("title", input.title.clone())
        .set_opt("subtitle", input.subtitle.clone())
        .set_opt("description", input.description.clone())
        .set_opt("price", input.price)
        .set_opt("enabled", input.enabled)
        .set_json("features", input.features.as_ref())?
        .set_json("bonuses", input.bonuses.as_ref())?
        .set_json("buy_buttons", input.buy_buttons.as_ref())?;
    if let Some(original_price) = input.original_price {
        builder = builder.set_nullable("original_price", original_price);
    }
    builder.execute(conn)
}

// ============ Proofs of gains ============

pub fn create_proof(conn: &Connection, input: &CreateProof) -> Result<ProofOfGains> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO proofs_of_gains (id, title, description, amount, date, image_base64, image_alt, show_amount, enabled, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            &id,
            &input.title,
            &input.description,
            &input.amount,
            &input.date,
            &input.image_base64,
            &input.image_alt,
            input.show_amount,
            input.enabled,
            now,
            now
        ],
    )?;

    Ok(ProofOfGains {
        id,
        title: input.title.clone(),
        description: input.description.clone(),
        amount: input.amount.clone(),
        date: input.date.clone(),
        image_base64: input.image_base64.clone(),
        image_alt: input.image_alt.clone(),
        show_amount: input.show_amount,
        enabled: input.enabled,
        created_at: now,
        updated_at: now,
    })
}

pub fn get_proof_by_id(conn: &Connection, id: &str) -> Result<Option<ProofOfGains>> {
    query_one(
        conn,
        &format!("SELECT {} FROM proofs_of_gains WHERE id = ?1", PROOF_COLS),
        &[&id],
    )
}

pub fn list_proofs(conn: &Connection) -> Result<Vec<ProofOfGains>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM proofs_of_gains ORDER BY created_at ASC, rowid ASC",
            PROOF_COLS
        ),
        &[],
    )
}

/// Enabled proofs in display order, capped at `limit`.
pub fn list_enabled_proofs(conn: &Connection, limit: i64) -> Result<Vec<ProofOfGains>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM proofs_of_gains WHERE enabled = 1 ORDER BY created_at ASC, rowid ASC LIMIT ?1",
            PROOF_COLS
        ),
        &[&limit],
    )
}

pub fn update_proof(conn: &Connection, id: &str, input: &UpdateProof) -> Result<bool> {
    UpdateBuilder::new("proofs_of_gains", id)
        .set_opt("title", input.title.clone())
        .set_opt("description", input.description.clone())
        .set_opt("amount", input.amount.clone())
        .set_opt("date", input.date.clone())
        .set_opt("image_base64", input.image_base64.clone())
        .set_opt("image_alt", input.image_alt.clone())
        .set_opt("show_amount", input.show_amount)
        .set_opt("enabled", input.enabled)
        .execute(conn)
}

pub fn delete_proof(conn: &Connection, id: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM proofs_of_gains WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}

// ============ Analytics ============

/// Bump one of today's counters, creating the row on first hit.
/// A single upsert, so concurrent beacons do not lose increments.
pub fn increment_counter(conn: &Connection, event: AnalyticsEvent) -> Result<()> {
    let column = event.as_ref();
    let sql = format!(
        "INSERT INTO analytics (date, {col}) VALUES (?1, 1)
         ON CONFLICT(date) DO UPDATE SET {col} = {col} + 1",
        col = column
    );
    conn.execute(&sql, params![today()])?;
    Ok(())
}

/// Newest day first.
pub fn list_analytics(conn: &Connection) -> Result<Vec<AnalyticsRecord>> {
    query_all(
        conn,
        &format!("SELECT {} FROM analytics ORDER BY date DESC", ANALYTICS_COLS),
        &[],
    )
}

pub fn get_analytics_for_date(conn: &Connection, date: &str) -> Result<Option<AnalyticsRecord>> {
    query_one(
        conn,
        &format!("SELECT {} FROM analytics WHERE date = ?1", ANALYTICS_COLS),
        &[&date],
    )
}

pub fn summarize_analytics(conn: &Connection) -> Result<AnalyticsSummary> {
    let summary = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(page_views), 0), COALESCE(SUM(video_views), 0), COALESCE(SUM(button_clicks), 0)
         FROM analytics",
        [],
        |row| {
            Ok(AnalyticsSummary {
                days: row.get(0)?,
                page_views: row.get(1)?,
                video_views: row.get(2)?,
                button_clicks: row.get(3)?,
            })
        },
    )?;
    Ok(summary)
}

// ============ Admins ============

pub fn create_admin(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    is_admin: bool,
) -> Result<Admin> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO admins (id, username, password_hash, is_admin, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![&id, username, password_hash, is_admin, now],
    )?;

    Ok(Admin {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        is_admin,
        created_at: now,
    })
}

pub fn get_admin_by_username(conn: &Connection, username: &str) -> Result<Option<Admin>> {
    query_one(
        conn,
        &format!("SELECT {} FROM admins WHERE username = ?1", ADMIN_COLS),
        &[&username],
    )
}

pub fn count_admins(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM admins WHERE is_admin = 1",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Create the admin, or reset the password of an existing one.
pub fn upsert_admin(conn: &Connection, username: &str, password_hash: &str) -> Result<Admin> {
    conn.execute(
        "INSERT INTO admins (id, username, password_hash, is_admin, created_at)
         VALUES (?1, ?2, ?3, 1, ?4)
         ON CONFLICT(username) DO UPDATE SET password_hash = excluded.password_hash, is_admin = 1",
        params![gen_id(), username, password_hash, now()],
    )?;
    get_admin_by_username(conn, username)?
        .ok_or_else(|| crate::error::AppError::Internal("Admin vanished after upsert".into()))
}
