//! Row mapping for the query layer.
//!
//! Each model lists its columns once (`*_COLS`) and implements [`FromRow`]
//! in the same order, so `SELECT {COLS}` and `from_row` cannot drift apart.

use rusqlite::{Connection, OptionalExtension, Row, ToSql, types::Type};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{Admin, AnalyticsRecord, Ebook, ProofOfGains};

pub const EBOOK_COLS: &str = "id, title, subtitle, description, price, original_price, features, bonuses, buy_buttons, enabled, created_at, updated_at";

pub const PROOF_COLS: &str = "id, title, description, amount, date, image_base64, image_alt, show_amount, enabled, created_at, updated_at";

pub const ANALYTICS_COLS: &str = "date, page_views, video_views, button_clicks";

pub const ADMIN_COLS: &str = "id, username, password_hash, is_admin, created_at";

pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Decode a JSON text column.
fn json_col<T: DeserializeOwned>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl FromRow for Ebook {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Ebook {
            id: row.get(0)?,
            title: row.get(1)?,
            subtitle: row.get(2)?,
            description: row.get(3)?,
            price: row.get(4)?,
            original_price: row.get(5)?,
            features: json_col(row, 6)?,
            bonuses: json_col(row, 7)?,
            buy_buttons: json_col(row, 8)?,
            enabled: row.get(9)?,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        })
    }
}

impl FromRow for ProofOfGains {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ProofOfGains {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            amount: row.get(3)?,
            date: row.get(4)?,
            image_base64: row.get(5)?,
            image_alt: row.get(6)?,
            show_amount: row.get(7)?,
            enabled: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }
}

impl FromRow for AnalyticsRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(AnalyticsRecord {
            date: row.get(0)?,
            page_views: row.get(1)?,
            video_views: row.get(2)?,
            button_clicks: row.get(3)?,
        })
    }
}

impl FromRow for Admin {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Admin {
            id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
            is_admin: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

pub fn query_one<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> Result<Option<T>> {
    let mut stmt = conn.prepare(sql)?;
    let item = stmt.query_row(params, |row| T::from_row(row)).optional()?;
    Ok(item)
}

pub fn query_all<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| T::from_row(row))?;
    let items = rows.collect::<rusqlite::Result<Vec<T>>>()?;
    Ok(items)
}
