mod from_row;
pub mod queries;

use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::Result;
use crate::geo::CountryLocator;
use crate::jwt::TokenSigner;
use crate::models::{CreateEbook, Ebook, GeoConfig, SectionsConfig, SiteContent, VslConfig};

pub type DbPool = Pool<SqliteConnectionManager>;

/// Shared handler state. Cheap to clone: the pool, signer and locator are
/// all reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub tokens: TokenSigner,
    pub locator: CountryLocator,
}

/// Keys of the singleton documents in the `settings` table.
pub mod keys {
    pub const SITE_CONTENT: &str = "site_content";
    pub const VSL: &str = "vsl_config";
    pub const SECTIONS: &str = "sections";
    pub const GEO: &str = "geo_config";
}

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_path).with_init(|conn| {
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
        conn.busy_timeout(Duration::from_secs(5))
    });
    let pool = Pool::builder().max_size(8).build(manager)?;
    Ok(pool)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS ebooks (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            subtitle TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL DEFAULT 0,
            original_price REAL,
            features TEXT NOT NULL DEFAULT '[]',
            bonuses TEXT NOT NULL DEFAULT '[]',
            buy_buttons TEXT NOT NULL DEFAULT '[]',
            enabled INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS proofs_of_gains (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            amount TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL DEFAULT '',
            image_base64 TEXT NOT NULL DEFAULT '',
            image_alt TEXT NOT NULL DEFAULT '',
            show_amount INTEGER NOT NULL DEFAULT 1,
            enabled INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS analytics (
            date TEXT PRIMARY KEY,
            page_views INTEGER NOT NULL DEFAULT 0,
            video_views INTEGER NOT NULL DEFAULT 0,
            button_clicks INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS admins (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_ebooks_created ON ebooks(created_at);
        CREATE INDEX IF NOT EXISTS idx_proofs_created ON proofs_of_gains(created_at);
        "#,
    )?;
    Ok(())
}

/// Write first-boot defaults. Existing documents and rows are never touched.
pub fn seed_defaults(conn: &Connection) -> Result<()> {
    let mut seeded = Vec::new();

    if queries::insert_setting_if_absent(conn, keys::SITE_CONTENT, &SiteContent::default())? {
        seeded.push(keys::SITE_CONTENT);
    }
    if queries::insert_setting_if_absent(conn, keys::VSL, &VslConfig::default())? {
        seeded.push(keys::VSL);
    }
    if queries::insert_setting_if_absent(conn, keys::SECTIONS, &SectionsConfig::initial())? {
        seeded.push(keys::SECTIONS);
    }
    let geo = GeoConfig::default().preset();
    if queries::insert_setting_if_absent(conn, keys::GEO, &geo)? {
        seeded.push(keys::GEO);
    }

    if queries::count_ebooks(conn)? == 0 {
        let fallback = Ebook::fallback();
        queries::create_ebook(
            conn,
            &CreateEbook {
                title: fallback.title,
                subtitle: fallback.subtitle,
                description: fallback.description,
                price: fallback.price,
                original_price: fallback.original_price,
                features: fallback.features,
                bonuses: fallback.bonuses,
                buy_buttons: fallback.buy_buttons,
                enabled: true,
            },
        )?;
        seeded.push("ebooks");
    }

    if !seeded.is_empty() {
        tracing::info!("Seeded defaults: {}", seeded.join(", "));
    }
    Ok(())
}
