use std::path::Path;

use chrono::{SecondsFormat, Utc};
use rand::RngCore;
use rusqlite::Connection;

mod feedback;
mod usage;

pub const MIGRATION_0001: &str = include_str!("../migrations/0001_init.sql");
pub const MIGRATION_0002: &str = include_str!("../migrations/0002_add_feedback.sql");

pub const MIGRATIONS: &[(&str, &str)] = &[
    ("0001_init", MIGRATION_0001),
    ("0002_add_feedback", MIGRATION_0002),
];

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;

pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    pub fn migrate(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (_name, sql) in MIGRATIONS {
            tx.execute_batch(sql)?;
        }
        tx.commit()?;
        Ok(())
    }
}

/// RFC 3339 UTC timestamp for `created_at` / `updated_at` bookkeeping.
pub(crate) fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Opaque row id in the `usr_<millis>_<hex>` shape the original data carries.
pub(crate) fn generate_usage_id() -> String {
    let mut bytes = [0u8; 4];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    let suffix: String = bytes.iter().map(|byte| format!("{:02x}", byte)).collect();
    format!("usr_{}_{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
pub(crate) fn open_test_db(dir: &tempfile::TempDir) -> Db {
    let mut db = Db::open(dir.path().join("test.sqlite")).expect("open db");
    db.migrate().expect("migrate db");
    db
}
