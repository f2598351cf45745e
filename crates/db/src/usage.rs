use rusqlite::{OptionalExtension, Row, params};

use reverse_core::PromptUsage;

use crate::{Db, DbError, Result, generate_usage_id, now_utc};

const USAGE_COLUMNS: &str = "id, user_id, prompt_count, last_reset_date, created_at, updated_at";

impl Db {
    pub fn get_usage(&self, user_id: &str) -> Result<Option<PromptUsage>> {
        self.conn
            .query_row(
                &format!("SELECT {USAGE_COLUMNS} FROM prompt_usage WHERE user_id = ?1"),
                params![user_id],
                row_to_usage,
            )
            .optional()
            .map_err(DbError::from)
    }

    /// Lazily creates the row for a never-seen user with a zero count.
    pub fn create_usage(&self, user_id: &str, today: &str) -> Result<PromptUsage> {
        let now = now_utc();
        self.conn.execute(
            r#"
            INSERT INTO prompt_usage (id, user_id, prompt_count, last_reset_date, created_at, updated_at)
            VALUES (?1, ?2, 0, ?3, ?4, ?4)
            "#,
            params![generate_usage_id(), user_id, today, now],
        )?;
        self.get_usage(user_id)?
            .ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub fn get_or_create_usage(&self, user_id: &str, today: &str) -> Result<PromptUsage> {
        if let Some(usage) = self.get_usage(user_id)? {
            return Ok(usage);
        }
        let inserted = self.create_usage(user_id, today);
        if let Ok(usage) = inserted {
            return Ok(usage);
        }
        // Lost an insert race; the competing row is the row.
        if let Some(usage) = self.get_usage(user_id)? {
            return Ok(usage);
        }
        Err(inserted
            .err()
            .unwrap_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)))
    }

    /// Starts a fresh counting window: count back to zero, date stamped today.
    pub fn reset_usage(&self, user_id: &str, today: &str) -> Result<PromptUsage> {
        self.conn.execute(
            r#"
            UPDATE prompt_usage
            SET prompt_count = 0, last_reset_date = ?2, updated_at = ?3
            WHERE user_id = ?1
            "#,
            params![user_id, today, now_utc()],
        )?;
        self.get_usage(user_id)?
            .ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Records one AI invocation in a single statement. A stored date older
    /// than `today` starts the new day at 1 instead of inflating the stale
    /// count, and concurrent calls cannot lose updates.
    pub fn record_use(&self, user_id: &str, today: &str) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO prompt_usage (id, user_id, prompt_count, last_reset_date, created_at, updated_at)
            VALUES (?1, ?2, 1, ?3, ?4, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
              prompt_count = CASE
                WHEN prompt_usage.last_reset_date < excluded.last_reset_date THEN 1
                ELSE prompt_usage.prompt_count + 1
              END,
              last_reset_date = excluded.last_reset_date,
              updated_at = excluded.updated_at
            "#,
            params![generate_usage_id(), user_id, today, now_utc()],
        )?;
        self.conn
            .query_row(
                "SELECT prompt_count FROM prompt_usage WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .map_err(DbError::from)
    }

    /// Every quota row, most recently touched first. Admin view only.
    pub fn list_usage(&self) -> Result<Vec<PromptUsage>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {USAGE_COLUMNS} FROM prompt_usage ORDER BY updated_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([], row_to_usage)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn row_to_usage(row: &Row<'_>) -> std::result::Result<PromptUsage, rusqlite::Error> {
    Ok(PromptUsage {
        id: row.get(0)?,
        user_id: row.get(1)?,
        prompt_count: row.get(2)?,
        last_reset_date: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
