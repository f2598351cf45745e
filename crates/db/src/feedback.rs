use rusqlite::{Row, params};

use reverse_core::FeedbackEntry;

use crate::{Db, Result, now_utc};

impl Db {
    pub fn insert_feedback(&self, user_id: &str, feedback: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO user_feedback (user_id, feedback, created_at) VALUES (?1, ?2, ?3)",
            params![user_id, feedback, now_utc()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list_feedback(&self) -> Result<Vec<FeedbackEntry>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, user_id, feedback, created_at
            FROM user_feedback
            ORDER BY created_at DESC, id DESC
            "#,
        )?;
        let rows = stmt
            .query_map([], row_to_feedback)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn row_to_feedback(row: &Row<'_>) -> std::result::Result<FeedbackEntry, rusqlite::Error> {
    Ok(FeedbackEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        feedback: row.get(2)?,
        created_at: row.get(3)?,
    })
}
