use crate::error::Result;
use crate::services::{SharedConfig, open_db};

/// Append-only feedback sink.
#[derive(Clone)]
pub struct FeedbackService {
    config: SharedConfig,
}

impl FeedbackService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    pub fn save(&self, user_id: &str, feedback: &str) -> Result<i64> {
        let db = open_db(&self.config)?;
        Ok(db.insert_feedback(user_id, feedback)?)
    }
}
