use reverse_core::{FeedbackEntry, PromptUsage};

use crate::error::Result;
use crate::services::{SharedConfig, open_db};

/// Read-only admin views. Unlike the quota paths these surface storage
/// errors to the caller.
#[derive(Clone)]
pub struct AdminService {
    config: SharedConfig,
}

impl AdminService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    pub fn fetch_all_user_prompts(&self) -> Result<Vec<PromptUsage>> {
        let db = open_db(&self.config)?;
        Ok(db.list_usage()?)
    }

    pub fn fetch_all_feedback(&self) -> Result<Vec<FeedbackEntry>> {
        let db = open_db(&self.config)?;
        Ok(db.list_feedback()?)
    }
}
