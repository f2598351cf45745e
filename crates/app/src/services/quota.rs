use reverse_core::QuotaStatus;

use crate::error::Result;
use crate::services::{SharedConfig, open_db};
use crate::util::time::today_local;

const STORAGE_NOTICE: &str = "Using fallback mechanism due to database error";

/// Daily prompt quota, keyed by the identity-provider subject id.
///
/// Storage failures never block the user: both paths degrade to the
/// permissive fallback and the error is logged instead of propagated.
#[derive(Clone)]
pub struct QuotaService {
    config: SharedConfig,
}

impl QuotaService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// Loads (or lazily creates) the user's row, resets the count if the
    /// stored window is from a previous day, and reports the decision.
    pub fn check(&self, user_id: &str) -> QuotaStatus {
        match self.try_check(user_id) {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "quota check failed, returning permissive fallback");
                QuotaStatus::permissive(STORAGE_NOTICE)
            }
        }
    }

    fn try_check(&self, user_id: &str) -> Result<QuotaStatus> {
        let today = today_local();
        let db = open_db(&self.config)?;
        let mut usage = db.get_or_create_usage(user_id, &today)?;
        if usage.last_reset_date < today {
            usage = db.reset_usage(user_id, &today)?;
        }
        Ok(QuotaStatus::from_count(usage.prompt_count))
    }

    /// Attributes one AI invocation to the user. Returns a notice string
    /// when the write was dropped because storage was unavailable.
    pub fn record_use(&self, user_id: &str) -> Option<String> {
        match self.try_record_use(user_id) {
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "quota increment failed, continuing without it");
                Some(STORAGE_NOTICE.to_string())
            }
        }
    }

    fn try_record_use(&self, user_id: &str) -> Result<i64> {
        let db = open_db(&self.config)?;
        Ok(db.record_use(user_id, &today_local())?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reverse_ai::AiConfig;
    use reverse_core::DAILY_PROMPT_LIMIT;

    use super::*;
    use crate::app::{AppConfig, setup_db};

    fn test_config(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            db_path: dir.path().join("quota.sqlite"),
            ai: AiConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                api_key: "test".to_string(),
                model: "gpt-4".to_string(),
            },
        }
    }

    fn quota_service(config: &AppConfig) -> QuotaService {
        QuotaService::new(Arc::new(config.clone()))
    }

    #[test]
    fn fresh_user_gets_full_allowance() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = test_config(&dir);
        setup_db(&config.db_path).expect("setup db");
        let quota = quota_service(&config);

        let status = quota.check("u1");
        assert!(status.can_use_prompt);
        assert_eq!(status.remaining_prompts, DAILY_PROMPT_LIMIT);
        assert_eq!(status.total_used, 0);
        assert!(status.notice.is_none());
    }

    #[test]
    fn exhausts_after_limit_uses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = test_config(&dir);
        setup_db(&config.db_path).expect("setup db");
        let quota = quota_service(&config);

        assert!(quota.check("u1").can_use_prompt);
        for _ in 0..DAILY_PROMPT_LIMIT {
            assert!(quota.record_use("u1").is_none());
        }
        let status = quota.check("u1");
        assert!(!status.can_use_prompt);
        assert_eq!(status.remaining_prompts, 0);
        assert_eq!(status.total_used, DAILY_PROMPT_LIMIT);
    }

    #[test]
    fn stale_window_resets_on_check() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = test_config(&dir);
        setup_db(&config.db_path).expect("setup db");
        let quota = quota_service(&config);

        // Seed a row counted against a long-past day.
        let db = reverse_db::Db::open(&config.db_path).expect("open db");
        db.record_use("u1", "2020-01-01").expect("record");
        db.record_use("u1", "2020-01-01").expect("record");
        db.record_use("u1", "2020-01-01").expect("record");

        let status = quota.check("u1");
        assert!(status.can_use_prompt);
        assert_eq!(status.total_used, 0);
    }

    #[test]
    fn storage_failure_fails_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        // db_path points into a directory that doesn't exist, so every open fails.
        let config = AppConfig {
            db_path: dir.path().join("missing").join("quota.sqlite"),
            ..test_config(&dir)
        };
        let quota = quota_service(&config);

        let status = quota.check("u2");
        assert!(status.can_use_prompt);
        assert_eq!(status.remaining_prompts, DAILY_PROMPT_LIMIT);
        assert_eq!(status.total_used, 0);
        assert!(status.notice.is_some());

        let notice = quota.record_use("u2");
        assert!(notice.is_some());
    }
}
