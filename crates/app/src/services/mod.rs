mod admin;
mod analysis;
mod feedback;
mod quota;

use std::sync::Arc;

use reverse_ai::AnalyzerClient;
use reverse_db::Db;

use crate::app::AppConfig;
use crate::error::Result;

pub use admin::AdminService;
pub use analysis::{AnalysisOutcome, AnalysisService};
pub use feedback::FeedbackService;
pub use quota::QuotaService;

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub quota: QuotaService,
    pub analysis: AnalysisService,
    pub admin: AdminService,
    pub feedback: FeedbackService,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let shared = Arc::new(config.clone());
        let client = AnalyzerClient::new(config.ai.clone());
        Self {
            quota: QuotaService::new(shared.clone()),
            analysis: AnalysisService::new(client),
            admin: AdminService::new(shared.clone()),
            feedback: FeedbackService::new(shared),
        }
    }
}

fn open_db(config: &SharedConfig) -> Result<Db> {
    Ok(Db::open(&config.db_path)?)
}
