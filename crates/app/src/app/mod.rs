use std::path::PathBuf;

use reverse_ai::AiConfig;
use reverse_db::Db;

use crate::error::Result;
use crate::services::AppServices;

/// Everything the backend needs to run, assembled once in `main`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub ai: AiConfig,
}

/// Application state shared by the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let services = AppServices::new(&config);
        Self { config, services }
    }

    pub fn setup_db(&self) -> Result<()> {
        setup_db(&self.config.db_path)
    }

    pub fn open_db(&self) -> Result<Db> {
        Ok(Db::open(&self.config.db_path)?)
    }
}

pub fn setup_db(path: &std::path::Path) -> Result<()> {
    let mut db = Db::open(path)?;
    db.migrate()?;
    Ok(())
}
