use std::net::SocketAddr;
use std::path::PathBuf;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use app_api::AppContext;
use http_api::{HttpState, generate_admin_token};
use reverse_ai::AiConfig;
use reverse_app::{AppConfig, AppPaths, AppState, ensure_app_data_dir};

const DEFAULT_ADDR: &str = "127.0.0.1:3030";
const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AI_MODEL: &str = "gpt-4";

fn resolve_data_dir() -> PathBuf {
    resolve_data_dir_with(std::env::var_os("NUNOREVERSE_DATA_DIR").map(PathBuf::from))
}

fn resolve_data_dir_with(env_override: Option<PathBuf>) -> PathBuf {
    env_override.unwrap_or_else(|| PathBuf::from("data"))
}

fn resolve_ai_config() -> AiConfig {
    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; analyze-thought will serve fallback responses");
    }
    AiConfig {
        base_url: std::env::var("NUNOREVERSE_AI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_AI_BASE_URL.to_string()),
        api_key,
        model: std::env::var("NUNOREVERSE_AI_MODEL")
            .unwrap_or_else(|_| DEFAULT_AI_MODEL.to_string()),
    }
}

fn resolve_admin_token() -> String {
    match std::env::var("NUNOREVERSE_ADMIN_TOKEN") {
        Ok(token) if !token.is_empty() => token,
        _ => {
            let token = generate_admin_token();
            tracing::info!(%token, "NUNOREVERSE_ADMIN_TOKEN not set, generated admin token");
            token
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let paths = AppPaths::new(resolve_data_dir());
    if let Err(err) = ensure_app_data_dir(&paths) {
        tracing::error!(error = %err, "failed to create data directory");
        std::process::exit(1);
    }

    let app_state = AppState::new(AppConfig {
        db_path: paths.db_path,
        ai: resolve_ai_config(),
    });
    if let Err(err) = app_state.setup_db() {
        tracing::error!(error = %err, "failed to initialize database");
        std::process::exit(1);
    }

    let state = HttpState::new(AppContext { app_state }, resolve_admin_token());
    let app = http_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = std::env::var("NUNOREVERSE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("valid NUNOREVERSE_ADDR");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind server");
    tracing::info!(%addr, "nunoreverse backend listening");
    axum::serve(listener, app).await.expect("serve");
}
