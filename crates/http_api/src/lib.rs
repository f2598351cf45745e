mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

pub use state::{HttpState, generate_admin_token};

pub fn router(state: HttpState) -> Router<()> {
    let admin = Router::new()
        .route("/admin-dashboard", post(handlers::admin_dashboard))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin,
        ));

    let api = Router::new()
        .route("/check-prompt-limit", post(handlers::check_prompt_limit))
        .route("/analyze-thought", post(handlers::analyze_thought))
        .route("/save-feedback", post(handlers::save_feedback))
        .merge(admin);

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .with_state(state)
}
