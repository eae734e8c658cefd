use std::sync::Arc;

use acceleron_inquiry::IntakeDispatcher;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

mod health;
mod index;

use crate::assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub intake: Arc<dyn IntakeDispatcher>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/inquiry", post(index::action))
        .fallback(index::fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
