use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::game::handlers::{handle_move, health};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/api/move", post(handle_move))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // The browser client may be served from a different origin.
    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
