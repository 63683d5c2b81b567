use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::app_state::AppState;
use crate::game::message::{MoveRequest, MoveResponse};

#[axum::debug_handler]
pub async fn handle_move(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveRequest>,
) -> Json<MoveResponse> {
    match &request.user_move {
        Some(user_move) => info!(
            "📥 Received user move: row {}, col {}",
            user_move.row, user_move.col
        ),
        None => info!("📥 Received user move: none"),
    }

    match &request.board_state {
        Some(board) => {
            let (rows, cols) = board.dimensions();
            debug!("Board state is {}x{}", rows, cols);
            info!("📥 Current board state: {}", board);
        }
        None => info!("📥 Current board state: none"),
    }

    let ai_move = state.engine.suggest(&request);

    info!(
        "✅ {} engine answered: row {}, col {}",
        state.engine.name(),
        ai_move.row,
        ai_move.col
    );

    Json(MoveResponse { ai_move })
}

pub async fn health() -> &'static str {
    "OK"
}
