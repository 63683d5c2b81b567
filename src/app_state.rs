use crate::game::engine::{MoveEngine, PlaceholderEngine};

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn MoveEngine>,
}

impl AppState {
    pub fn new(engine: Arc<dyn MoveEngine>) -> Self {
        AppState { engine }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Arc::new(PlaceholderEngine))
    }
}
