use tracing::debug;

use super::message::{Coordinate, MoveRequest, AI_PLACEHOLDER_MOVE};

/// Source of AI move suggestions for the `/api/move` endpoint.
pub trait MoveEngine: Send + Sync {
    fn name(&self) -> &str;

    fn suggest(&self, request: &MoveRequest) -> Coordinate;
}

/// Answers every request with [`AI_PLACEHOLDER_MOVE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderEngine;

impl MoveEngine for PlaceholderEngine {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn suggest(&self, _request: &MoveRequest) -> Coordinate {
        // TODO: replace with a call to the Go inference model once its API exists.
        debug!("Placeholder engine answering with the centre point.");
        AI_PLACEHOLDER_MOVE
    }
}
