//! HTTP bridge between the browser Go board and a move-suggestion engine.
//!
//! The only engine today is [`game::engine::PlaceholderEngine`], which always
//! answers the centre point.

pub mod app_state;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod router;

pub use app_state::AppState;
pub use config::ServerConfig;
pub use error::ServerError;
pub use router::build_router;
