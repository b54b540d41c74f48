//! Errors that can end a game session.

use life_rules::RulesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}
