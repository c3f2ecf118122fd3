use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("Word not found in the database")]
    WordNotFound,
    #[error("{message}")]
    Internal { message: String },
}

impl GameError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        GameError::Internal {
            message: err.to_string(),
        }
    }
}
