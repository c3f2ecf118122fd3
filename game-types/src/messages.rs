use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GuessOutcome, TryView};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitGuessRequest {
    pub word: String,
}

/// Wire shape of a guess result. Field names follow the public API:
/// `response` is the encoded result and `game` lists every stored try.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitGuessResponse {
    pub word: String,
    pub response: String,
    pub game: Vec<TryView>,
}

impl From<GuessOutcome> for SubmitGuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        SubmitGuessResponse {
            word: outcome.guess,
            response: outcome.result,
            game: outcome.all_tries,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
