use crate::{GameId, TryId, UserId, WordId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single persisted guess and its encoded result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Try {
    pub id: TryId,
    pub word: String,
    pub result: String,
}

/// The `{word, result}` projection of a try returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TryView {
    pub word: String,
    pub result: String,
}

impl From<&Try> for TryView {
    fn from(attempt: &Try) -> Self {
        TryView {
            word: attempt.word.clone(),
            result: attempt.result.clone(),
        }
    }
}

/// Fields of a try before the store has assigned it an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTry {
    pub word: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub word: WordId,
    pub user: UserId,
    pub tries: Vec<TryId>,
    pub total_tries: i32,
}

/// Fields of a game before the store has assigned it an id.
/// `total_tries` is always derived from `tries` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub word: WordId,
    pub user: UserId,
    pub tries: Vec<TryId>,
}

impl NewGame {
    pub fn total_tries(&self) -> i32 {
        self.tries.len() as i32
    }
}

/// Everything a caller learns from one guess submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessOutcome {
    pub guess: String,
    pub result: String,
    pub all_tries: Vec<TryView>,
}
