use std::sync::Arc;

use game_types::{GameError, GuessOutcome, NewGame, NewTry, UserId};
use tracing::{debug, error, info, warn};

use crate::evaluation::EvaluationAlgorithm;
use crate::stores::{GameStore, TargetWordProvider, TryStore};

/// Scores guesses and records them as tries and games.
///
/// A submission writes the try first and the game second. The two writes
/// are independent: if the game write fails the try stays stored and the
/// error is returned to the caller.
pub struct GameTracker {
    words: Arc<dyn TargetWordProvider>,
    tries: Arc<dyn TryStore>,
    games: Arc<dyn GameStore>,
    algorithm: EvaluationAlgorithm,
}

impl GameTracker {
    pub fn new(
        words: Arc<dyn TargetWordProvider>,
        tries: Arc<dyn TryStore>,
        games: Arc<dyn GameStore>,
    ) -> Self {
        Self::with_algorithm(words, tries, games, EvaluationAlgorithm::default())
    }

    pub fn with_algorithm(
        words: Arc<dyn TargetWordProvider>,
        tries: Arc<dyn TryStore>,
        games: Arc<dyn GameStore>,
        algorithm: EvaluationAlgorithm,
    ) -> Self {
        Self {
            words,
            tries,
            games,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> EvaluationAlgorithm {
        self.algorithm
    }

    pub async fn submit_guess(
        &self,
        guess: &str,
        user_id: UserId,
    ) -> Result<GuessOutcome, GameError> {
        let target = self
            .words
            .current_target_word()
            .await
            .map_err(|e| persistence_error("load target word", e))?
            .ok_or_else(|| {
                warn!("Guess submitted by {} but no target word is stored", user_id);
                GameError::WordNotFound
            })?;

        let result = self.algorithm.evaluate(guess, &target.name);
        debug!(
            "Evaluated guess '{}' with {} -> {}",
            guess, self.algorithm, result
        );

        let stored_try = self
            .tries
            .create_try(NewTry {
                word: guess.to_string(),
                result: result.clone(),
            })
            .await
            .map_err(|e| persistence_error("save try", e))?;

        let game = self
            .games
            .create_game(NewGame {
                word: target.id,
                user: user_id,
                tries: vec![stored_try.id],
            })
            .await
            .map_err(|e| persistence_error("save game", e))?;
        debug!("Recorded try {} in game {}", stored_try.id, game.id);

        let all_tries = self
            .tries
            .find_all_tries()
            .await
            .map_err(|e| persistence_error("load tries", e))?;

        info!(
            "User {} guessed '{}' ({}), {} tries stored",
            user_id,
            guess,
            result,
            all_tries.len()
        );

        Ok(GuessOutcome {
            guess: guess.to_string(),
            result,
            all_tries,
        })
    }

    pub async fn reset_tries(&self) -> Result<u64, GameError> {
        let deleted = self
            .tries
            .delete_all_tries()
            .await
            .map_err(|e| persistence_error("delete tries", e))?;

        info!("Reset tries, {} removed", deleted);
        Ok(deleted)
    }
}

fn persistence_error(step: &str, err: anyhow::Error) -> GameError {
    error!("Failed to {}: {:#}", step, err);
    GameError::internal(err)
}
