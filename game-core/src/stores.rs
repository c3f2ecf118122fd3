use anyhow::Result;
use async_trait::async_trait;
use game_types::{Game, NewGame, NewTry, Try, TryView, Word};

/// Supplies the word every guess is currently scored against
#[async_trait]
pub trait TargetWordProvider: Send + Sync {
    async fn current_target_word(&self) -> Result<Option<Word>>;
}

#[async_trait]
pub trait TryStore: Send + Sync {
    async fn create_try(&self, new_try: NewTry) -> Result<Try>;

    /// Every stored try, oldest first, regardless of game or user
    async fn find_all_tries(&self) -> Result<Vec<TryView>>;

    /// Returns the number of tries removed
    async fn delete_all_tries(&self) -> Result<u64>;
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create_game(&self, new_game: NewGame) -> Result<Game>;
}
