#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use game_core::{GameStore, GameTracker, TargetWordProvider, TryStore};
use game_types::{Game, NewGame, NewTry, Try, TryView, Word};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory stand-in for the document store, with switches to make
/// individual operations fail
#[derive(Default)]
pub struct MemoryStore {
    words: Mutex<Vec<Word>>,
    tries: Mutex<Vec<Try>>,
    games: Mutex<Vec<Game>>,
    pub fail_word_lookup: AtomicBool,
    pub fail_try_writes: AtomicBool,
    pub fail_try_reads: AtomicBool,
    pub fail_game_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_words(names: &[&str]) -> Arc<Self> {
        let store = Self::new();
        for name in names {
            store.add_word(name);
        }
        store
    }

    pub fn add_word(&self, name: &str) -> Word {
        let word = Word {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.words.lock().unwrap().push(word.clone());
        word
    }

    pub fn words(&self) -> Vec<Word> {
        self.words.lock().unwrap().clone()
    }

    pub fn tries(&self) -> Vec<Try> {
        self.tries.lock().unwrap().clone()
    }

    pub fn games(&self) -> Vec<Game> {
        self.games.lock().unwrap().clone()
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl TargetWordProvider for MemoryStore {
    async fn current_target_word(&self) -> Result<Option<Word>> {
        if self.fail_word_lookup.load(Ordering::SeqCst) {
            return Err(anyhow!("word collection unavailable"));
        }
        Ok(self.words.lock().unwrap().first().cloned())
    }
}

#[async_trait]
impl TryStore for MemoryStore {
    async fn create_try(&self, new_try: NewTry) -> Result<Try> {
        if self.fail_try_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("try collection is read-only"));
        }
        let stored = Try {
            id: Uuid::new_v4(),
            word: new_try.word,
            result: new_try.result,
        };
        self.tries.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_all_tries(&self) -> Result<Vec<TryView>> {
        if self.fail_try_reads.load(Ordering::SeqCst) {
            return Err(anyhow!("try collection unavailable"));
        }
        Ok(self.tries.lock().unwrap().iter().map(TryView::from).collect())
    }

    async fn delete_all_tries(&self) -> Result<u64> {
        if self.fail_try_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("try collection is read-only"));
        }
        let mut tries = self.tries.lock().unwrap();
        let deleted = tries.len() as u64;
        tries.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn create_game(&self, new_game: NewGame) -> Result<Game> {
        if self.fail_game_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("game collection is read-only"));
        }
        let game = Game {
            id: Uuid::new_v4(),
            word: new_game.word,
            user: new_game.user,
            total_tries: new_game.total_tries(),
            tries: new_game.tries,
        };
        self.games.lock().unwrap().push(game.clone());
        Ok(game)
    }
}

/// Creates a tracker where every collaborator is the same memory store
pub fn create_tracker(store: &Arc<MemoryStore>) -> GameTracker {
    GameTracker::new(store.clone(), store.clone(), store.clone())
}

pub fn create_test_user() -> Uuid {
    Uuid::new_v4()
}
