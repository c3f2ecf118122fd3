use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{game_tries, games, prelude::*};
use game_core::GameStore;
use game_types::{Game, GameId, NewGame, UserId};

pub struct GameRepository {
    db: DatabaseConnection,
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_game(model: games::Model, mut links: Vec<game_tries::Model>) -> Game {
        links.sort_by_key(|link| link.position);

        Game {
            id: model.id,
            word: model.word_id,
            user: model.user_id,
            tries: links.into_iter().map(|link| link.try_id).collect(),
            total_tries: model.total_tries,
        }
    }

    /// Insert a game together with its ordered try references.
    /// Both inserts share one transaction so a game is never stored without
    /// its try list.
    pub async fn create(&self, new_game: NewGame) -> Result<Game> {
        let game_id = Uuid::new_v4();
        let total_tries = new_game.total_tries();

        let game_model = games::ActiveModel {
            id: ActiveValue::Set(game_id),
            word_id: ActiveValue::Set(new_game.word),
            user_id: ActiveValue::Set(new_game.user),
            total_tries: ActiveValue::Set(total_tries),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let links: Vec<game_tries::ActiveModel> = new_game
            .tries
            .iter()
            .enumerate()
            .map(|(position, try_id)| game_tries::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                position: ActiveValue::Set(position as i32),
                try_id: ActiveValue::Set(*try_id),
            })
            .collect();

        let txn = self.db.begin().await?;
        Games::insert(game_model).exec(&txn).await?;
        if !links.is_empty() {
            GameTries::insert_many(links).exec_without_returning(&txn).await?;
        }
        txn.commit().await?;

        tracing::debug!("Created game {} with {} tries", game_id, total_tries);

        Ok(Game {
            id: game_id,
            word: new_game.word,
            user: new_game.user,
            tries: new_game.tries,
            total_tries,
        })
    }

    pub async fn find_by_id(&self, id: GameId) -> Result<Option<Game>> {
        let Some(game_model) = Games::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let links = game_model
            .find_related(GameTries)
            .order_by_asc(game_tries::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(Self::model_to_game(game_model, links)))
    }

    /// Every game a user has created, oldest first
    pub async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Game>> {
        let games = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .order_by_asc(games::Column::CreatedAt)
            .order_by_asc(games::Column::Id)
            .find_with_related(GameTries)
            .all(&self.db)
            .await?;

        Ok(games
            .into_iter()
            .map(|(game, links)| Self::model_to_game(game, links))
            .collect())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Games::find().count(&self.db).await?)
    }
}

#[async_trait]
impl GameStore for GameRepository {
    async fn create_game(&self, new_game: NewGame) -> Result<Game> {
        self.create(new_game).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use crate::repositories::TryRepository;
    use game_types::NewTry;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> (GameRepository, TryRepository) {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        (GameRepository::new(db.clone()), TryRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_and_find_game() {
        let (repo, _) = setup_test_db().await;
        let word_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let try_id = Uuid::new_v4();

        let created = repo
            .create_game(NewGame {
                word: word_id,
                user: user_id,
                tries: vec![try_id],
            })
            .await
            .unwrap();
        assert_eq!(created.total_tries, 1);
        assert_eq!(created.tries, vec![try_id]);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.word, word_id);
        assert_eq!(found.user, user_id);

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_try_order_is_preserved() {
        let (repo, _) = setup_test_db().await;
        let tries: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

        let created = repo
            .create(NewGame {
                word: Uuid::new_v4(),
                user: Uuid::new_v4(),
                tries: tries.clone(),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.tries, tries);
        assert_eq!(found.total_tries, 4);
    }

    #[tokio::test]
    async fn test_game_without_tries() {
        let (repo, _) = setup_test_db().await;

        let created = repo
            .create(NewGame {
                word: Uuid::new_v4(),
                user: Uuid::new_v4(),
                tries: Vec::new(),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(found.tries.is_empty());
        assert_eq!(found.total_tries, 0);
    }

    #[tokio::test]
    async fn test_find_by_user() {
        let (repo, _) = setup_test_db().await;
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let word = Uuid::new_v4();

        for user in [alice, bob, alice] {
            repo.create(NewGame {
                word,
                user,
                tries: vec![Uuid::new_v4()],
            })
            .await
            .unwrap();
        }

        let alice_games = repo.find_by_user(alice).await.unwrap();
        assert_eq!(alice_games.len(), 2);
        assert!(alice_games.iter().all(|game| game.user == alice));
        assert!(alice_games.iter().all(|game| game.tries.len() == 1));

        assert_eq!(repo.find_by_user(bob).await.unwrap().len(), 1);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_games_survive_try_reset() {
        let (repo, try_repo) = setup_test_db().await;

        let stored_try = try_repo
            .create(NewTry {
                word: "hello".to_string(),
                result: "11111".to_string(),
            })
            .await
            .unwrap();
        let game = repo
            .create(NewGame {
                word: Uuid::new_v4(),
                user: Uuid::new_v4(),
                tries: vec![stored_try.id],
            })
            .await
            .unwrap();

        try_repo.delete_all().await.unwrap();

        // The game keeps its now dangling try reference
        let found = repo.find_by_id(game.id).await.unwrap().unwrap();
        assert_eq!(found.tries, vec![stored_try.id]);
        assert!(try_repo.find_by_id(stored_try.id).await.unwrap().is_none());
    }
}
