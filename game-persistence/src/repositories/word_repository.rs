use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::entities::{prelude::*, words};
use game_core::TargetWordProvider;
use game_types::{Word, WordId};

pub struct WordRepository {
    db: DatabaseConnection,
}

impl WordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_word(model: words::Model) -> Word {
        Word {
            id: model.id,
            name: model.name,
        }
    }

    pub async fn create_word(&self, name: &str) -> Result<Word> {
        let now = chrono::Utc::now().into();

        let word_model = words::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let saved_model = Words::insert(word_model).exec(&self.db).await?;

        let created_word = Words::find_by_id(saved_model.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created word"))?;

        tracing::debug!("Created word {}", created_word.id);
        Ok(Self::model_to_word(created_word))
    }

    /// All words, oldest first
    pub async fn find_all(&self) -> Result<Vec<Word>> {
        let words = Words::find()
            .order_by_asc(words::Column::CreatedAt)
            .order_by_asc(words::Column::Id)
            .all(&self.db)
            .await?;

        Ok(words.into_iter().map(Self::model_to_word).collect())
    }

    pub async fn find_by_id(&self, id: WordId) -> Result<Option<Word>> {
        let word_model = Words::find_by_id(id).one(&self.db).await?;
        Ok(word_model.map(Self::model_to_word))
    }

    /// The oldest stored word, if any
    pub async fn find_first(&self) -> Result<Option<Word>> {
        let word_model = Words::find()
            .order_by_asc(words::Column::CreatedAt)
            .order_by_asc(words::Column::Id)
            .one(&self.db)
            .await?;

        Ok(word_model.map(Self::model_to_word))
    }

    /// Rename a word, returning the updated record or `None` if it doesn't exist
    pub async fn update_word(&self, id: WordId, name: &str) -> Result<Option<Word>> {
        let Some(word) = Words::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let updated_word = words::ActiveModel {
            id: ActiveValue::Unchanged(word.id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Unchanged(word.created_at),
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let saved = Words::update(updated_word).exec(&self.db).await?;
        Ok(Some(Self::model_to_word(saved)))
    }

    /// Returns false if no word had this id
    pub async fn delete_word(&self, id: WordId) -> Result<bool> {
        let result = Words::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl TargetWordProvider for WordRepository {
    async fn current_target_word(&self) -> Result<Option<Word>> {
        self.find_first().await
    }
}
