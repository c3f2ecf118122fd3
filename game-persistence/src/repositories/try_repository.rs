use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use crate::entities::{prelude::*, tries};
use game_core::TryStore;
use game_types::{NewTry, Try, TryView};

pub struct TryRepository {
    db: DatabaseConnection,
}

impl TryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_try(model: tries::Model) -> Try {
        Try {
            id: model.id,
            word: model.word,
            result: model.result,
        }
    }

    pub async fn create(&self, new_try: NewTry) -> Result<Try> {
        let try_model = tries::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            word: ActiveValue::Set(new_try.word),
            result: ActiveValue::Set(new_try.result),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let saved_model = Tries::insert(try_model).exec(&self.db).await?;

        let created_try = Tries::find_by_id(saved_model.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created try"))?;

        Ok(Self::model_to_try(created_try))
    }

    /// Every try projected to `{word, result}`, oldest first
    pub async fn find_all(&self) -> Result<Vec<TryView>> {
        let models = Tries::find()
            .order_by_asc(tries::Column::CreatedAt)
            .order_by_asc(tries::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|model| TryView {
                word: model.word,
                result: model.result,
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Try>> {
        let try_model = Tries::find_by_id(id).one(&self.db).await?;
        Ok(try_model.map(Self::model_to_try))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Tries::find().count(&self.db).await?)
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = Tries::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl TryStore for TryRepository {
    async fn create_try(&self, new_try: NewTry) -> Result<Try> {
        self.create(new_try).await
    }

    async fn find_all_tries(&self) -> Result<Vec<TryView>> {
        self.find_all().await
    }

    async fn delete_all_tries(&self) -> Result<u64> {
        self.delete_all().await
    }
}
