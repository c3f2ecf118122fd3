use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub word_id: Uuid,
    pub user_id: Uuid,
    pub total_tries: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_tries::Entity")]
    GameTries,
}

impl Related<super::game_tries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
