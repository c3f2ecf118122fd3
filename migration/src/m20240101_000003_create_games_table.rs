use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys to words or tries: deleting a word or resetting
        // tries leaves existing games and their try references in place
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::WordId).uuid().not_null())
                    .col(ColumnDef::new(Games::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Games::TotalTries)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_user_id")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GameTries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameTries::GameId).uuid().not_null())
                    .col(ColumnDef::new(GameTries::Position).integer().not_null())
                    .col(ColumnDef::new(GameTries::TryId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(GameTries::GameId)
                            .col(GameTries::Position),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tries_game_id")
                            .from(GameTries::Table, GameTries::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameTries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    WordId,
    UserId,
    TotalTries,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GameTries {
    Table,
    GameId,
    Position,
    TryId,
}
