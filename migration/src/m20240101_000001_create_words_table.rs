use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Words::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Words::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Words::Name).string().not_null())
                    .col(
                        ColumnDef::new(Words::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Words::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The target word is the oldest one, so lookups order by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_words_created_at")
                    .table(Words::Table)
                    .col(Words::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Words::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Words {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
