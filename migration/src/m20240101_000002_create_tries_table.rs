use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tries::Word).string().not_null())
                    .col(ColumnDef::new(Tries::Result).string().not_null())
                    .col(
                        ColumnDef::new(Tries::CreatedAt)
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
                    .name("idx_tries_created_at")
                    .table(Tries::Table)
                    .col(Tries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tries {
    Table,
    Id,
    Word,
    Result,
    CreatedAt,
}
