use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Punishment::Table)
                    .if_not_exists()
                    .col(pk_auto(Punishment::Id))
                    .col(string(Punishment::Uuid))
                    .col(string(Punishment::Kind))
                    .col(text(Punishment::Reason))
                    .col(string(Punishment::IssuedBy))
                    .col(big_integer(Punishment::ExpiresAt).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Punishment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Punishment {
    Table,
    Id,
    Uuid,
    Kind,
    Reason,
    IssuedBy,
    ExpiresAt,
}
