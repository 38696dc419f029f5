use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerSetting::Table)
                    .if_not_exists()
                    .col(string(ServerSetting::Key).primary_key())
                    .col(string(ServerSetting::Value))
                    .col(string_null(ServerSetting::LastModifiedBy))
                    .col(
                        timestamp_with_time_zone(ServerSetting::LastModifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerSetting {
    Table,
    Key,
    Value,
    LastModifiedBy,
    LastModifiedAt,
}
