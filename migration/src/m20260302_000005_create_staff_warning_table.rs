use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffWarning::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffWarning::Id))
                    .col(string(StaffWarning::Username))
                    .col(text(StaffWarning::Reason))
                    .col(string(StaffWarning::IssuedBy))
                    .col(
                        timestamp_with_time_zone(StaffWarning::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_warning_username")
                            .from(StaffWarning::Table, StaffWarning::Username)
                            .to(Player::Table, Player::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffWarning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffWarning {
    Table,
    Id,
    Username,
    Reason,
    IssuedBy,
    CreatedAt,
}
