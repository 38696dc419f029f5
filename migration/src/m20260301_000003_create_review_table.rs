use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_punishment_table::Punishment;

/// Status labels of pending and in-review instances across all categories.
const OPEN_STATUSES: [&str; 3] = ["pending", "reviewing", "claimed"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string(Review::Category))
                    .col(string(Review::Subject))
                    .col(string(Review::Status).default("pending"))
                    .col(string_null(Review::ClaimedBy))
                    .col(string_null(Review::HandledBy))
                    .col(text_null(Review::Response))
                    .col(text(Review::Payload))
                    .col(integer_null(Review::PunishmentId))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Review::HandledAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_punishment_id")
                            .from(Review::Table, Review::PunishmentId)
                            .to(Punishment::Table, Punishment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_category_subject_status")
                    .table(Review::Table)
                    .col(Review::Category)
                    .col(Review::Subject)
                    .col(Review::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_one_open_per_subject")
                    .table(Review::Table)
                    .col(Review::Category)
                    .col(Review::Subject)
                    .unique()
                    .and_where(Expr::col(Review::Status).is_in(OPEN_STATUSES))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    Category,
    Subject,
    Status,
    ClaimedBy,
    HandledBy,
    Response,
    Payload,
    PunishmentId,
    CreatedAt,
    HandledAt,
}
