//! Bans and mutes written by the game server.
//!
//! The panel only reads punishments, except for releasing one when an appeal is
//! accepted. A punishment is active while `expires_at` is `0` or in the future.

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::review::PunishmentKind, server::model::punishment::Punishment};

fn active_at(now_ms: i64) -> Condition {
    Condition::any()
        .add(entity::punishment::Column::ExpiresAt.eq(0))
        .add(entity::punishment::Column::ExpiresAt.gt(now_ms))
}

fn decode(entities: Vec<entity::punishment::Model>) -> Vec<Punishment> {
    entities.into_iter().map(Punishment::from_entity).collect()
}

pub struct PunishmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PunishmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Punishment>, DbErr> {
        let entity = entity::prelude::Punishment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Punishment::from_entity))
    }

    /// Active bans and mutes of the player with `uuid`, newest first.
    pub async fn get_active_for_uuid(
        &self,
        uuid: &str,
        now_ms: i64,
    ) -> Result<Vec<Punishment>, DbErr> {
        let entities = entity::prelude::Punishment::find()
            .filter(entity::punishment::Column::Uuid.eq(uuid))
            .filter(active_at(now_ms))
            .order_by_desc(entity::punishment::Column::Id)
            .all(self.db)
            .await?;

        Ok(decode(entities))
    }

    /// Every active punishment of `kind`, newest first.
    pub async fn get_active(
        &self,
        kind: PunishmentKind,
        now_ms: i64,
    ) -> Result<Vec<Punishment>, DbErr> {
        let entities = entity::prelude::Punishment::find()
            .filter(entity::punishment::Column::Kind.eq(kind.as_str()))
            .filter(active_at(now_ms))
            .order_by_desc(entity::punishment::Column::Id)
            .all(self.db)
            .await?;

        Ok(decode(entities))
    }

    /// Punishments of `kind` issued by any of `issuers`, active or not, newest first.
    pub async fn get_issued_by(
        &self,
        kind: PunishmentKind,
        issuers: &[String],
    ) -> Result<Vec<Punishment>, DbErr> {
        let entities = entity::prelude::Punishment::find()
            .filter(entity::punishment::Column::Kind.eq(kind.as_str()))
            .filter(
                entity::punishment::Column::IssuedBy.is_in(issuers.iter().map(String::as_str)),
            )
            .order_by_desc(entity::punishment::Column::Id)
            .all(self.db)
            .await?;

        Ok(decode(entities))
    }
}

/// Sets `expires_at` of punishment `id` to [`Punishment::RELEASED_AT`] on `conn`.
///
/// Accepts any connection so the update can join an open transaction. Fails with
/// `DbErr::RecordNotUpdated` when no row matched.
pub async fn release_punishment<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DbErr> {
    let result = entity::prelude::Punishment::update_many()
        .filter(entity::punishment::Column::Id.eq(id))
        .col_expr(
            entity::punishment::Column::ExpiresAt,
            sea_orm::sea_query::Expr::value(Punishment::RELEASED_AT),
        )
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(DbErr::RecordNotUpdated);
    }

    Ok(())
}
