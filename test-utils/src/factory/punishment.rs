//! Punishment factory for creating bans and mutes.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test punishments.
pub struct PunishmentFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: String,
    kind: String,
    reason: String,
    issued_by: String,
    expires_at: i64,
}

impl<'a> PunishmentFactory<'a> {
    /// Creates a new PunishmentFactory for the player with the given uuid.
    ///
    /// Defaults to a permanent ban (`expires_at = 0`) issued by `"Console"`.
    pub fn new(db: &'a DatabaseConnection, uuid: impl Into<String>) -> Self {
        Self {
            db,
            uuid: uuid.into(),
            kind: "ban".to_string(),
            reason: "Cheating".to_string(),
            issued_by: "Console".to_string(),
            expires_at: 0,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn issued_by(mut self, issued_by: impl Into<String>) -> Self {
        self.issued_by = issued_by.into();
        self
    }

    pub fn expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::punishment::Model, DbErr> {
        entity::punishment::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            kind: ActiveValue::Set(self.kind),
            reason: ActiveValue::Set(self.reason),
            issued_by: ActiveValue::Set(self.issued_by),
            expires_at: ActiveValue::Set(self.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a permanent ban for the player with the given uuid.
pub async fn create_ban(
    db: &DatabaseConnection,
    uuid: &str,
) -> Result<entity::punishment::Model, DbErr> {
    PunishmentFactory::new(db, uuid).build().await
}
