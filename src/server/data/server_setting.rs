//! Server setting repository.
//!
//! Settings are free-form key/value rows that remember who changed them last.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Key of the moderator applications toggle.
pub const APPLICATIONS_OPEN: &str = "applications_open";

pub struct ServerSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::ServerSetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Inserts or overwrites a setting, recording who changed it and when.
    ///
    /// # Arguments
    /// - `key` - Setting key
    /// - `value` - New value
    /// - `modified_by` - Username of the player making the change
    pub async fn set(&self, key: &str, value: &str, modified_by: &str) -> Result<(), DbErr> {
        entity::prelude::ServerSetting::insert(entity::server_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            last_modified_by: ActiveValue::Set(Some(modified_by.to_string())),
            last_modified_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::server_setting::Column::Key)
                .update_columns([
                    entity::server_setting::Column::Value,
                    entity::server_setting::Column::LastModifiedBy,
                    entity::server_setting::Column::LastModifiedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Whether moderator applications are accepted. Missing setting means closed.
    pub async fn applications_open(&self) -> Result<bool, DbErr> {
        Ok(self.get(APPLICATIONS_OPEN).await?.as_deref() == Some("true"))
    }

    pub async fn set_applications_open(&self, open: bool, modified_by: &str) -> Result<(), DbErr> {
        self.set(APPLICATIONS_OPEN, if open { "true" } else { "false" }, modified_by)
            .await
    }
}
