use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::player::{CreateStaffWarningParam, StaffWarning};

pub struct StaffWarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffWarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a warning against a staff member.
    ///
    /// # Returns
    /// - `Ok(StaffWarning)` - The stored warning
    /// - `Err(DbErr)` - Database error during insert, including an unknown username when
    ///   foreign keys are enforced
    pub async fn create(&self, param: CreateStaffWarningParam) -> Result<StaffWarning, DbErr> {
        let entity = entity::staff_warning::ActiveModel {
            username: ActiveValue::Set(param.username),
            reason: ActiveValue::Set(param.reason),
            issued_by: ActiveValue::Set(param.issued_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StaffWarning::from_entity(entity))
    }

    /// Gets all warnings for a staff member, newest first.
    pub async fn get_by_username(&self, username: &str) -> Result<Vec<StaffWarning>, DbErr> {
        let entities = entity::prelude::StaffWarning::find()
            .filter(entity::staff_warning::Column::Username.eq(username))
            .order_by_desc(entity::staff_warning::Column::CreatedAt)
            .order_by_desc(entity::staff_warning::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StaffWarning::from_entity).collect())
    }
}
