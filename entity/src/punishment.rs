use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "punishment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub uuid: String,
    /// `ban` or `mute`.
    pub kind: String,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub issued_by: String,
    /// Expiry in milliseconds since the Unix epoch, `0` for permanent.
    pub expires_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
