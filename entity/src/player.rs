use sea_orm::entity::prelude::*;

/// A player known to the panel, keyed by in-game username.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    #[sea_orm(unique)]
    pub uuid: String,
    /// Lowercase permission group name, e.g. `srmod`.
    pub rank: String,
    /// Legacy suffix permission string carrying `&` color codes.
    pub suffix: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
