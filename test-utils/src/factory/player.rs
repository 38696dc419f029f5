//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = PlayerFactory::new(&db)
///     .username("Alex")
///     .rank("admin")
///     .suffix("suffix.100.&c&l[Admin]")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    uuid: String,
    rank: String,
    suffix: Option<String>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - username: `"Player{id}"` where id is auto-incremented
    /// - uuid: `"00000000-0000-0000-0000-{id:012}"`
    /// - rank: `"default"`
    /// - suffix: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("Player{}", id),
            uuid: format!("00000000-0000-0000-0000-{:012}", id),
            rank: "default".to_string(),
            suffix: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            username: ActiveValue::Set(self.username),
            uuid: ActiveValue::Set(self.uuid),
            rank: ActiveValue::Set(self.rank),
            suffix: ActiveValue::Set(self.suffix),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with the given username and rank.
///
/// ```rust,ignore
/// let staff = create_player_with_rank(db, "Steve", "mod").await?;
/// ```
pub async fn create_player_with_rank(
    db: &DatabaseConnection,
    username: impl Into<String>,
    rank: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .username(username)
        .rank(rank)
        .build()
        .await
}
