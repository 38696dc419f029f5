//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for reading players and changing their
//! permission group. Rank strings are parsed into [`Rank`] at this boundary.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::rank::Rank, server::model::player::Player};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a player by their in-game username.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(username.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets all players whose stored group is one of `ranks`, ordered by username.
    ///
    /// Players with unknown groups are never returned, even when `ranks` contains
    /// `Rank::Default`, because the filter matches stored group names exactly.
    pub async fn get_by_ranks(&self, ranks: &[Rank]) -> Result<Vec<Player>, DbErr> {
        let groups: Vec<&str> = ranks.iter().map(|rank| rank.as_str()).collect();

        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Rank.is_in(groups))
            .order_by_asc(entity::player::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets the players whose uuid is in `uuids`, ordered by username.
    pub async fn get_by_uuids(&self, uuids: &[String]) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Uuid.is_in(uuids.iter().map(String::as_str)))
            .order_by_asc(entity::player::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Sets a player's permission group.
    ///
    /// # Arguments
    /// - `username` - Player to update
    /// - `rank` - New rank, stored as its group name
    ///
    /// # Returns
    /// - `Ok(true)` - Player row updated
    /// - `Ok(false)` - No player with that username
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_rank(&self, username: &str, rank: Rank) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::update_many()
            .filter(entity::player::Column::Username.eq(username))
            .col_expr(
                entity::player::Column::Rank,
                sea_orm::sea_query::Expr::value(rank.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
