//! Public player lookups: profiles and the staff roster.

use sea_orm::DatabaseConnection;

use crate::{
    model::rank::Rank,
    server::{data::player::PlayerRepository, error::AppError, model::player::Player},
};

/// Service providing public player information.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one player's profile.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player found
    /// - `Err(AppError::NotFound)` - No player with that username
    pub async fn get_profile(&self, username: &str) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
    }

    /// Gets every staff member, highest rank first and by username within a rank.
    pub async fn get_roster(&self) -> Result<Vec<Player>, AppError> {
        let mut staff = PlayerRepository::new(self.db)
            .get_by_ranks(&Rank::STAFF)
            .await?;
        staff.sort_by(|a, b| b.rank.cmp(&a.rank));

        Ok(staff)
    }
}
