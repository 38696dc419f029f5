//! Staff management: rank changes, warnings and the staff roster.

use sea_orm::DatabaseConnection;

use crate::{
    model::rank::Rank,
    server::{
        data::{player::PlayerRepository, staff_warning::StaffWarningRepository},
        error::{auth::AuthError, AppError},
        model::player::{CreateStaffWarningParam, Player, StaffWarning},
        service::{
            game_sync::GameSync,
            rank_policy::{can_change_rank, RankChange},
        },
    },
};

/// Ranks listed on the staff roster.
const ROSTER_RANKS: [Rank; 2] = [Rank::Mod, Rank::SrMod];

/// Service providing business logic for staff management.
pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
    game_sync: &'a GameSync,
}

impl<'a> StaffService<'a> {
    /// Creates a new StaffService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `game_sync` - Notified after every successful rank change
    pub fn new(db: &'a DatabaseConnection, game_sync: &'a GameSync) -> Self {
        Self { db, game_sync }
    }

    /// Promotes or demotes `username` to `new_rank` on behalf of `actor`.
    ///
    /// Both players are re-read from the database so the decision uses their current
    /// ranks.
    ///
    /// # Returns
    /// - `Ok(Player)` - Target with the new rank
    /// - `Err(AppError::NotFound)` - Actor or target does not exist
    /// - `Err(AuthError::RankNotPermitted)` - Rank policy refused the change
    pub async fn change_rank(
        &self,
        actor: &str,
        username: &str,
        new_rank: Rank,
        direction: RankChange,
    ) -> Result<Player, AppError> {
        let player_repo = PlayerRepository::new(self.db);

        let (Some(actor), Some(mut target)) = (
            player_repo.find_by_username(actor).await?,
            player_repo.find_by_username(username).await?,
        ) else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        if !can_change_rank(actor.rank, target.rank, new_rank, direction) {
            return Err(AuthError::RankNotPermitted {
                actor: actor.username,
                target: target.username,
                new_rank,
            }
            .into());
        }

        player_repo.set_rank(&target.username, new_rank).await?;
        tracing::info!(
            "{} changed rank of {} from {} to {} ({:?})",
            actor.username,
            target.username,
            target.rank,
            new_rank,
            direction
        );
        target.rank = new_rank;

        self.game_sync.request_sync_logged().await;

        Ok(target)
    }

    /// Sets `username` to one of the assignable ranks without the rank policy.
    ///
    /// # Returns
    /// - `Ok(())` - Rank stored
    /// - `Err(AppError::BadRequest)` - Blank username or rank outside the assignable set
    /// - `Err(AppError::NotFound)` - No player row was updated
    pub async fn set_rank(&self, username: &str, new_rank: Rank) -> Result<(), AppError> {
        if username.trim().is_empty() || !new_rank.is_assignable() {
            return Err(AppError::BadRequest(
                "Invalid username or rank provided.".to_string(),
            ));
        }

        if !PlayerRepository::new(self.db)
            .set_rank(username, new_rank)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Player '{}' not found.",
                username
            )));
        }

        self.game_sync.request_sync_logged().await;

        Ok(())
    }

    /// Records a warning against a staff member.
    ///
    /// # Returns
    /// - `Ok(StaffWarning)` - Stored warning
    /// - `Err(AppError::BadRequest)` - Username or reason blank
    /// - `Err(AppError::NotFound)` - No such player
    pub async fn warn(
        &self,
        actor: &Player,
        username: &str,
        reason: &str,
    ) -> Result<StaffWarning, AppError> {
        if username.trim().is_empty() || reason.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Username and reason are required.".to_string(),
            ));
        }

        if PlayerRepository::new(self.db)
            .find_by_username(username)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Player '{}' not found.",
                username
            )));
        }

        let warning = StaffWarningRepository::new(self.db)
            .create(CreateStaffWarningParam {
                username: username.to_string(),
                reason: reason.trim().to_string(),
                issued_by: actor.username.clone(),
            })
            .await?;

        Ok(warning)
    }

    /// Gets the warnings recorded against `username`, newest first.
    pub async fn get_warnings(&self, username: &str) -> Result<Vec<StaffWarning>, AppError> {
        let warnings = StaffWarningRepository::new(self.db)
            .get_by_username(username)
            .await?;
        Ok(warnings)
    }

    /// Gets moderators and senior moderators, ordered by username.
    pub async fn get_all_staff(&self) -> Result<Vec<Player>, AppError> {
        let staff = PlayerRepository::new(self.db)
            .get_by_ranks(&ROSTER_RANKS)
            .await?;
        Ok(staff)
    }
}
