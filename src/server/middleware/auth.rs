use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::player::PlayerRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::player::Player,
};

/// Rank tier a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Moderator or above.
    Staff,
    /// Senior moderator or above.
    SeniorStaff,
    /// Admin or above.
    Admin,
}

impl Permission {
    fn name(self) -> &'static str {
        match self {
            Permission::Staff => "staff",
            Permission::SeniorStaff => "senior staff",
            Permission::Admin => "admin",
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in player and checks every permission against their current rank.
    ///
    /// The rank is read from the database on every call, so a rank change takes effect
    /// on the player's next request. An empty `permissions` slice only requires a login.
    ///
    /// # Returns
    /// - `Ok(Player)` - Logged in and every permission satisfied
    /// - `Err(AuthError::UserNotInSession)` - No username in session
    /// - `Err(AuthError::UserNotInDatabase)` - Username has no player row
    /// - `Err(AuthError::AccessDenied)` - Rank below a required tier
    pub async fn require(&self, permissions: &[Permission]) -> Result<Player, AppError> {
        let Some(username) = AuthSession::new(self.session).get_username().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(player) = PlayerRepository::new(self.db)
            .find_by_username(&username)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(username).into());
        };

        for permission in permissions {
            let allowed = match permission {
                Permission::Staff => player.rank.is_staff(),
                Permission::SeniorStaff => player.rank.is_senior_staff(),
                Permission::Admin => player.rank.is_admin(),
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    player.username,
                    format!("requires {} rank", permission.name()),
                )
                .into());
            }
        }

        Ok(player)
    }
}
