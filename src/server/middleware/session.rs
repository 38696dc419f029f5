//! Type-safe session management wrappers.
//!
//! The login flow itself lives outside this server; once a player has logged in their
//! username is stored under a single session key. `AuthSession` is the only code that
//! reads or writes that key.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USERNAME: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the logged-in player's username and the session
/// lifecycle.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the player's username in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Username stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_username(&self, username: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USERNAME, username.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in player's username.
    ///
    /// # Returns
    /// - `Ok(Some(username))` - Player is logged in
    /// - `Ok(None)` - No player in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_username(&self) -> Result<Option<String>, AppError> {
        let username = self.session.get::<String>(SESSION_AUTH_USERNAME).await?;
        Ok(username.filter(|name| !name.is_empty()))
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
