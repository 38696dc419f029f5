use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, model::rank::Rank};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No username is stored in the session; the caller is not logged in.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session refers to a username that no longer has a player row.
    ///
    /// Results in a 404 Not Found response.
    #[error("Player '{0}' from session was not found in the database")]
    UserNotInDatabase(String),

    /// The player is logged in but their rank is below the tier the route requires.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Player '{0}' denied access: {1}")]
    AccessDenied(String, String),

    /// The rank policy refused a promotion or demotion.
    ///
    /// Results in a 403 Forbidden response.
    #[error("{actor} may not change the rank of {target} to {new_rank}")]
    RankNotPermitted {
        actor: String,
        target: String,
        new_rank: Rank,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
///
/// # Returns
/// - 401 Unauthorized - For `UserNotInSession`
/// - 403 Forbidden - For `AccessDenied` and `RankNotPermitted`
/// - 404 Not Found - For `UserNotInDatabase`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("not_logged_in", "You must be logged in.")),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("user_not_found", "User not found.")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "access_denied",
                    "You do not have permission to access this resource.",
                )),
            )
                .into_response(),
            Self::RankNotPermitted { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "rank_not_permitted",
                    "You do not have permission to perform this rank change.",
                )),
            )
                .into_response(),
        }
    }
}
