use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::MessageDto, staff::AuthStatusDto},
    server::{
        data::player::PlayerRepository, error::AppError, middleware::session::AuthSession,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the login state and rank tiers of the current session.
///
/// Never fails for anonymous callers; a session pointing at a player that no longer
/// exists is reported as logged out.
///
/// # Returns
/// - `200 OK` - Current login state
/// - `500 Internal Server Error` - Session or database error
#[utoipa::path(
    get,
    path = "/api/auth/status",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current login state", body = AuthStatusDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(username) = AuthSession::new(&session).get_username().await? else {
        return Ok((StatusCode::OK, Json(AuthStatusDto::logged_out())));
    };

    let status = PlayerRepository::new(&state.db)
        .find_by_username(&username)
        .await?
        .map(|player| player.into_auth_status_dto())
        .unwrap_or_else(AuthStatusDto::logged_out);

    Ok((StatusCode::OK, Json(status)))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::ok("Logged out."))))
}
