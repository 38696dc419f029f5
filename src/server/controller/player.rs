use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        staff::{PlayerProfileDto, StaffMemberDto},
    },
    server::{error::AppError, service::player::PlayerService, state::AppState},
};

/// Tag for grouping public player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Get the public staff roster, highest rank first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Every staff member", body = Vec<StaffMemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_roster(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let staff = PlayerService::new(&state.db).get_roster().await?;

    let staff: Vec<StaffMemberDto> = staff.into_iter().map(|p| p.into_staff_dto()).collect();

    Ok((StatusCode::OK, Json(staff)))
}

/// Get a player's public profile.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Profile with rank colors
/// - `404 Not Found` - No player with that username
#[utoipa::path(
    get,
    path = "/api/player/{username}",
    tag = PLAYER_TAG,
    params(
        ("username" = String, Path, description = "In-game username")
    ),
    responses(
        (status = 200, description = "Player profile", body = PlayerProfileDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).get_profile(&username).await?;

    Ok((StatusCode::OK, Json(player.into_profile_dto())))
}
