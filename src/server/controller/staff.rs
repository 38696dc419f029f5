use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        rank::Rank,
        staff::{ChangeRankDto, StaffMemberDto, StaffWarningDto, WarnStaffDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{rank_policy::RankChange, staff::StaffService},
        state::AppState,
    },
};

/// Tag for grouping staff management endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// Get all moderators and senior moderators.
///
/// Each entry carries the CSS decoded from the player's rank suffix.
///
/// # Access Control
/// - `Admin` - Only admins can view the staff roster
///
/// # Returns
/// - `200 OK` - Staff roster ordered by username
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/all-staff",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Staff roster", body = Vec<StaffMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_staff(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let staff = StaffService::new(&state.db, &state.game_sync)
        .get_all_staff()
        .await?;

    let staff: Vec<StaffMemberDto> = staff.into_iter().map(|p| p.into_staff_dto()).collect();

    Ok((StatusCode::OK, Json(staff)))
}

/// Promote a player.
///
/// The actor must outrank the target and may not promote above their own rank. Unknown
/// rank names are treated as `default`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Rank changed
/// - `403 Forbidden` - Not an admin, or the rank policy refused the change
/// - `404 Not Found` - Target player does not exist
#[utoipa::path(
    post,
    path = "/api/staff/promote",
    tag = STAFF_TAG,
    request_body = ChangeRankDto,
    responses(
        (status = 200, description = "Rank changed", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn promote(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangeRankDto>,
) -> Result<impl IntoResponse, AppError> {
    change_rank(state, session, payload, RankChange::Promote).await
}

/// Demote a player.
///
/// Only requires the actor to outrank the target; the new rank is not checked.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/staff/demote",
    tag = STAFF_TAG,
    request_body = ChangeRankDto,
    responses(
        (status = 200, description = "Rank changed", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn demote(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangeRankDto>,
) -> Result<impl IntoResponse, AppError> {
    change_rank(state, session, payload, RankChange::Demote).await
}

async fn change_rank(
    state: AppState,
    session: Session,
    payload: ChangeRankDto,
    direction: RankChange,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let new_rank = Rank::from_group(&payload.new_rank);
    let target = StaffService::new(&state.db, &state.game_sync)
        .change_rank(&actor.username, &payload.username, new_rank, direction)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok(format!(
            "{} is now {}.",
            target.username, target.rank
        ))),
    ))
}

/// Set a player's rank directly.
///
/// Restricted to `mod`, `srmod`, `admin`, `headadmin` and `manager`; the rank policy is
/// not consulted.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Rank stored
/// - `400 Bad Request` - Blank username or rank outside the assignable set
/// - `404 Not Found` - Player does not exist
#[utoipa::path(
    post,
    path = "/api/staff/setrank",
    tag = STAFF_TAG,
    request_body = ChangeRankDto,
    responses(
        (status = 200, description = "Rank stored", body = MessageDto),
        (status = 400, description = "Invalid username or rank", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_rank(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangeRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(new_rank) = Rank::parse(&payload.new_rank) else {
        return Err(AppError::BadRequest(
            "Invalid username or rank provided.".to_string(),
        ));
    };

    StaffService::new(&state.db, &state.game_sync)
        .set_rank(&payload.username, new_rank)
        .await?;

    tracing::info!(
        "{} set rank of {} to {}",
        actor.username,
        payload.username,
        new_rank
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok(format!(
            "Rank of {} set to {}.",
            payload.username, new_rank
        ))),
    ))
}

/// Record a warning against a staff member.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Warning stored
/// - `400 Bad Request` - Username or reason missing
/// - `404 Not Found` - Player does not exist
#[utoipa::path(
    post,
    path = "/api/staff/warn",
    tag = STAFF_TAG,
    request_body = WarnStaffDto,
    responses(
        (status = 201, description = "Warning stored", body = StaffWarningDto),
        (status = 400, description = "Username or reason missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn warn(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<WarnStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let warning = StaffService::new(&state.db, &state.game_sync)
        .warn(&actor, &payload.username, &payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(warning.into_dto())))
}

/// Get the warnings recorded against a staff member, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/staff/warnings/{username}",
    tag = STAFF_TAG,
    params(
        ("username" = String, Path, description = "Staff member's username")
    ),
    responses(
        (status = 200, description = "Warnings, newest first", body = Vec<StaffWarningDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_warnings(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let warnings = StaffService::new(&state.db, &state.game_sync)
        .get_warnings(&username)
        .await?;

    let warnings: Vec<StaffWarningDto> = warnings.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(warnings)))
}

/// Get the warnings recorded against the current player, newest first.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/my-warnings",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Caller's warnings, newest first", body = Vec<StaffWarningDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_warnings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let warnings = StaffService::new(&state.db, &state.game_sync)
        .get_warnings(&player.username)
        .await?;

    let warnings: Vec<StaffWarningDto> = warnings.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(warnings)))
}
