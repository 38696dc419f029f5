use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        punishment::{BanCountDto, MyPunishmentDto, PunishmentDto},
        review::PunishmentKind,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::punishment::PunishmentService,
        state::AppState,
    },
};

/// Tag for grouping ban and mute endpoints in OpenAPI documentation
pub static PUNISHMENT_TAG: &str = "punishment";

/// Get the current player's active ban and mute and the state of their appeal.
///
/// The appeal shown is the latest one against the active ban, or against the active mute
/// when the player is not banned, including the staff response once decided.
///
/// # Access Control
/// - Logged in
#[utoipa::path(
    get,
    path = "/api/my-punishment",
    tag = PUNISHMENT_TAG,
    responses(
        (status = 200, description = "Active punishments and appeal", body = MyPunishmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_punishment(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let punishment = PunishmentService::new(&state.db)
        .my_punishment(&player)
        .await?;

    Ok((StatusCode::OK, Json(punishment.into_dto())))
}

/// Get every active ban, newest first.
///
/// # Access Control
/// - `SeniorStaff`
#[utoipa::path(
    get,
    path = "/api/active-bans",
    tag = PUNISHMENT_TAG,
    responses(
        (status = 200, description = "Active bans", body = Vec<PunishmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_bans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let bans = PunishmentService::new(&state.db)
        .get_active(PunishmentKind::Ban)
        .await?;

    let bans: Vec<PunishmentDto> = bans.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bans)))
}

/// Get every active mute, newest first.
///
/// # Access Control
/// - `SeniorStaff`
#[utoipa::path(
    get,
    path = "/api/active-mutes",
    tag = PUNISHMENT_TAG,
    responses(
        (status = 200, description = "Active mutes", body = Vec<PunishmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_mutes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let mutes = PunishmentService::new(&state.db)
        .get_active(PunishmentKind::Mute)
        .await?;

    let mutes: Vec<PunishmentDto> = mutes.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(mutes)))
}

/// Get the bans the current staff member has issued, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/my-bans",
    tag = PUNISHMENT_TAG,
    responses(
        (status = 200, description = "Bans issued by the caller", body = Vec<PunishmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let bans = PunishmentService::new(&state.db)
        .get_issued_bans(&player)
        .await?;

    let bans: Vec<PunishmentDto> = bans.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bans)))
}

/// Get the staff leaderboard of issued bans.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - Staff with at least one ban, most bans first
#[utoipa::path(
    get,
    path = "/api/top-bans",
    tag = PUNISHMENT_TAG,
    responses(
        (status = 200, description = "Ban counts per staff member", body = Vec<BanCountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_bans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let counts = PunishmentService::new(&state.db).get_top_bans().await?;

    let counts: Vec<BanCountDto> = counts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(counts)))
}
