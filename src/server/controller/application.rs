use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{ApplicationForm, ApplyStatusDto, ReviewDto, ToggleApplicationsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping moderator application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Get whether the current player may submit a moderator application, along with their
/// open application and the outcome and staff response of their recent ones.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - Eligibility, the reason when not eligible, and application history
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/mod-apply/status",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Application eligibility", body = ApplyStatusDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apply_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = ApplicationService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .status(&player)
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Submit a moderator application.
///
/// # Access Control
/// - Logged in, not already staff
///
/// # Returns
/// - `201 Created` - Application stored and staff notified
/// - `400 Bad Request` - Missing or overlong fields, or already staff
/// - `403 Forbidden` - Applications closed or within the reapply cooldown
/// - `409 Conflict` - An application is already pending
#[utoipa::path(
    post,
    path = "/api/mod-apply/submit",
    tag = APPLICATION_TAG,
    request_body = ApplicationForm,
    responses(
        (status = 201, description = "Application submitted", body = ReviewDto),
        (status = 400, description = "Invalid application", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Applications closed or cooldown active", body = ErrorDto),
        (status = 409, description = "Application already pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_application(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ApplicationForm>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let instance = ApplicationService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .submit(&player, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(instance.into_dto())))
}

/// Open or close moderator applications.
///
/// # Access Control
/// - `SeniorStaff`
///
/// # Returns
/// - `200 OK` - New toggle state
#[utoipa::path(
    post,
    path = "/api/staff/applications/toggle",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Toggle flipped", body = ToggleApplicationsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let applications_open =
        ApplicationService::new(&state.db, state.notifier.as_ref(), &state.app_url)
            .toggle(&player)
            .await?;

    Ok((
        StatusCode::OK,
        Json(ToggleApplicationsDto { applications_open }),
    ))
}
