use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{
            AppealForm, DecideReviewDto, ReportForm, ReviewCategory, ReviewDto, ReviewListFilter,
        },
    },
    server::{
        data::review::ReviewRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{review::ReviewWorkflow, submission::SubmissionService},
        state::AppState,
    },
};

/// Tag for grouping review workflow endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
pub struct ListReviewsParams {
    #[serde(default)]
    pub status: ReviewListFilter,
}

/// Appeal one of the current player's punishments.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `201 Created` - Appeal stored and staff notified
/// - `400 Bad Request` - Missing reason, wrong punishment type or expired punishment
/// - `404 Not Found` - Punishment does not exist or belongs to another player
/// - `409 Conflict` - An appeal is already open
#[utoipa::path(
    post,
    path = "/api/submit-appeal",
    tag = REVIEW_TAG,
    request_body = AppealForm,
    responses(
        (status = 201, description = "Appeal submitted", body = ReviewDto),
        (status = 400, description = "Invalid appeal", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Punishment not found", body = ErrorDto),
        (status = 409, description = "Appeal already open", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_appeal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AppealForm>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let instance = SubmissionService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .submit_appeal(&player, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(instance.into_dto())))
}

/// Report another player.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `201 Created` - Report stored and staff notified
/// - `400 Bad Request` - Missing fields or self report
/// - `409 Conflict` - A report by this player is already open
#[utoipa::path(
    post,
    path = "/api/submit-report",
    tag = REVIEW_TAG,
    request_body = ReportForm,
    responses(
        (status = 201, description = "Report submitted", body = ReviewDto),
        (status = 400, description = "Invalid report", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Report already open", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReportForm>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let instance = SubmissionService::new(&state.db, state.notifier.as_ref(), &state.app_url)
        .submit_report(&player, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(instance.into_dto())))
}

/// Get instances of a category.
///
/// `status=open` (default) lists pending and in-review instances, `status=decided` the
/// approved and denied history, `status=all` everything grouped by state. Each list is
/// newest first within a state.
///
/// # Access Control
/// - `SeniorStaff`
#[utoipa::path(
    get,
    path = "/api/reviews/{category}",
    tag = REVIEW_TAG,
    params(
        ("category" = ReviewCategory, Path, description = "mod_application, appeal or report"),
        ("status" = Option<ReviewListFilter>, Query, description = "open, decided or all (default: open)")
    ),
    responses(
        (status = 200, description = "Matching instances", body = Vec<ReviewDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<ReviewCategory>,
    Query(params): Query<ListReviewsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let repo = ReviewRepository::new(&state.db);
    let instances = ReviewWorkflow::new(&repo, state.notifier.as_ref(), &state.app_url)
        .list(category, params.status)
        .await?;

    let instances: Vec<ReviewDto> = instances.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(instances)))
}

/// Get a single instance.
///
/// # Access Control
/// - `SeniorStaff`
///
/// # Returns
/// - `200 OK` - Instance with its submitted form
/// - `404 Not Found` - No instance with this id in the category
#[utoipa::path(
    get,
    path = "/api/reviews/{category}/{id}",
    tag = REVIEW_TAG,
    params(
        ("category" = ReviewCategory, Path, description = "mod_application, appeal or report"),
        ("id" = i32, Path, description = "Instance id")
    ),
    responses(
        (status = 200, description = "Instance", body = ReviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 404, description = "Instance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    session: Session,
    Path((category, id)): Path<(ReviewCategory, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let repo = ReviewRepository::new(&state.db);
    let instance = ReviewWorkflow::new(&repo, state.notifier.as_ref(), &state.app_url)
        .get(category, id)
        .await?;

    Ok((StatusCode::OK, Json(instance.into_dto())))
}

/// Claim a pending instance for review.
///
/// Exactly one of several concurrent claims succeeds.
///
/// # Access Control
/// - `SeniorStaff`
///
/// # Returns
/// - `200 OK` - Instance now claimed by the caller
/// - `404 Not Found` - No instance with this id in the category
/// - `409 Conflict` - Already claimed or already decided
#[utoipa::path(
    post,
    path = "/api/reviews/{category}/{id}/claim",
    tag = REVIEW_TAG,
    params(
        ("category" = ReviewCategory, Path, description = "mod_application, appeal or report"),
        ("id" = i32, Path, description = "Instance id")
    ),
    responses(
        (status = 200, description = "Instance claimed", body = ReviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 404, description = "Instance not found", body = ErrorDto),
        (status = 409, description = "Already claimed or decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_review(
    State(state): State<AppState>,
    session: Session,
    Path((category, id)): Path<(ReviewCategory, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let repo = ReviewRepository::new(&state.db);
    let instance = ReviewWorkflow::new(&repo, state.notifier.as_ref(), &state.app_url)
        .claim(category, id, &player.username)
        .await?;

    Ok((StatusCode::OK, Json(instance.into_dto())))
}

/// Approve or deny a pending or claimed instance.
///
/// Accepting an appeal releases the appealed punishment in the same transaction.
///
/// # Access Control
/// - `SeniorStaff`
///
/// # Returns
/// - `200 OK` - Decided instance
/// - `404 Not Found` - No instance with this id in the category
/// - `409 Conflict` - Already decided; nothing changed
#[utoipa::path(
    post,
    path = "/api/reviews/{category}/{id}/decide",
    tag = REVIEW_TAG,
    params(
        ("category" = ReviewCategory, Path, description = "mod_application, appeal or report"),
        ("id" = i32, Path, description = "Instance id")
    ),
    request_body = DecideReviewDto,
    responses(
        (status = 200, description = "Instance decided", body = ReviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not senior staff", body = ErrorDto),
        (status = 404, description = "Instance not found", body = ErrorDto),
        (status = 409, description = "Already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_review(
    State(state): State<AppState>,
    session: Session,
    Path((category, id)): Path<(ReviewCategory, i32)>,
    Json(payload): Json<DecideReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SeniorStaff])
        .await?;

    let repo = ReviewRepository::new(&state.db);
    let instance = ReviewWorkflow::new(&repo, state.notifier.as_ref(), &state.app_url)
        .decide(
            category,
            id,
            &player.username,
            payload.outcome,
            payload.response,
        )
        .await?;

    Ok((StatusCode::OK, Json(instance.into_dto())))
}
