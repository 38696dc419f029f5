use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        punishment::{BanCountDto, MyPunishmentDto, PunishmentDto},
        rank::Rank,
        review::{
            AppealForm, ApplicationForm, ApplyStatusDto, DecideReviewDto, Outcome,
            PunishmentKind, ReportForm, ReviewCategory, ReviewDto, ReviewListFilter,
            SubmissionStatusDto, ToggleApplicationsDto,
        },
        staff::{
            AuthStatusDto, ChangeRankDto, PlayerProfileDto, StaffMemberDto, StaffWarningDto,
            WarnStaffDto,
        },
    },
    server::{
        controller::{application, auth, player, punishment, review, staff},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::get_status,
        auth::logout,
        staff::get_all_staff,
        staff::promote,
        staff::demote,
        staff::set_rank,
        staff::warn,
        staff::get_warnings,
        staff::get_my_warnings,
        player::get_staff_roster,
        player::get_player,
        punishment::get_my_punishment,
        punishment::get_active_bans,
        punishment::get_active_mutes,
        punishment::get_my_bans,
        punishment::get_top_bans,
        application::get_apply_status,
        application::submit_application,
        application::toggle_applications,
        review::submit_appeal,
        review::submit_report,
        review::list_reviews,
        review::get_review,
        review::claim_review,
        review::decide_review,
    ),
    components(
        schemas(
            ErrorDto,
            MessageDto,
            Rank,
            AuthStatusDto,
            ChangeRankDto,
            WarnStaffDto,
            StaffWarningDto,
            StaffMemberDto,
            PlayerProfileDto,
            PunishmentDto,
            MyPunishmentDto,
            BanCountDto,
            ReviewCategory,
            ReviewListFilter,
            SubmissionStatusDto,
            Outcome,
            PunishmentKind,
            ApplicationForm,
            AppealForm,
            ReportForm,
            DecideReviewDto,
            ReviewDto,
            ApplyStatusDto,
            ToggleApplicationsDto,
        )
    ),
    tags(
        (name = "auth", description = "Session login state"),
        (name = "staff", description = "Staff roster, rank changes and warnings"),
        (name = "player", description = "Public profiles and staff list"),
        (name = "punishment", description = "Bans, mutes and ban statistics"),
        (name = "application", description = "Moderator applications"),
        (name = "review", description = "Appeals, reports and the review queue"),
    ),
    info(
        title = "craftpanel API",
        description = "Minecraft community panel backend",
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/status", get(auth::get_status))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/all-staff", get(staff::get_all_staff))
        .route("/api/staff/promote", post(staff::promote))
        .route("/api/staff/demote", post(staff::demote))
        .route("/api/staff/setrank", post(staff::set_rank))
        .route("/api/staff/warn", post(staff::warn))
        .route("/api/staff/warnings/{username}", get(staff::get_warnings))
        .route("/api/my-warnings", get(staff::get_my_warnings))
        .route("/api/staff", get(player::get_staff_roster))
        .route("/api/player/{username}", get(player::get_player))
        .route("/api/my-punishment", get(punishment::get_my_punishment))
        .route("/api/active-bans", get(punishment::get_active_bans))
        .route("/api/active-mutes", get(punishment::get_active_mutes))
        .route("/api/my-bans", get(punishment::get_my_bans))
        .route("/api/top-bans", get(punishment::get_top_bans))
        .route(
            "/api/staff/applications/toggle",
            post(application::toggle_applications),
        )
        .route("/api/mod-apply/status", get(application::get_apply_status))
        .route("/api/mod-apply/submit", post(application::submit_application))
        .route("/api/submit-appeal", post(review::submit_appeal))
        .route("/api/submit-report", post(review::submit_report))
        .route("/api/reviews/{category}", get(review::list_reviews))
        .route("/api/reviews/{category}/{id}", get(review::get_review))
        .route(
            "/api/reviews/{category}/{id}/claim",
            post(review::claim_review),
        )
        .route(
            "/api/reviews/{category}/{id}/decide",
            post(review::decide_review),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
