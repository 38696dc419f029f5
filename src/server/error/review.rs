use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, review::ReviewCategory},
    server::error::{internal::InternalError, InternalServerError},
};

/// Failures of the review workflow and the moderator application gate.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Submitted form is incomplete or too long.
    #[error("{0}")]
    Validation(String),

    /// The subject already has an open instance in this category.
    #[error("{subject} already has an open {}", .category.display_name())]
    DuplicatePending {
        category: ReviewCategory,
        subject: String,
    },

    /// Someone else claimed the instance first.
    #[error("{category} {id} has already been claimed")]
    AlreadyClaimed {
        category: ReviewCategory,
        id: i32,
        claimed_by: Option<String>,
    },

    /// The instance already carries a terminal outcome.
    #[error("{category} {id} has already been decided ({status})")]
    AlreadyDecided {
        category: ReviewCategory,
        id: i32,
        status: String,
    },

    #[error("{category} {id} was not found")]
    NotFound { category: ReviewCategory, id: i32 },

    #[error("Moderator applications are currently closed")]
    ApplicationsClosed,

    #[error("{0} is already a staff member")]
    AlreadyStaff(String),

    /// Last application was denied less than the cooldown ago.
    #[error("Applications may be resubmitted after {eligible_at}")]
    ReapplyCooldown { eligible_at: DateTime<Utc> },

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
}

impl ReviewError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DuplicatePending { .. } => "duplicate_pending",
            Self::AlreadyClaimed { .. } => "already_claimed",
            Self::AlreadyDecided { .. } => "already_decided",
            Self::NotFound { .. } => "not_found",
            Self::ApplicationsClosed => "applications_closed",
            Self::AlreadyStaff(_) => "already_staff",
            Self::ReapplyCooldown { .. } => "reapply_cooldown",
            Self::Internal(_) => "internal",
            Self::Storage(_) => "storage",
        }
    }
}

/// Converts review errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `AlreadyStaff`
/// - 403 Forbidden - For `ApplicationsClosed` and `ReapplyCooldown`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `DuplicatePending`, `AlreadyClaimed` and `AlreadyDecided`
/// - 500 Internal Server Error - For `Internal` and `Storage`
impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) | Self::AlreadyStaff(_) => StatusCode::BAD_REQUEST,
            Self::ApplicationsClosed | Self::ReapplyCooldown { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicatePending { .. }
            | Self::AlreadyClaimed { .. }
            | Self::AlreadyDecided { .. } => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Storage(_) => {
                return InternalServerError(self).into_response()
            }
        };

        (status, Json(ErrorDto::new(self.kind(), self.to_string()))).into_response()
    }
}
