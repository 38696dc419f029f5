//! Review workflow DTOs: categories, outcomes and the submitted forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The kind of instance moving through the review workflow.
///
/// Accepts the plural and hyphenated spellings used by the panel's URLs when
/// deserialized from a path segment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewCategory {
    #[serde(alias = "application", alias = "applications", alias = "mod-application")]
    ModApplication,
    #[serde(alias = "appeals")]
    Appeal,
    #[serde(alias = "reports", alias = "admin-reports")]
    Report,
}

impl ReviewCategory {
    pub const ALL: [ReviewCategory; 3] = [
        ReviewCategory::ModApplication,
        ReviewCategory::Appeal,
        ReviewCategory::Report,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewCategory::ModApplication => "mod_application",
            ReviewCategory::Appeal => "appeal",
            ReviewCategory::Report => "report",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Human readable name used in messages and notifications.
    pub fn display_name(self) -> &'static str {
        match self {
            ReviewCategory::ModApplication => "moderator application",
            ReviewCategory::Appeal => "punishment appeal",
            ReviewCategory::Report => "player report",
        }
    }

    /// Path of the staff page showing a single instance, relative to the app URL.
    pub fn view_path(self, id: i32) -> String {
        match self {
            ReviewCategory::ModApplication => format!("/staff/applications/view/{}", id),
            ReviewCategory::Appeal => format!("/staff/appeals/{}", id),
            ReviewCategory::Report => format!("/staff/admin-reports/{}", id),
        }
    }
}

impl fmt::Display for ReviewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final decision recorded by `decide`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[serde(
        alias = "approved",
        alias = "accept",
        alias = "accepted",
        alias = "close",
        alias = "closed"
    )]
    Approve,
    #[serde(alias = "denied", alias = "reject", alias = "rejected")]
    Deny,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PunishmentKind {
    Ban,
    Mute,
}

impl PunishmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PunishmentKind::Ban => "ban",
            PunishmentKind::Mute => "mute",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ban" => Some(PunishmentKind::Ban),
            "mute" => Some(PunishmentKind::Mute),
            _ => None,
        }
    }
}

/// Moderator application form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ApplicationForm {
    pub real_name: String,
    pub age: String,
    pub timezone: String,
    pub discord: String,
    pub experience: String,
    pub motivation: String,
    pub availability: String,
    pub scenario1: String,
    pub scenario2: String,
}

/// Appeal against a ban or mute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AppealForm {
    pub punishment_id: i32,
    pub punishment_kind: PunishmentKind,
    pub reason: String,
}

/// Report filed against another player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReportForm {
    pub reported_username: String,
    pub report_type: String,
    pub evidence_link: String,
    #[serde(default)]
    pub extra_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DecideReviewDto {
    pub outcome: Outcome,
    #[serde(default)]
    pub response: Option<String>,
}

/// A review instance as shown to staff.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub category: ReviewCategory,
    pub subject: String,
    /// Category-specific status label, e.g. `reviewing` or `accepted`.
    pub status: String,
    pub claimed_by: Option<String>,
    pub handled_by: Option<String>,
    pub response: Option<String>,
    /// The submitted form, shaped by `category`.
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub punishment_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub handled_at: Option<DateTime<Utc>>,
}

/// Which workflow states a staff list shows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewListFilter {
    /// Pending and in review.
    #[default]
    Open,
    /// Approved and denied.
    Decided,
    /// Every state, open ones first.
    All,
}

/// A player's own application or appeal as they see it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SubmissionStatusDto {
    pub id: i32,
    /// Category-specific status label.
    pub status: String,
    /// Message left by the staff member who decided it.
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub handled_at: Option<DateTime<Utc>>,
}

/// Whether the current player may submit a moderator application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ApplyStatusDto {
    pub applications_open: bool,
    pub can_apply: bool,
    /// Why `can_apply` is false.
    pub reason: Option<String>,
    pub current_application: Option<SubmissionStatusDto>,
    /// Most recent decided applications, newest first.
    pub previous_applications: Vec<SubmissionStatusDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ToggleApplicationsDto {
    pub applications_open: bool,
}
