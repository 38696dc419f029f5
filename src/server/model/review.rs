//! Review workflow domain models.
//!
//! A review instance is one moderator application, punishment appeal or player report.
//! All three share the same four states; only the labels written to storage differ per
//! category (see [`ReviewStatus::label`]).

use chrono::{DateTime, Utc};

use crate::{
    model::review::{
        AppealForm, ApplicationForm, ApplyStatusDto, Outcome, ReportForm, ReviewCategory,
        ReviewDto, ReviewListFilter, SubmissionStatusDto,
    },
    server::error::{internal::InternalError, review::ReviewError},
};

/// Workflow state of a review instance.
///
/// Ordered the way staff lists sort mixed states: pending, in review, approved, denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReviewStatus {
    Pending,
    InReview,
    Approved,
    Denied,
}

impl ReviewStatus {
    /// States from which an instance can still be claimed or decided.
    pub const OPEN: [ReviewStatus; 2] = [ReviewStatus::Pending, ReviewStatus::InReview];

    pub const DECIDED: [ReviewStatus; 2] = [ReviewStatus::Approved, ReviewStatus::Denied];

    pub const ALL: [ReviewStatus; 4] = [
        ReviewStatus::Pending,
        ReviewStatus::InReview,
        ReviewStatus::Approved,
        ReviewStatus::Denied,
    ];

    /// States selected by a list filter.
    pub fn matching(filter: ReviewListFilter) -> &'static [ReviewStatus] {
        match filter {
            ReviewListFilter::Open => &Self::OPEN,
            ReviewListFilter::Decided => &Self::DECIDED,
            ReviewListFilter::All => &Self::ALL,
        }
    }

    /// Storage label of this state for the given category.
    ///
    /// | category        | pending | in review | approve  | deny   |
    /// |-----------------|---------|-----------|----------|--------|
    /// | mod_application | pending | reviewing | approved | denied |
    /// | appeal          | pending | claimed   | accepted | denied |
    /// | report          | pending | claimed   | closed   | denied |
    pub fn label(self, category: ReviewCategory) -> &'static str {
        match (self, category) {
            (ReviewStatus::Pending, _) => "pending",
            (ReviewStatus::InReview, ReviewCategory::ModApplication) => "reviewing",
            (ReviewStatus::InReview, _) => "claimed",
            (ReviewStatus::Approved, ReviewCategory::ModApplication) => "approved",
            (ReviewStatus::Approved, ReviewCategory::Appeal) => "accepted",
            (ReviewStatus::Approved, ReviewCategory::Report) => "closed",
            (ReviewStatus::Denied, _) => "denied",
        }
    }

    /// Inverse of [`ReviewStatus::label`]; labels of other categories do not match.
    pub fn from_label(category: ReviewCategory, label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label(category) == label)
    }

    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Approve => ReviewStatus::Approved,
            Outcome::Deny => ReviewStatus::Denied,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ReviewStatus::Approved | ReviewStatus::Denied)
    }
}

const MAX_REAL_NAME: usize = 50;
const MAX_EXPERIENCE: usize = 500;
const MAX_MOTIVATION: usize = 500;
const MAX_AVAILABILITY: usize = 300;
const MAX_SCENARIO: usize = 400;

/// Typed form submitted with an instance, one variant per category.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewPayload {
    ModApplication(ApplicationForm),
    Appeal(AppealForm),
    Report(ReportForm),
}

impl ReviewPayload {
    pub fn category(&self) -> ReviewCategory {
        match self {
            ReviewPayload::ModApplication(_) => ReviewCategory::ModApplication,
            ReviewPayload::Appeal(_) => ReviewCategory::Appeal,
            ReviewPayload::Report(_) => ReviewCategory::Report,
        }
    }

    /// Punishment an accepted appeal releases.
    pub fn punishment_id(&self) -> Option<i32> {
        match self {
            ReviewPayload::Appeal(form) => Some(form.punishment_id),
            _ => None,
        }
    }

    /// Checks required fields and length limits.
    ///
    /// # Returns
    /// - `Ok(())` - Payload may be stored
    /// - `Err(ReviewError::Validation)` - First offending field, with a message for the caller
    pub fn validate(&self) -> Result<(), ReviewError> {
        match self {
            ReviewPayload::ModApplication(form) => {
                let fields = [
                    ("real_name", &form.real_name, Some(MAX_REAL_NAME)),
                    ("age", &form.age, None),
                    ("timezone", &form.timezone, None),
                    ("discord", &form.discord, None),
                    ("experience", &form.experience, Some(MAX_EXPERIENCE)),
                    ("motivation", &form.motivation, Some(MAX_MOTIVATION)),
                    ("availability", &form.availability, Some(MAX_AVAILABILITY)),
                    ("scenario1", &form.scenario1, Some(MAX_SCENARIO)),
                    ("scenario2", &form.scenario2, Some(MAX_SCENARIO)),
                ];

                for (name, value, max) in fields {
                    require(name, value)?;
                    if let Some(max) = max {
                        limit(name, value, max)?;
                    }
                }

                Ok(())
            }
            ReviewPayload::Appeal(form) => require("reason", &form.reason),
            ReviewPayload::Report(form) => {
                require("reported_username", &form.reported_username)?;
                require("report_type", &form.report_type)?;
                require("evidence_link", &form.evidence_link)
            }
        }
    }

    /// One-line description used in notifications.
    pub fn summary(&self, subject: &str) -> String {
        match self {
            ReviewPayload::ModApplication(_) => {
                format!("A new moderator application has been submitted by **{}**.", subject)
            }
            ReviewPayload::Appeal(form) => format!(
                "An appeal for a **{}** has been submitted by **{}**.",
                form.punishment_kind.as_str(),
                subject
            ),
            ReviewPayload::Report(form) => format!(
                "**{}** reported **{}** for **{}**.",
                subject, form.reported_username, form.report_type
            ),
        }
    }

    pub fn to_json(&self) -> Result<String, InternalError> {
        let result = match self {
            ReviewPayload::ModApplication(form) => serde_json::to_string(form),
            ReviewPayload::Appeal(form) => serde_json::to_string(form),
            ReviewPayload::Report(form) => serde_json::to_string(form),
        };

        result.map_err(InternalError::PayloadEncode)
    }

    pub fn to_value(&self) -> serde_json::Value {
        let result = match self {
            ReviewPayload::ModApplication(form) => serde_json::to_value(form),
            ReviewPayload::Appeal(form) => serde_json::to_value(form),
            ReviewPayload::Report(form) => serde_json::to_value(form),
        };

        result.unwrap_or_default()
    }

    /// Decodes a stored payload for the given category.
    ///
    /// # Arguments
    /// - `id` - Review the payload belongs to, for error reporting
    pub fn from_json(category: ReviewCategory, id: i32, json: &str) -> Result<Self, InternalError> {
        let result = match category {
            ReviewCategory::ModApplication => {
                serde_json::from_str(json).map(ReviewPayload::ModApplication)
            }
            ReviewCategory::Appeal => serde_json::from_str(json).map(ReviewPayload::Appeal),
            ReviewCategory::Report => serde_json::from_str(json).map(ReviewPayload::Report),
        };

        result.map_err(|source| InternalError::MalformedPayload { id, source })
    }
}

fn require(name: &str, value: &str) -> Result<(), ReviewError> {
    if value.trim().is_empty() {
        return Err(ReviewError::Validation(format!("{} is required.", name)));
    }
    Ok(())
}

fn limit(name: &str, value: &str, max: usize) -> Result<(), ReviewError> {
    if value.chars().count() > max {
        return Err(ReviewError::Validation(format!(
            "{} must be at most {} characters.",
            name, max
        )));
    }
    Ok(())
}

/// One application, appeal or report with its workflow state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewInstance {
    pub id: i32,
    pub category: ReviewCategory,
    /// Username of the player who submitted the instance.
    pub subject: String,
    pub status: ReviewStatus,
    /// Set exactly while the instance is in review.
    pub claimed_by: Option<String>,
    pub handled_by: Option<String>,
    pub response: Option<String>,
    pub payload: ReviewPayload,
    pub created_at: DateTime<Utc>,
    pub handled_at: Option<DateTime<Utc>>,
}

impl ReviewInstance {
    /// Converts an entity model to a review instance at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - Row decoded
    /// - `Err(InternalError)` - Category, status label or payload does not decode
    pub fn from_entity(entity: entity::review::Model) -> Result<Self, InternalError> {
        let category =
            ReviewCategory::parse(&entity.category).ok_or(InternalError::UnknownCategory {
                id: entity.id,
                value: entity.category.clone(),
            })?;

        let status = ReviewStatus::from_label(category, &entity.status).ok_or(
            InternalError::UnknownStatus {
                id: entity.id,
                category: entity.category.clone(),
                value: entity.status.clone(),
            },
        )?;

        let payload = ReviewPayload::from_json(category, entity.id, &entity.payload)?;

        Ok(Self {
            id: entity.id,
            category,
            subject: entity.subject,
            status,
            claimed_by: entity.claimed_by,
            handled_by: entity.handled_by,
            response: entity.response,
            payload,
            created_at: entity.created_at,
            handled_at: entity.handled_at,
        })
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label(self.category)
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            category: self.category,
            status: self.status_label().to_string(),
            subject: self.subject,
            claimed_by: self.claimed_by,
            handled_by: self.handled_by,
            response: self.response,
            punishment_id: self.payload.punishment_id(),
            payload: self.payload.to_value(),
            created_at: self.created_at,
            handled_at: self.handled_at,
        }
    }

    /// The subject's own view of the instance: state and staff response, no form.
    pub fn into_status_dto(self) -> SubmissionStatusDto {
        SubmissionStatusDto {
            id: self.id,
            status: self.status_label().to_string(),
            response: self.response,
            created_at: self.created_at,
            handled_at: self.handled_at,
        }
    }
}

/// Parameters for inserting a new pending instance.
#[derive(Debug, Clone)]
pub struct NewReviewInstance {
    pub subject: String,
    pub payload: ReviewPayload,
    pub created_at: DateTime<Utc>,
}

/// Write applied by a successful compare-and-set on the instance status.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// `status := in review, claimed_by := actor`.
    Claim { actor: String },
    /// `status := outcome, handled_by := actor, claimed_by := NULL`, optionally releasing a
    /// punishment in the same transaction.
    Decide {
        status: ReviewStatus,
        actor: String,
        response: Option<String>,
        at: DateTime<Utc>,
        release_punishment: Option<i32>,
    },
}

impl Transition {
    pub fn target(&self) -> ReviewStatus {
        match self {
            Transition::Claim { .. } => ReviewStatus::InReview,
            Transition::Decide { status, .. } => *status,
        }
    }

    /// Applies the transition to an in-memory copy of the instance.
    pub fn apply(&self, instance: &mut ReviewInstance) {
        match self {
            Transition::Claim { actor } => {
                instance.status = ReviewStatus::InReview;
                instance.claimed_by = Some(actor.clone());
            }
            Transition::Decide {
                status,
                actor,
                response,
                at,
                ..
            } => {
                instance.status = *status;
                instance.claimed_by = None;
                instance.handled_by = Some(actor.clone());
                instance.response = response.clone();
                instance.handled_at = Some(*at);
            }
        }
    }
}

/// Whether a player may submit a moderator application right now.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyStatus {
    pub applications_open: bool,
    pub can_apply: bool,
    /// Why `can_apply` is false.
    pub reason: Option<String>,
    /// The player's open application, if any.
    pub current_application: Option<ReviewInstance>,
    /// The player's decided applications, newest first.
    pub previous_applications: Vec<ReviewInstance>,
}

impl ApplyStatus {
    pub fn into_dto(self) -> ApplyStatusDto {
        ApplyStatusDto {
            applications_open: self.applications_open,
            can_apply: self.can_apply,
            reason: self.reason,
            current_application: self
                .current_application
                .map(ReviewInstance::into_status_dto),
            previous_applications: self
                .previous_applications
                .into_iter()
                .map(ReviewInstance::into_status_dto)
                .collect(),
        }
    }
}
