//! Review factory for creating applications, appeals and reports.
//!
//! Payloads are written as the JSON documents the server stores, so rows created here
//! round-trip through the server's repositories.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test review instances.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    subject: String,
    status: String,
    claimed_by: Option<String>,
    handled_by: Option<String>,
    response: Option<String>,
    payload: serde_json::Value,
    punishment_id: Option<i32>,
    created_at: DateTime<Utc>,
    handled_at: Option<DateTime<Utc>>,
}

impl<'a> ReviewFactory<'a> {
    /// Pending moderator application with a complete, valid form.
    pub fn application(db: &'a DatabaseConnection, subject: impl Into<String>) -> Self {
        Self::with_payload(
            db,
            "mod_application",
            subject,
            json!({
                "real_name": "Sam",
                "age": "19",
                "timezone": "UTC",
                "discord": "sam#0001",
                "experience": "Moderated a survival server for a year.",
                "motivation": "I want to help keep the server friendly.",
                "availability": "Evenings and weekends.",
                "scenario1": "Warn first, then mute if it continues.",
                "scenario2": "Collect evidence and escalate to an admin."
            }),
        )
    }

    /// Pending appeal against the given punishment.
    pub fn appeal(
        db: &'a DatabaseConnection,
        subject: impl Into<String>,
        punishment_id: i32,
    ) -> Self {
        let mut factory = Self::with_payload(
            db,
            "appeal",
            subject,
            json!({
                "punishment_id": punishment_id,
                "punishment_kind": "ban",
                "reason": "I was not cheating, my client lagged."
            }),
        );
        factory.punishment_id = Some(punishment_id);
        factory
    }

    /// Pending report against `reported`.
    pub fn report(
        db: &'a DatabaseConnection,
        subject: impl Into<String>,
        reported: impl Into<String>,
    ) -> Self {
        let reported: String = reported.into();
        Self::with_payload(
            db,
            "report",
            subject,
            json!({
                "reported_username": reported,
                "report_type": "hacking",
                "evidence_link": "https://example.com/clip.mp4",
                "extra_notes": null
            }),
        )
    }

    fn with_payload(
        db: &'a DatabaseConnection,
        category: &str,
        subject: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            db,
            category: category.to_string(),
            subject: subject.into(),
            status: "pending".to_string(),
            claimed_by: None,
            handled_by: None,
            response: None,
            payload,
            punishment_id: None,
            created_at: Utc::now(),
            handled_at: None,
        }
    }

    /// Sets the stored status label, e.g. `"reviewing"` or `"denied"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn claimed_by(mut self, claimed_by: impl Into<String>) -> Self {
        self.claimed_by = Some(claimed_by.into());
        self
    }

    /// Marks the instance as decided by `handled_by` at `handled_at`.
    pub fn handled(
        mut self,
        handled_by: impl Into<String>,
        response: impl Into<String>,
        handled_at: DateTime<Utc>,
    ) -> Self {
        self.handled_by = Some(handled_by.into());
        self.response = Some(response.into());
        self.handled_at = Some(handled_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            category: ActiveValue::Set(self.category),
            subject: ActiveValue::Set(self.subject),
            status: ActiveValue::Set(self.status),
            claimed_by: ActiveValue::Set(self.claimed_by),
            handled_by: ActiveValue::Set(self.handled_by),
            response: ActiveValue::Set(self.response),
            payload: ActiveValue::Set(self.payload.to_string()),
            punishment_id: ActiveValue::Set(self.punishment_id),
            created_at: ActiveValue::Set(self.created_at),
            handled_at: ActiveValue::Set(self.handled_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending moderator application for `subject`.
pub async fn create_application(
    db: &DatabaseConnection,
    subject: &str,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::application(db, subject).build().await
}
