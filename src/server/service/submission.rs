//! Player-facing appeal and report submission.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::review::{AppealForm, ReportForm},
    server::{
        data::{punishment::PunishmentRepository, review::ReviewRepository},
        error::{review::ReviewError, AppError},
        model::{
            player::Player,
            review::{ReviewInstance, ReviewPayload},
        },
        service::{notification::Notifier, review::ReviewWorkflow},
    },
};

/// Service that checks a player's appeal or report before it enters the review workflow.
pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    app_url: &'a str,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new SubmissionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Receives an event for each submission
    /// - `app_url` - Base URL used in notification links
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier, app_url: &'a str) -> Self {
        Self {
            db,
            notifier,
            app_url,
        }
    }

    /// Appeals one of the player's own active punishments.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - Stored pending appeal
    /// - `Err(AppError::NotFound)` - No such punishment on this player
    /// - `Err(ReviewError::Validation)` - Kind does not match or punishment already expired
    /// - `Err(ReviewError::DuplicatePending)` - Player already has an open appeal
    pub async fn submit_appeal(
        &self,
        player: &Player,
        form: AppealForm,
    ) -> Result<ReviewInstance, AppError> {
        let punishment = PunishmentRepository::new(self.db)
            .find_by_id(form.punishment_id)
            .await?
            .filter(|p| p.uuid == player.uuid)
            .ok_or_else(|| AppError::NotFound("Punishment not found.".to_string()))?;

        if punishment.kind != Some(form.punishment_kind) {
            return Err(ReviewError::Validation(
                "Punishment type does not match the selected punishment.".to_string(),
            )
            .into());
        }

        if !punishment.is_active(Utc::now().timestamp_millis()) {
            return Err(ReviewError::Validation(
                "This punishment is no longer active.".to_string(),
            )
            .into());
        }

        let instance = self
            .workflow_submit(player, ReviewPayload::Appeal(form))
            .await?;

        Ok(instance)
    }

    /// Files a report against another player.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - Stored pending report
    /// - `Err(ReviewError::Validation)` - Missing fields or the player reported themselves
    /// - `Err(ReviewError::DuplicatePending)` - Player already has an open report
    pub async fn submit_report(
        &self,
        player: &Player,
        form: ReportForm,
    ) -> Result<ReviewInstance, AppError> {
        if form
            .reported_username
            .trim()
            .eq_ignore_ascii_case(&player.username)
        {
            return Err(ReviewError::Validation("You cannot report yourself.".to_string()).into());
        }

        let instance = self
            .workflow_submit(player, ReviewPayload::Report(form))
            .await?;

        Ok(instance)
    }

    async fn workflow_submit(
        &self,
        player: &Player,
        payload: ReviewPayload,
    ) -> Result<ReviewInstance, ReviewError> {
        let repo = ReviewRepository::new(self.db);
        ReviewWorkflow::new(&repo, self.notifier, self.app_url)
            .submit(&player.username, payload)
            .await
    }
}
