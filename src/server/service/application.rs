//! Moderator application gate.
//!
//! Applications go through the shared review workflow. This service adds what only
//! applications have: the open/closed toggle, the staff check and the cooldown after a
//! denial.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::review::{ApplicationForm, ReviewCategory},
    server::{
        data::{review::ReviewRepository, server_setting::ServerSettingRepository},
        error::{review::ReviewError, AppError},
        model::{
            player::Player,
            review::{ApplyStatus, ReviewInstance, ReviewPayload, ReviewStatus},
        },
        service::{
            notification::Notifier,
            review::{reapply_at, reapply_eligible, ReviewWorkflow, REAPPLY_COOLDOWN_DAYS},
        },
    },
};

/// Decided applications listed in a player's status.
const PREVIOUS_APPLICATIONS_SHOWN: usize = 5;

/// Service providing business logic for moderator applications.
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    app_url: &'a str,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new ApplicationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Receives an event for each submitted application
    /// - `app_url` - Base URL used in notification links
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier, app_url: &'a str) -> Self {
        Self {
            db,
            notifier,
            app_url,
        }
    }

    /// Checks the toggle, the player's rank and the denial cooldown.
    async fn check_gate(&self, player: &Player) -> Result<(), ReviewError> {
        if !ServerSettingRepository::new(self.db)
            .applications_open()
            .await?
        {
            return Err(ReviewError::ApplicationsClosed);
        }

        if player.rank.is_staff() {
            return Err(ReviewError::AlreadyStaff(player.username.clone()));
        }

        let repo = ReviewRepository::new(self.db);
        let workflow = ReviewWorkflow::new(&repo, self.notifier, self.app_url);
        if let Some(last) = workflow
            .last_decided(ReviewCategory::ModApplication, &player.username)
            .await?
        {
            if denied_within_cooldown(&last) {
                return Err(ReviewError::ReapplyCooldown {
                    eligible_at: reapply_at(&last, REAPPLY_COOLDOWN_DAYS),
                });
            }
        }

        Ok(())
    }

    /// Reports whether `player` may apply and, if not, why, together with the player's
    /// open application and the outcomes of their recent ones.
    ///
    /// # Returns
    /// - `Ok(ApplyStatus)` - Current eligibility and application history
    /// - `Err(AppError)` - Database error or undecodable stored application
    pub async fn status(&self, player: &Player) -> Result<ApplyStatus, AppError> {
        let applications_open = ServerSettingRepository::new(self.db)
            .applications_open()
            .await?;

        let repo = ReviewRepository::new(self.db);
        let history = ReviewWorkflow::new(&repo, self.notifier, self.app_url)
            .history(ReviewCategory::ModApplication, &player.username)
            .await?;

        let current_application = history
            .iter()
            .find(|instance| ReviewStatus::OPEN.contains(&instance.status))
            .cloned();
        let previous_applications: Vec<_> = history
            .into_iter()
            .filter(|instance| instance.status.is_terminal())
            .take(PREVIOUS_APPLICATIONS_SHOWN)
            .collect();

        let reason = match self.check_gate(player).await {
            Ok(()) => current_application
                .as_ref()
                .map(|_| "You already have a pending application.".to_string()),
            Err(ReviewError::ApplicationsClosed) => Some(
                "Applications are currently closed. Please check back later when applications are reopened."
                    .to_string(),
            ),
            Err(ReviewError::AlreadyStaff(_)) => Some("You are already a staff member.".to_string()),
            Err(ReviewError::ReapplyCooldown { eligible_at }) => Some(format!(
                "You must wait {} days after a denied application before applying again. You may apply after {}.",
                REAPPLY_COOLDOWN_DAYS,
                eligible_at.format("%Y-%m-%d %H:%M UTC")
            )),
            Err(err) => return Err(err.into()),
        };

        Ok(ApplyStatus {
            applications_open,
            can_apply: reason.is_none(),
            reason,
            current_application,
            previous_applications,
        })
    }

    /// Submits a moderator application for `player`.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - Stored pending application
    /// - `Err(ReviewError::ApplicationsClosed)` - Toggle is off
    /// - `Err(ReviewError::AlreadyStaff)` - Player already holds a staff rank
    /// - `Err(ReviewError::ReapplyCooldown)` - Last application denied within the cooldown
    /// - `Err(ReviewError::Validation | DuplicatePending)` - From the review workflow
    pub async fn submit(
        &self,
        player: &Player,
        form: ApplicationForm,
    ) -> Result<ReviewInstance, AppError> {
        self.check_gate(player).await?;

        let repo = ReviewRepository::new(self.db);
        let instance = ReviewWorkflow::new(&repo, self.notifier, self.app_url)
            .submit(&player.username, ReviewPayload::ModApplication(form))
            .await?;

        Ok(instance)
    }

    /// Flips the applications toggle.
    ///
    /// # Returns
    /// - `Ok(bool)` - New state, `true` when applications are now open
    pub async fn toggle(&self, actor: &Player) -> Result<bool, AppError> {
        let settings = ServerSettingRepository::new(self.db);

        let open = !settings.applications_open().await?;
        settings.set_applications_open(open, &actor.username).await?;

        tracing::info!(
            "Moderator applications {} by {}",
            if open { "opened" } else { "closed" },
            actor.username
        );

        Ok(open)
    }
}

fn denied_within_cooldown(last: &ReviewInstance) -> bool {
    last.status == ReviewStatus::Denied
        && !reapply_eligible(last, Utc::now(), REAPPLY_COOLDOWN_DAYS)
}
