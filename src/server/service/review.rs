//! Review workflow shared by moderator applications, appeals and reports.
//!
//! ```text
//! Pending --claim--> InReview --decide--> Approved | Denied
//!    \______________decide_______________/
//! ```
//!
//! Every state change is a single compare-and-set in the [`ReviewStore`], so two staff
//! members racing to claim or decide the same instance can never both win. Terminal
//! instances are never written again.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::review::{Outcome, ReviewCategory, ReviewListFilter},
    server::{
        data::review::ReviewStore,
        error::review::ReviewError,
        model::review::{NewReviewInstance, ReviewInstance, ReviewPayload, ReviewStatus, Transition},
        service::notification::{Notifier, ReviewEvent},
    },
};

/// Days a player must wait after a denied application before applying again.
pub const REAPPLY_COOLDOWN_DAYS: i64 = 30;

/// Whether a subject whose last decision is `last` may submit again at `now`.
///
/// True only when `last` was denied at least `cooldown_days` ago. Instances without a
/// recorded `handled_at` fall back to their submission time.
pub fn reapply_eligible(last: &ReviewInstance, now: DateTime<Utc>, cooldown_days: i64) -> bool {
    last.status == ReviewStatus::Denied && now >= reapply_at(last, cooldown_days)
}

/// Earliest time a subject may submit again after `last` was decided.
pub fn reapply_at(last: &ReviewInstance, cooldown_days: i64) -> DateTime<Utc> {
    last.handled_at.unwrap_or(last.created_at) + Duration::days(cooldown_days)
}

/// Runs the review lifecycle against a [`ReviewStore`].
pub struct ReviewWorkflow<'a, S: ReviewStore> {
    store: &'a S,
    notifier: &'a dyn Notifier,
    app_url: &'a str,
}

impl<'a, S: ReviewStore> ReviewWorkflow<'a, S> {
    /// Creates a new workflow.
    ///
    /// # Arguments
    /// - `store` - Storage for review instances
    /// - `notifier` - Receives an event for every successful submission
    /// - `app_url` - Base URL used to build links in notifications
    pub fn new(store: &'a S, notifier: &'a dyn Notifier, app_url: &'a str) -> Self {
        Self {
            store,
            notifier,
            app_url,
        }
    }

    /// Validates and stores a new pending instance, then notifies staff.
    ///
    /// The duplicate check is part of the store's insert, so concurrent submissions by
    /// one subject leave exactly one open instance. The notification is sent after the
    /// instance is stored; a failed notification is logged and does not undo the
    /// submission.
    ///
    /// # Arguments
    /// - `subject` - Username of the submitting player
    /// - `payload` - The submitted form, which also selects the category
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - The stored pending instance
    /// - `Err(ReviewError::Validation)` - Form is incomplete or too long
    /// - `Err(ReviewError::DuplicatePending)` - Subject already has an open instance in
    ///   this category
    /// - `Err(ReviewError::Storage)` - Database error
    pub async fn submit(
        &self,
        subject: &str,
        payload: ReviewPayload,
    ) -> Result<ReviewInstance, ReviewError> {
        payload.validate()?;

        let category = payload.category();
        let instance = self
            .store
            .insert(NewReviewInstance {
                subject: subject.to_string(),
                payload,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!("{} {} submitted by {}", category, instance.id, subject);

        let event = ReviewEvent::new(&instance, self.app_url);
        if let Err(err) = self.notifier.send(&event).await {
            tracing::warn!(
                "Failed to send notification for {} {}: {}",
                category,
                instance.id,
                err
            );
        }

        Ok(instance)
    }

    /// Takes ownership of a pending instance.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - Instance now in review and claimed by `actor`
    /// - `Err(ReviewError::NotFound)` - No instance `id` in `category`
    /// - `Err(ReviewError::AlreadyClaimed)` - Someone claimed it first
    /// - `Err(ReviewError::AlreadyDecided)` - Instance is terminal
    pub async fn claim(
        &self,
        category: ReviewCategory,
        id: i32,
        actor: &str,
    ) -> Result<ReviewInstance, ReviewError> {
        let transition = Transition::Claim {
            actor: actor.to_string(),
        };

        let claimed = self
            .store
            .compare_and_set_status(category, id, &[ReviewStatus::Pending], &transition)
            .await?;

        let instance = self.get(category, id).await?;

        if !claimed {
            if instance.status.is_terminal() {
                return Err(ReviewError::AlreadyDecided {
                    category,
                    id,
                    status: instance.status_label().to_string(),
                });
            }
            return Err(ReviewError::AlreadyClaimed {
                category,
                id,
                claimed_by: instance.claimed_by,
            });
        }

        tracing::info!("{} {} claimed by {}", category, id, actor);

        Ok(instance)
    }

    /// Records the final outcome of a pending or in-review instance.
    ///
    /// Any staff member may decide an instance, claimed or not. Approving an appeal
    /// releases the appealed punishment atomically with the decision.
    ///
    /// # Arguments
    /// - `response` - Optional message for the subject; blank responses are dropped
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - The decided instance
    /// - `Err(ReviewError::NotFound)` - No instance `id` in `category`
    /// - `Err(ReviewError::AlreadyDecided)` - Instance already terminal; nothing changed
    /// - `Err(ReviewError::Storage)` - Write failed; nothing changed
    pub async fn decide(
        &self,
        category: ReviewCategory,
        id: i32,
        actor: &str,
        outcome: Outcome,
        response: Option<String>,
    ) -> Result<ReviewInstance, ReviewError> {
        let instance = self.get(category, id).await?;
        if instance.status.is_terminal() {
            return Err(already_decided(&instance));
        }

        let status = ReviewStatus::from_outcome(outcome);
        let release_punishment = match (category, status) {
            (ReviewCategory::Appeal, ReviewStatus::Approved) => instance.payload.punishment_id(),
            _ => None,
        };
        let transition = Transition::Decide {
            status,
            actor: actor.to_string(),
            response: response
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            at: Utc::now(),
            release_punishment,
        };

        let decided = self
            .store
            .compare_and_set_status(category, id, &ReviewStatus::OPEN, &transition)
            .await?;

        let instance = self.get(category, id).await?;
        if !decided {
            return Err(already_decided(&instance));
        }

        tracing::info!(
            "{} {} {} by {}",
            category,
            id,
            instance.status_label(),
            actor
        );

        Ok(instance)
    }

    /// Gets one instance.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - Instance found
    /// - `Err(ReviewError::NotFound)` - No instance `id` in `category`
    pub async fn get(&self, category: ReviewCategory, id: i32) -> Result<ReviewInstance, ReviewError> {
        self.store
            .get_instance(category, id)
            .await?
            .ok_or(ReviewError::NotFound { category, id })
    }

    /// Instances of `category` selected by `filter`.
    ///
    /// Open and decided lists are newest first. The full list is grouped by state
    /// (pending, in review, approved, denied) and newest first within each state.
    pub async fn list(
        &self,
        category: ReviewCategory,
        filter: ReviewListFilter,
    ) -> Result<Vec<ReviewInstance>, ReviewError> {
        let mut instances = self
            .store
            .list_by_status(category, ReviewStatus::matching(filter))
            .await?;

        if filter == ReviewListFilter::All {
            instances.sort_by_key(|instance| instance.status);
        }

        Ok(instances)
    }

    /// Every instance `subject` submitted in `category`, newest first.
    pub async fn history(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Vec<ReviewInstance>, ReviewError> {
        self.store.list_for_subject(category, subject).await
    }

    /// Most recent decided instance of `subject` in `category`.
    pub async fn last_decided(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Option<ReviewInstance>, ReviewError> {
        self.store.get_last_decided(category, subject).await
    }
}

fn already_decided(instance: &ReviewInstance) -> ReviewError {
    ReviewError::AlreadyDecided {
        category: instance.category,
        id: instance.id,
        status: instance.status_label().to_string(),
    }
}
