//! Staff notifications for newly submitted review instances.
//!
//! The workflow emits a [`ReviewEvent`] after an instance has been stored. Delivery goes
//! through the [`Notifier`] trait; the production implementation executes a Discord
//! webhook per category, and categories without a configured webhook are skipped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::{
    all::{CreateEmbed, CreateEmbedFooter, ExecuteWebhook, Timestamp, Webhook},
    http::Http,
};
use std::{collections::HashMap, sync::Arc};

use crate::{
    model::review::ReviewCategory,
    server::{error::AppError, model::review::ReviewInstance},
};

/// A newly submitted instance, with everything a notification needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEvent {
    pub category: ReviewCategory,
    pub id: i32,
    pub subject: String,
    pub summary: String,
    /// Staff page for the instance.
    pub link: String,
    /// Public profile page of the subject.
    pub profile_link: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewEvent {
    /// Builds the event for `instance`, resolving links against `app_url`.
    pub fn new(instance: &ReviewInstance, app_url: &str) -> Self {
        let app_url = app_url.trim_end_matches('/');

        Self {
            category: instance.category,
            id: instance.id,
            subject: instance.subject.clone(),
            summary: instance.payload.summary(&instance.subject),
            link: format!("{}{}", app_url, instance.category.view_path(instance.id)),
            profile_link: format!("{}/profile/{}", app_url, instance.subject),
            created_at: instance.created_at,
        }
    }
}

/// Delivers review events to staff.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, event: &ReviewEvent) -> Result<(), AppError>;
}

/// Notifier used when no webhook is configured.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, event: &ReviewEvent) -> Result<(), AppError> {
        tracing::debug!(
            "No notifier configured, skipping notification for {} {}",
            event.category,
            event.id
        );
        Ok(())
    }
}

/// Posts review events to Discord through per-category webhooks.
pub struct DiscordWebhookNotifier {
    http: Arc<Http>,
    webhooks: HashMap<ReviewCategory, String>,
}

impl DiscordWebhookNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            webhooks: HashMap::new(),
        }
    }

    /// Routes events of `category` to the webhook at `url`.
    pub fn with_webhook(mut self, category: ReviewCategory, url: impl Into<String>) -> Self {
        self.webhooks.insert(category, url.into());
        self
    }

    pub fn has_webhooks(&self) -> bool {
        !self.webhooks.is_empty()
    }

    /// Builds the webhook message: an `@everyone` ping with one embed linking the
    /// subject's profile and the staff page.
    pub fn build_message(event: &ReviewEvent) -> ExecuteWebhook {
        let (title, color) = embed_style(event.category);

        let mut embed = CreateEmbed::new()
            .title(title)
            .description(&event.summary)
            .color(color)
            .field(
                "Player",
                format!("[{}]({})", event.subject, event.profile_link),
                true,
            )
            .field(
                format!("View {}", view_label(event.category)),
                format!("[Click Here to View]({})", event.link),
                true,
            )
            .footer(CreateEmbedFooter::new(format!(
                "{} ID: {}",
                view_label(event.category),
                event.id
            )));

        if let Ok(timestamp) = Timestamp::from_unix_timestamp(event.created_at.timestamp()) {
            embed = embed.timestamp(timestamp);
        }

        ExecuteWebhook::new().content("@everyone").embed(embed)
    }
}

fn embed_style(category: ReviewCategory) -> (&'static str, u32) {
    match category {
        ReviewCategory::ModApplication => ("New Moderator Application", 3447003),
        ReviewCategory::Appeal => ("New Punishment Appeal Submitted", 16762880),
        ReviewCategory::Report => ("New Player Report", 15158332),
    }
}

fn view_label(category: ReviewCategory) -> &'static str {
    match category {
        ReviewCategory::ModApplication => "Application",
        ReviewCategory::Appeal => "Appeal",
        ReviewCategory::Report => "Report",
    }
}

#[async_trait]
impl Notifier for DiscordWebhookNotifier {
    async fn send(&self, event: &ReviewEvent) -> Result<(), AppError> {
        let Some(url) = self.webhooks.get(&event.category) else {
            tracing::debug!("No webhook configured for {}", event.category);
            return Ok(());
        };

        let webhook = Webhook::from_url(&self.http, url).await?;
        webhook
            .execute(&self.http, false, Self::build_message(event))
            .await?;

        tracing::info!(
            "Sent Discord notification for {} {}",
            event.category,
            event.id
        );

        Ok(())
    }
}
