//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - Notifier that announces new applications, appeals and reports
//! - Game server sync client used after rank changes
//! - Application URL for generating links

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{game_sync::GameSync, notification::Notifier};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool, `reqwest::Client` and the
/// notifier are reference counted, and `GameSync` wraps a `reqwest::Client`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured without redirects. Shared with `game_sync`.
    pub http_client: reqwest::Client,

    /// Receives an event for every new review instance.
    ///
    /// A Discord webhook notifier when at least one webhook URL is configured, otherwise
    /// a no-op.
    pub notifier: Arc<dyn Notifier>,

    /// Asks the game server plugin to reload ranks after a rank change.
    pub game_sync: GameSync,

    /// Application base URL for generating links in notifications.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `notifier` - Review notification sink
    /// - `game_sync` - Game server sync client
    /// - `app_url` - Application base URL
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        notifier: Arc<dyn Notifier>,
        game_sync: GameSync,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            notifier,
            game_sync,
            app_url,
        }
    }
}
