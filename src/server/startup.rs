use serenity::http::Http;
use std::sync::Arc;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    model::review::ReviewCategory,
    server::{
        config::Config,
        error::AppError,
        service::{
            game_sync::GameSync,
            notification::{DiscordWebhookNotifier, NoopNotifier, Notifier},
        },
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in their own table inside the same Sqlite database and expire after seven
/// days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for outgoing requests.
///
/// Redirects are disabled so a configured URL can never bounce a request (and the plugin
/// secret) to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Builds the review notifier from the configured Discord webhooks.
///
/// Falls back to [`NoopNotifier`] when no webhook URL is configured.
pub fn setup_notifier(config: &Config) -> Arc<dyn Notifier> {
    let webhooks = [
        (
            ReviewCategory::ModApplication,
            &config.application_webhook_url,
        ),
        (ReviewCategory::Appeal, &config.appeal_webhook_url),
        (ReviewCategory::Report, &config.report_webhook_url),
    ];

    let notifier = webhooks
        .into_iter()
        .filter_map(|(category, url)| url.as_ref().map(|url| (category, url)))
        .fold(
            DiscordWebhookNotifier::new(Arc::new(Http::new(""))),
            |notifier, (category, url)| notifier.with_webhook(category, url.clone()),
        );

    if notifier.has_webhooks() {
        Arc::new(notifier)
    } else {
        tracing::warn!("No Discord webhook configured, review notifications are disabled");
        Arc::new(NoopNotifier)
    }
}

/// Builds the game server sync client; syncing is disabled without `PLUGIN_SYNC_URL`.
pub fn setup_game_sync(config: &Config, http_client: reqwest::Client) -> GameSync {
    let game_sync = GameSync::new(
        http_client,
        config.plugin_sync_url.clone(),
        config.plugin_secret_key.clone(),
    );

    if !game_sync.is_enabled() {
        tracing::info!("PLUGIN_SYNC_URL not set, rank changes will not be synced");
    }

    game_sync
}
