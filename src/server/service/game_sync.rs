//! Asks the game server plugin to reload ranks after they change in the panel.

use serde::Serialize;

use crate::server::error::AppError;

#[derive(Serialize)]
struct SyncRequest<'a> {
    #[serde(rename = "secretKey")]
    secret_key: &'a str,
}

/// Client for the plugin's sync endpoint. Disabled when no URL is configured.
#[derive(Clone)]
pub struct GameSync {
    http_client: reqwest::Client,
    endpoint: Option<(String, String)>,
}

impl GameSync {
    /// Creates a sync client.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `url` - Plugin sync URL, `None` disables syncing
    /// - `secret_key` - Shared secret sent with every request
    pub fn new(http_client: reqwest::Client, url: Option<String>, secret_key: String) -> Self {
        Self {
            http_client,
            endpoint: url.map(|url| (url, secret_key)),
        }
    }

    pub fn disabled(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            endpoint: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Posts `{ "secretKey": ... }` to the plugin.
    ///
    /// # Returns
    /// - `Ok(())` - Plugin accepted the request, or syncing is disabled
    /// - `Err(AppError::ReqwestErr)` - Request failed or plugin answered with an error status
    pub async fn request_sync(&self) -> Result<(), AppError> {
        let Some((url, secret_key)) = &self.endpoint else {
            return Ok(());
        };

        self.http_client
            .post(url)
            .json(&SyncRequest { secret_key })
            .send()
            .await?
            .error_for_status()?;

        tracing::info!("Requested rank sync from game server");

        Ok(())
    }

    /// Like [`GameSync::request_sync`], but failures are only logged.
    pub async fn request_sync_logged(&self) {
        if let Err(err) = self.request_sync().await {
            tracing::warn!("Failed to request rank sync from game server: {}", err);
        }
    }
}
