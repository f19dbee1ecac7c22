//! Persistence collaborator: saves a denormalized copy of the configuration for a signed-in
//! user whenever a link is generated.
//!
//! Nothing on the render path depends on it. [`save_quietly`] logs failures and moves on.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::theme;

/// Time of day at which devices refresh the wallpaper.
pub const DAILY_UPDATE_TIME: &str = "00:01";

/// Body of a save-config call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfigRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub phone_model: String,
    pub mode: String,
    pub theme_name: String,
    pub daily_update_time_wallpaper: String,
    /// RFC 3339, UTC.
    pub link_generate_time: String,
    pub dot_style: String,
    pub inspiration: String,
}

impl SaveConfigRequest {
    /// Denormalize `config` for `user_id` at `generated_at`.
    pub fn new(user_id: &str, config: &Configuration, generated_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            phone_model: config.phone_model.clone(),
            mode: config.mode.as_str().to_string(),
            theme_name: theme::resolve(config.theme_id).name.to_string(),
            daily_update_time_wallpaper: DAILY_UPDATE_TIME.to_string(),
            link_generate_time: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            dot_style: config.shape.as_str().to_string(),
            inspiration: config.quote_type.as_str().to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("user id is required")]
    MissingUser,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store rejected the save with status {0}")]
    Rejected(u16),
}

/// Destination for saved configurations.
pub trait ConfigStore: Send + Sync {
    fn save(
        &self,
        request: &SaveConfigRequest,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Posts requests as JSON to an HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpConfigStore {
    client: Client,
    url: String,
}

impl HttpConfigStore {
    pub fn new(url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ConfigStore for HttpConfigStore {
    async fn save(&self, request: &SaveConfigRequest) -> Result<(), StoreError> {
        if request.user_id.trim().is_empty() {
            return Err(StoreError::MissingUser);
        }
        let resp = self.client.post(&self.url).json(request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}

/// Save and swallow the outcome; returns whether the save succeeded.
pub async fn save_quietly<S: ConfigStore>(store: &S, request: &SaveConfigRequest) -> bool {
    match store.save(request).await {
        Ok(()) => {
            tracing::info!(user = %request.user_id, mode = %request.mode, "configuration saved");
            true
        }
        Err(e) => {
            tracing::warn!(user = %request.user_id, error = %e, "could not save configuration");
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persist/store.rs"]
mod tests;
