//! Channel notifications for newly posted jobs.
//!
//! Sends a plain-text message to a Telegram channel through the Bot API's
//! `sendMessage` method. Failures are returned to the caller; nothing is
//! retried here.

use crate::config::DEFAULT_TELEGRAM_API_BASE;
use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Neither a bot token nor a chat id is configured
    #[error("missing_auth_keys")]
    MissingAuthKeys,

    /// The API rejected the request or could not be reached
    #[error("wrong_auth_keys: {0}")]
    WrongAuthKeys(String),
}

impl NotificationError {
    /// Stable short code for the failure
    pub fn code(&self) -> &'static str {
        match self {
            NotificationError::MissingAuthKeys => "missing_auth_keys",
            NotificationError::WrongAuthKeys(_) => "wrong_auth_keys",
        }
    }
}

/// Bot credentials and endpoint
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: Option<String>,
    pub chat_id: Option<String>,
    /// Bot API root, e.g. `https://api.telegram.org`
    pub api_base: String,
    pub timeout_ms: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            chat_id: None,
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn endpoint(api_base: &str, token: &str) -> Result<Url, NotificationError> {
    let mut base = api_base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    // "./" keeps the `bot<id>:<secret>` segment from parsing as a scheme
    Url::parse(&base)
        .and_then(|u| u.join(&format!("./bot{}/sendMessage", token)))
        .map_err(|e| NotificationError::WrongAuthKeys(format!("invalid API base {}: {}", api_base, e)))
}

/// Text announced for a new job ad
pub fn new_job_message(title: &str, url: &str) -> String {
    format!("Nova vaga: {}\n{}", title.trim(), url)
}

/// Post `message` to the configured channel.
///
/// Returns `MissingAuthKeys` without touching the network when neither the
/// token nor the chat id is set. Any transport failure, non-success status
/// or `"ok": false` reply maps to `WrongAuthKeys`.
///
/// This blocks on a `reqwest::blocking` client, which panics when used from
/// inside a tokio runtime; async callers use [`post_channel_message_async`].
pub fn post_channel_message(config: &TelegramConfig, message: &str) -> Result<(), NotificationError> {
    let token = non_empty(&config.token);
    let chat_id = non_empty(&config.chat_id);
    if token.is_none() && chat_id.is_none() {
        return Err(NotificationError::MissingAuthKeys);
    }

    let url = endpoint(&config.api_base, token.unwrap_or_default())?;
    let client = Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()
        .map_err(|e| NotificationError::WrongAuthKeys(format!("Failed to build HTTP client: {}", e)))?;

    debug!("Posting channel message to {}", url.path());
    let res = client
        .post(url)
        .json(&SendMessage {
            chat_id: chat_id.unwrap_or_default(),
            text: message,
        })
        .send()
        .map_err(|e| NotificationError::WrongAuthKeys(e.to_string()))?;

    let status = res.status();
    let reply: ApiResponse = res
        .json()
        .map_err(|e| NotificationError::WrongAuthKeys(format!("unreadable reply ({}): {}", status, e)))?;

    if !status.is_success() || !reply.ok {
        return Err(NotificationError::WrongAuthKeys(
            reply.description.unwrap_or_else(|| status.to_string()),
        ));
    }

    info!("Posted message to channel {}", chat_id.unwrap_or_default());
    Ok(())
}

/// Run [`post_channel_message`] on tokio's blocking pool
pub async fn post_channel_message_async(
    config: TelegramConfig,
    message: String,
) -> Result<(), NotificationError> {
    tokio::task::spawn_blocking(move || post_channel_message(&config, &message))
        .await
        .map_err(|e| NotificationError::WrongAuthKeys(format!("Notification task failed: {}", e)))?
}
