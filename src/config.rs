//! Site settings
//!
//! Settings are loaded once by the caller and passed down explicitly: the
//! compositor only ever sees a [`ThumbnailRequest`], the notifier only a
//! `TelegramConfig`.

use crate::{Error, Result, ThumbnailRequest};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WEBSITE_NAME: &str = "PyJobs";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Settings file contents. Missing keys fall back to [`Settings::default`].
///
/// # Examples
///
/// ```
/// let s: jobthumb::Settings = serde_json::from_str(r#"{"website_name": "RustJobs"}"#).unwrap();
/// assert_eq!(s.website_name, "RustJobs");
/// assert_eq!(s.telegram_api_base, "https://api.telegram.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `thumb_base.png` and the `Montserrat/` fonts
    pub thumbnails_base_folder: PathBuf,
    /// Site name used in the attribution line
    pub website_name: String,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: String,
    /// Timeout for notification requests in milliseconds
    pub telegram_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thumbnails_base_folder: PathBuf::from("static/thumbnails"),
            website_name: DEFAULT_WEBSITE_NAME.to_string(),
            telegram_token: None,
            telegram_chat_id: None,
            telegram_api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
            telegram_timeout_ms: 10_000,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&raw)
            .map_err(|e| Error::Config(format!("{} ({})", e, path.display())))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(raw).map_err(|e| Error::Config(format!("Malformed settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.website_name.trim().is_empty() {
            return Err(Error::Config("website_name must not be empty".into()));
        }
        if self.thumbnails_base_folder.as_os_str().is_empty() {
            return Err(Error::Config("thumbnails_base_folder must not be empty".into()));
        }
        Ok(())
    }

    /// Request for the card of a job with the given title
    pub fn thumbnail_request(&self, title: impl Into<String>) -> ThumbnailRequest {
        ThumbnailRequest::new(title, self.website_name.clone(), self.thumbnails_base_folder.clone())
    }

    #[cfg(feature = "telegram")]
    pub fn telegram(&self) -> crate::notify::TelegramConfig {
        crate::notify::TelegramConfig {
            token: self.telegram_token.clone(),
            chat_id: self.telegram_chat_id.clone(),
            api_base: self.telegram_api_base.clone(),
            timeout_ms: self.telegram_timeout_ms,
        }
    }
}
