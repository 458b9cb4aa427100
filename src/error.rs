//! Error types for the thumbnail compositor

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compositor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing or delivering a thumbnail
#[derive(Error, Debug)]
pub enum Error {
    /// A required asset (background image or font) is missing, unreadable or
    /// in an unrecognized format
    #[error("Failed to load asset {}: {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// Failed to encode the composed canvas
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Invalid or unreadable settings
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A background render task did not complete
    #[error("{0}")]
    Task(String),

    /// Filesystem error outside of asset loading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel notification failed
    #[cfg(feature = "telegram")]
    #[error("Notification failed: {0}")]
    Notification(#[from] crate::notify::NotificationError),
}

impl Error {
    pub(crate) fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Path of the asset that failed to load, if this is an asset error
    pub fn asset_path(&self) -> Option<&std::path::Path> {
        match self {
            Error::AssetLoad { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
