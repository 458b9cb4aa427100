//! Job-ad thumbnail compositor
//!
//! Produces the 1280×720 social-sharing card for a job ad: a background photo
//! darkened by a translucent overlay, a fixed heading, the word-wrapped job
//! title and an attribution line. A small channel notifier for announcing new
//! ads is available behind the `telegram` feature.
//!
//! # Example
//!
//! ```no_run
//! use jobthumb::ThumbnailRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ThumbnailRequest::new(
//!     "Senior Backend Engineer",
//!     "PyJobs",
//!     "/srv/pyjobs/static/thumbnails",
//! );
//! let thumbnail = jobthumb::render(&request)?;
//! std::fs::write("thumb.png", thumbnail.encode_png()?)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod assets;
pub mod config;
pub mod error;
pub mod rendering;

#[cfg(feature = "telegram")]
pub mod notify;

pub use assets::{AssetCache, AssetPaths, FontAsset};
pub use config::Settings;
pub use error::{Error, Result};
pub use rendering::{render, render_async, render_cached, Thumbnail, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Everything the compositor needs for one thumbnail
///
/// Built fresh per invocation from a job record and the site settings; the
/// compositor never reads configuration on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    /// Job title, wrapped onto as many lines as needed
    pub title: String,
    /// Bare site name; rendered as `Via <site_label>`
    pub site_label: String,
    /// Directory holding `thumb_base.png` and the `Montserrat/` fonts
    pub asset_base_path: PathBuf,
}

impl ThumbnailRequest {
    pub fn new(
        title: impl Into<String>,
        site_label: impl Into<String>,
        asset_base_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            site_label: site_label.into(),
            asset_base_path: asset_base_path.into(),
        }
    }

    /// Asset locations derived from `asset_base_path`
    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths::under(&self.asset_base_path)
    }

    pub fn asset_base_path(&self) -> &Path {
        &self.asset_base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_exposes_asset_layout() {
        let req = ThumbnailRequest::new("Dev Python", "PyJobs", "/srv/assets");
        let paths = req.asset_paths();
        assert_eq!(paths.background, PathBuf::from("/srv/assets/thumb_base.png"));
        assert_eq!(
            paths.bold_font,
            PathBuf::from("/srv/assets/Montserrat/Montserrat-Bold.ttf")
        );
    }
}
