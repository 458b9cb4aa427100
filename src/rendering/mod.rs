//! Thumbnail rendering
//!
//! `layout` turns a request into paint commands using measured text,
//! `raster` executes them on the background canvas.

pub mod layout;
pub mod paint;
pub mod raster;

use crate::assets::{self, AssetCache, FontAsset, FONT_SIZE};
use crate::{Error, Result, ThumbnailRequest};
use image::{ImageFormat, RgbImage};
use log::debug;
use sha2::{Digest, Sha256};
use std::io::Cursor;

pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;

/// A composed card. Encoding and delivery are up to the caller.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    image: RgbImage,
}

impl Thumbnail {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Lossless PNG encoding of the canvas
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| Error::Encode(format!("Failed to encode PNG: {e}")))?;
        Ok(buf)
    }

    /// SHA-256 of the raw pixel buffer, hex encoded
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(self.image.as_raw()))
    }
}

/// Draw a card on an already loaded background.
///
/// `background` must be canvas-sized; it is copied, not modified.
pub fn compose(
    background: &RgbImage,
    medium: &FontAsset,
    bold: &FontAsset,
    request: &ThumbnailRequest,
) -> Thumbnail {
    let commands = layout::layout_thumbnail(medium, bold, &request.title, &request.site_label);
    let mut canvas = background.clone();
    raster::execute(
        &mut canvas,
        &commands,
        raster::Faces { medium, bold },
    );
    debug!(
        "Composed thumbnail for {:?} ({} paint commands)",
        request.title,
        commands.len()
    );
    Thumbnail { image: canvas }
}

/// Render a card, reading every asset from disk.
///
/// Fails with `Error::AssetLoad` naming the first asset (background, medium
/// font, bold font) that cannot be loaded.
pub fn render(request: &ThumbnailRequest) -> Result<Thumbnail> {
    let paths = request.asset_paths();
    let background = assets::load_background(&paths.background)?;
    let medium = FontAsset::load(&paths.medium_font, FONT_SIZE)?;
    let bold = FontAsset::load(&paths.bold_font, FONT_SIZE)?;
    Ok(compose(&background, &medium, &bold, request))
}

/// Same as [`render`] but reuses assets held by `cache`
pub fn render_cached(request: &ThumbnailRequest, cache: &AssetCache) -> Result<Thumbnail> {
    let paths = request.asset_paths();
    let background = cache.background(&paths.background)?;
    let medium = cache.font(&paths.medium_font, FONT_SIZE)?;
    let bold = cache.font(&paths.bold_font, FONT_SIZE)?;
    Ok(compose(&background, &medium, &bold, request))
}

/// Render on tokio's blocking pool so async callers are not stalled
pub async fn render_async(request: ThumbnailRequest) -> Result<Thumbnail> {
    tokio::task::spawn_blocking(move || render_cached(&request, AssetCache::global()))
        .await
        .map_err(|e| Error::Task(format!("Thumbnail task failed: {e}")))?
}
