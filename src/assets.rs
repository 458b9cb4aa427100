//! Asset layout and loading
//!
//! Assets live under a single base directory:
//!
//! ```text
//! <base>/thumb_base.png
//! <base>/Montserrat/Montserrat-Medium.ttf
//! <base>/Montserrat/Montserrat-Bold.ttf
//! ```
//!
//! Loads are read-only. `AssetCache` can keep decoded assets around for the
//! lifetime of the process; entries are inserted once and never replaced.

use crate::rendering::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::{Error, Result};
use ab_glyph::{Font, FontArc, PxScale};
use image::imageops::FilterType;
use image::{GenericImageView, RgbImage};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

pub const BACKGROUND_FILE: &str = "thumb_base.png";
pub const MEDIUM_FONT_FILE: &str = "Montserrat/Montserrat-Medium.ttf";
pub const BOLD_FONT_FILE: &str = "Montserrat/Montserrat-Bold.ttf";

/// Point size shared by both typefaces
pub const FONT_SIZE: f32 = 60.0;

/// Concrete paths of the three required assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub medium_font: PathBuf,
    pub bold_font: PathBuf,
}

impl AssetPaths {
    pub fn under(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            background: base.join(BACKGROUND_FILE),
            medium_font: base.join(MEDIUM_FONT_FILE),
            bold_font: base.join(BOLD_FONT_FILE),
        }
    }
}

/// A loaded typeface at a fixed size
#[derive(Clone)]
pub struct FontAsset {
    font: FontArc,
    size: f32,
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("size", &self.size)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontAsset {
    /// Read and parse a TrueType/OpenType font file
    pub fn load(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::asset(path, e))?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| Error::asset(path, e))?;
        debug!("Loaded font {} at size {}", path.display(), size);
        Ok(Self { font, size })
    }

    pub fn from_font(font: FontArc, size: f32) -> Self {
        Self { font, size }
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Scale at which one em spans `size` pixels.
    ///
    /// `PxScale` measures ascent-to-descent height, so the em size is
    /// converted through the font's own proportions.
    pub fn scale(&self) -> PxScale {
        let height = match self.font.units_per_em() {
            Some(upem) if upem > 0.0 => self.size * self.font.height_unscaled() / upem,
            _ => self.size,
        };
        PxScale::from(height)
    }
}

/// Decode the background image and fit it to the canvas
pub fn load_background(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| Error::asset(path, e))?;
    let (w, h) = img.dimensions();
    debug!("Loaded background {} ({}x{})", path.display(), w, h);
    Ok(img
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle)
        .to_rgb8())
}

/// Lazily populated, insert-once cache of decoded assets keyed by path
#[derive(Default)]
pub struct AssetCache {
    backgrounds: RwLock<HashMap<PathBuf, Arc<RgbImage>>>,
    fonts: RwLock<HashMap<PathBuf, FontArc>>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache instance
    pub fn global() -> &'static AssetCache {
        static GLOBAL: OnceLock<AssetCache> = OnceLock::new();
        GLOBAL.get_or_init(AssetCache::new)
    }

    /// Background already resized to the canvas
    pub fn background(&self, path: &Path) -> Result<Arc<RgbImage>> {
        let hit = self
            .backgrounds
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned();
        if let Some(img) = hit {
            return Ok(img);
        }

        // Loaded outside the lock; a concurrent first load of the same path
        // produces an identical image and the first insert is kept.
        let loaded = Arc::new(load_background(path)?);
        let mut map = self.backgrounds.write().unwrap_or_else(|e| e.into_inner());
        Ok(map.entry(path.to_path_buf()).or_insert(loaded).clone())
    }

    pub fn font(&self, path: &Path, size: f32) -> Result<FontAsset> {
        let hit = self
            .fonts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned();
        if let Some(font) = hit {
            return Ok(FontAsset::from_font(font, size));
        }

        let loaded = FontAsset::load(path, size)?;
        let mut map = self.fonts.write().unwrap_or_else(|e| e.into_inner());
        let font = map
            .entry(path.to_path_buf())
            .or_insert_with(|| loaded.font().clone())
            .clone();
        Ok(FontAsset::from_font(font, size))
    }

    /// Number of cached entries across both kinds
    pub fn len(&self) -> usize {
        let bg = self.backgrounds.read().unwrap_or_else(|e| e.into_inner()).len();
        let fonts = self.fonts.read().unwrap_or_else(|e| e.into_inner()).len();
        bg + fonts
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, w: u32, h: u32) -> PathBuf {
        let path = dir.join(BACKGROUND_FILE);
        let img = RgbImage::from_fn(w, h, |x, y| image::Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
        img.save(&path).expect("write png");
        path
    }

    #[test]
    fn asset_paths_follow_layout() {
        let p = AssetPaths::under("/base");
        assert_eq!(p.background, PathBuf::from("/base/thumb_base.png"));
        assert_eq!(p.medium_font, PathBuf::from("/base/Montserrat/Montserrat-Medium.ttf"));
        assert_eq!(p.bold_font, PathBuf::from("/base/Montserrat/Montserrat-Bold.ttf"));
    }

    #[test]
    fn background_is_resized_to_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), 64, 48);
        let bg = load_background(&path).unwrap();
        assert_eq!(bg.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn missing_background_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_background(dir.path().join(BACKGROUND_FILE)).unwrap_err();
        assert!(err.asset_path().unwrap().ends_with(BACKGROUND_FILE));
    }

    #[test]
    fn garbage_font_is_an_asset_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        let err = FontAsset::load(&path, FONT_SIZE).unwrap_err();
        assert_eq!(err.asset_path(), Some(path.as_path()));
    }

    #[test]
    fn cache_returns_same_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), 32, 32);
        let cache = AssetCache::new();
        let a = cache.background(&path).unwrap();
        let b = cache.background(&path).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_does_not_store_failures() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AssetCache::new();
        assert!(cache.font(&dir.path().join("missing.ttf"), FONT_SIZE).is_err());
        assert!(cache.is_empty());
    }
}
