//! Asset fixtures for integration tests.
//!
//! Montserrat is not shipped with the crate; DejaVu Sans from the system font
//! directory stands in for it. Tests that need real fonts skip when it is
//! not installed.

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use jobthumb::assets::{BACKGROUND_FILE, BOLD_FONT_FILE, MEDIUM_FONT_FILE};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BACKGROUND_RGB: [u8; 3] = [200, 120, 40];

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
];

fn system_font(name: &str) -> Option<PathBuf> {
    FONT_DIRS
        .iter()
        .map(|d| Path::new(d).join(name))
        .find(|p| p.exists())
}

/// Asset directory holding only a solid-color background
pub fn background_only() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    RgbImage::from_pixel(640, 360, Rgb(BACKGROUND_RGB))
        .save(dir.path().join(BACKGROUND_FILE))
        .expect("write background");
    dir
}

/// Copy a system font into the asset layout under `rel`
pub fn install_font(dir: &Path, system_name: &str, rel: &str) -> bool {
    let Some(src) = system_font(system_name) else {
        return false;
    };
    let dest = dir.join(rel);
    std::fs::create_dir_all(dest.parent().expect("font parent")).expect("mkdir");
    std::fs::copy(src, dest).expect("copy font");
    true
}

/// Full asset directory, or `None` when stand-in fonts are unavailable
pub fn full_assets() -> Option<TempDir> {
    let dir = background_only();
    let ok = install_font(dir.path(), "DejaVuSans.ttf", MEDIUM_FONT_FILE)
        && install_font(dir.path(), "DejaVuSans-Bold.ttf", BOLD_FONT_FILE);
    if !ok {
        eprintln!("DejaVu fonts not found; skipping font-dependent test");
        return None;
    }
    Some(dir)
}

/// Whether any pixel in rows `y0..y1` is near-white
pub fn has_bright_pixels(img: &RgbImage, y0: u32, y1: u32) -> bool {
    (y0..y1.min(img.height())).any(|y| {
        (0..img.width()).any(|x| img.get_pixel(x, y).0.iter().all(|&c| c > 240))
    })
}
