/// Rasterizer: executes paint commands on an RGB canvas

use crate::assets::FontAsset;
use crate::rendering::layout::TextMetrics;
use crate::rendering::paint::{Face, PaintCommand};
use ab_glyph::{point, Font, ScaleFont};
use image::RgbImage;
use imageproc::drawing::{draw_text_mut, text_size};

/// Vertical ink extent of a line as `(top, bottom)` pixels below the pen's
/// top edge, the same origin `draw_text_mut` places glyphs from.
/// `None` when nothing in `text` has an outline.
pub fn ink_extent(font: &FontAsset, text: &str) -> Option<(f32, f32)> {
    let scale = font.scale();
    let scaled = font.font().as_scaled(scale);
    let mut caret = 0.0;
    let mut extent: Option<(f32, f32)> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        if let Some(outlined) = font.font().outline_glyph(glyph) {
            let bb = outlined.px_bounds();
            extent = Some(match extent {
                None => (bb.min.y, bb.max.y),
                Some((top, bottom)) => (top.min(bb.min.y), bottom.max(bb.max.y)),
            });
        }
    }
    extent
}

impl TextMetrics for FontAsset {
    /// Width as laid out by `imageproc`; height runs from the pen's top edge
    /// to the lowest inked row of the whole line.
    fn text_size(&self, text: &str) -> (u32, u32) {
        let (w, _) = text_size(self.scale(), self.font(), text);
        let h = ink_extent(self, text)
            .map(|(_, bottom)| bottom.ceil().max(0.0) as u32)
            .unwrap_or(0);
        (w, h)
    }
}

/// The two faces a card is drawn with
#[derive(Debug, Clone, Copy)]
pub struct Faces<'a> {
    pub medium: &'a FontAsset,
    pub bold: &'a FontAsset,
}

impl<'a> Faces<'a> {
    pub fn get(&self, face: Face) -> &'a FontAsset {
        match face {
            Face::Medium => self.medium,
            Face::Bold => self.bold,
        }
    }
}

/// `dst = dst * (1 - a) + color * a` per channel, rounded to nearest
pub fn blend_overlay(canvas: &mut RgbImage, rgb: (u8, u8, u8), alpha: u8) {
    let a = alpha as u32;
    let inv = 255 - a;
    let color = [rgb.0 as u32, rgb.1 as u32, rgb.2 as u32];
    for px in canvas.pixels_mut() {
        for (c, o) in px.0.iter_mut().zip(color) {
            *c = ((*c as u32 * inv + o * a + 127) / 255) as u8;
        }
    }
}

pub fn execute(canvas: &mut RgbImage, commands: &[PaintCommand], faces: Faces<'_>) {
    for cmd in commands {
        match cmd {
            PaintCommand::Overlay { rgb, alpha } => blend_overlay(canvas, *rgb, *alpha),
            PaintCommand::Text { x, y, text, face, ink } => {
                let font = faces.get(*face);
                draw_text_mut(canvas, ink.resolve(), *x, *y, font.scale(), font.font(), text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn overlay_darkens_toward_black() {
        let mut img = RgbImage::from_pixel(2, 1, Rgb([255, 100, 0]));
        blend_overlay(&mut img, (0, 0, 0), 175);
        // 255 * 80 / 255 = 80, 100 * 80 / 255 = 31.37
        assert_eq!(img.get_pixel(0, 0), &Rgb([80, 31, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([80, 31, 0]));
    }

    #[test]
    fn opaque_overlay_replaces_color() {
        let mut img = RgbImage::from_pixel(1, 1, Rgb([12, 34, 56]));
        blend_overlay(&mut img, (200, 150, 100), 255);
        assert_eq!(img.get_pixel(0, 0), &Rgb([200, 150, 100]));
    }

    #[test]
    fn transparent_overlay_is_identity() {
        let mut img = RgbImage::from_pixel(1, 1, Rgb([12, 34, 56]));
        blend_overlay(&mut img, (0, 0, 0), 0);
        assert_eq!(img.get_pixel(0, 0), &Rgb([12, 34, 56]));
    }
}
