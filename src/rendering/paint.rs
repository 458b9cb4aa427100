/// Paint command set for the thumbnail card

use image::Rgb;

/// Opacity of the black overlay laid over the background (out of 255)
pub const OVERLAY_ALPHA: u8 = 175;

/// Ink used when a text command does not request a fill.
/// On an RGB canvas this is full-intensity white.
pub const DEFAULT_FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Medium,
    Bold,
}

/// Text fill. `Default` means no fill was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Default,
    White,
}

impl Ink {
    pub fn resolve(self) -> Rgb<u8> {
        match self {
            Ink::Default => DEFAULT_FOREGROUND,
            Ink::White => WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Solid color blended over the whole canvas
    Overlay {
        rgb: (u8, u8, u8),
        alpha: u8,
    },
    /// Single line of text; `y` is the top of the line box
    Text {
        x: i32,
        y: i32,
        text: String,
        face: Face,
        ink: Ink,
    },
}
