/// Card layout: wrapping and placement of the three text blocks

use crate::rendering::paint::{Face, Ink, PaintCommand, OVERLAY_ALPHA};
use crate::rendering::CANVAS_WIDTH;

pub const HEADING: &str = "Nova Oportunidade:";
pub const HEADING_Y: i32 = 90;
pub const TITLE_Y: i32 = 225;
/// Fixed, independent of how far the title block extends
pub const ATTRIBUTION_Y: i32 = 500;
/// Maximum characters per title line
pub const WRAP_WIDTH: usize = 25;

/// Pixel measurement of a single line of text
pub trait TextMetrics {
    /// Returns `(width, height)` of `text` as it would be drawn. Height runs
    /// from the line's top edge to its lowest inked row, so a following line
    /// placed `height` pixels lower never overlaps it.
    fn text_size(&self, text: &str) -> (u32, u32);
}

/// Greedy word wrap on character count.
///
/// Whitespace runs collapse to a single space. A word longer than `width`
/// is never split; it takes a line of its own.
pub fn wrap_title(title: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0usize;

    for word in title.split_whitespace() {
        let word_len = word.chars().count();
        if cur_len > 0 && cur_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if cur_len > 0 {
            cur.push(' ');
            cur_len += 1;
        }
        cur.push_str(word);
        cur_len += word_len;
    }
    if cur_len > 0 {
        lines.push(cur);
    }
    lines
}

pub fn attribution(site_label: &str) -> String {
    format!("Via {}", site_label)
}

/// Left edge that centers a line of `text_width` pixels on the canvas
pub fn centered_x(text_width: u32) -> i32 {
    (CANVAS_WIDTH as i32 - text_width as i32) / 2
}

/// Build the full paint list for a card.
///
/// Order: overlay, heading, title lines, attribution. Title lines start at
/// `TITLE_Y` and each advances the pen by its own measured height.
pub fn layout_thumbnail<M: TextMetrics>(
    medium: &M,
    bold: &M,
    title: &str,
    site_label: &str,
) -> Vec<PaintCommand> {
    let mut cmds = vec![PaintCommand::Overlay {
        rgb: (0, 0, 0),
        alpha: OVERLAY_ALPHA,
    }];

    let (w, _) = medium.text_size(HEADING);
    cmds.push(PaintCommand::Text {
        x: centered_x(w),
        y: HEADING_Y,
        text: HEADING.to_string(),
        face: Face::Medium,
        ink: Ink::White,
    });

    let mut y = TITLE_Y;
    for line in wrap_title(title, WRAP_WIDTH) {
        let (w, h) = bold.text_size(&line);
        cmds.push(PaintCommand::Text {
            x: centered_x(w),
            y,
            text: line,
            face: Face::Bold,
            ink: Ink::Default,
        });
        y += h as i32;
    }

    let via = attribution(site_label);
    let (w, _) = medium.text_size(&via);
    cmds.push(PaintCommand::Text {
        x: centered_x(w),
        y: ATTRIBUTION_Y,
        text: via,
        face: Face::Medium,
        ink: Ink::White,
    });

    cmds
}
