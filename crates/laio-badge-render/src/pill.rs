//! Rounded pill with a filled background (~5.5:1).
//!
//! Two modes:
//! - single color: the badge color fills the pill and the text color is picked for contrast
//! - two-tone: explicit background and/or foreground colors

use crate::outlines::PILL;
use crate::svg::{clamp_width, close_svg, height_for, open_svg, write_glyphs};
use laio_badge_core::HexColor;
use std::fmt::Write as _;

pub const ASPECT_RATIO: f64 = 5.5;

/// Resolved pill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillPaint {
    pub bg: HexColor,
    pub fg: HexColor,
}

impl PillPaint {
    /// `bg` defaults to `color`; `fg` defaults to the contrast color of the background.
    pub fn resolve(color: HexColor, bg: Option<HexColor>, fg: Option<HexColor>) -> Self {
        let bg = bg.unwrap_or(color);
        let fg = fg.unwrap_or_else(|| bg.contrast_text());
        Self { bg, fg }
    }
}

pub fn pill_svg(
    width: f64,
    color: HexColor,
    bg_color: Option<HexColor>,
    fg_color: Option<HexColor>,
) -> String {
    let width = clamp_width(width);
    let paint = PillPaint::resolve(color, bg_color, fg_color);
    let (vb_w, vb_h) = PILL.view_box;
    let radius = vb_h / 2.0;

    let mut out = String::with_capacity(6 * 1024);
    open_svg(&mut out, &PILL, width, Some(height_for(width, ASPECT_RATIO)));
    let _ = write!(
        &mut out,
        r#"<rect x="0" y="0" width="{vb_w}" height="{vb_h}" rx="{radius}" ry="{radius}" fill="{}"/>"#,
        paint.bg
    );
    write_glyphs(&mut out, &PILL, paint.fg);
    close_svg(&mut out);
    out
}
