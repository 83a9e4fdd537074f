//! Wide wordmark with the two-line caption to the right (~6.8:1).

use crate::outlines::HORIZONTAL;
use crate::svg::{clamp_width, close_svg, height_for, open_svg, write_glyphs};
use laio_badge_core::HexColor;

pub const ASPECT_RATIO: f64 = 6.8;

pub fn horizontal_svg(width: f64, color: HexColor) -> String {
    let width = clamp_width(width);
    let mut out = String::with_capacity(8 * 1024);
    open_svg(&mut out, &HORIZONTAL, width, Some(height_for(width, ASPECT_RATIO)));
    write_glyphs(&mut out, &HORIZONTAL, color);
    close_svg(&mut out);
    out
}
