//! Compact mark: chevrons around the wordmark with the caption underneath (~4:1).

use crate::outlines::STANDARD;
use crate::svg::{clamp_width, close_svg, open_svg, write_glyphs};
use laio_badge_core::HexColor;

/// Renders the standard badge. Only the width is set; the height follows the `viewBox`.
pub fn standard_svg(width: f64, color: HexColor) -> String {
    let width = clamp_width(width);
    let mut out = String::with_capacity(8 * 1024);
    open_svg(&mut out, &STANDARD, width, None);
    write_glyphs(&mut out, &STANDARD, color);
    close_svg(&mut out);
    out
}
