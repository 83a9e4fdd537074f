use crate::outlines::Outlines;
use laio_badge_core::HexColor;
use std::fmt::Write as _;

pub const MIN_WIDTH_PX: u32 = 50;
pub const MAX_WIDTH_PX: u32 = 500;
/// Width used when a request is non-numeric or out of range.
pub const FALLBACK_WIDTH_PX: u32 = 160;

pub const ARIA_LABEL: &str = "LA.IO badge";

/// Clamps a requested badge width.
///
/// Non-finite values and values outside `[50, 500]` become `160`; anything else is rounded to
/// the nearest integer.
pub fn clamp_width(requested: f64) -> u32 {
    if !requested.is_finite()
        || requested < f64::from(MIN_WIDTH_PX)
        || requested > f64::from(MAX_WIDTH_PX)
    {
        return FALLBACK_WIDTH_PX;
    }
    requested.round() as u32
}

/// [`clamp_width`] for textual requests (`"220"`, `" 180.4 "`). Non-numeric text yields `160`.
pub fn parse_width(requested: &str) -> u32 {
    requested
        .trim()
        .parse::<f64>()
        .map(clamp_width)
        .unwrap_or(FALLBACK_WIDTH_PX)
}

/// Height for a fixed aspect ratio, rounded like the width.
pub(crate) fn height_for(width: u32, aspect: f64) -> u32 {
    (f64::from(width) / aspect).round() as u32
}

pub(crate) fn open_svg(out: &mut String, outlines: &Outlines, width: u32, height: Option<u32>) {
    let (vb_w, vb_h) = outlines.view_box;
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vb_w} {vb_h}" width="{width}""#
    );
    if let Some(height) = height {
        let _ = write!(out, r#" height="{height}""#);
    }
    let _ = write!(out, r#" role="img" aria-label="{ARIA_LABEL}">"#);
}

/// Writes every outline of `outlines` inside one `<g fill="...">` group.
pub(crate) fn write_glyphs(out: &mut String, outlines: &Outlines, fill: HexColor) {
    let _ = write!(out, r#"<g fill="{fill}">"#);
    for d in outlines.paths() {
        let _ = write!(out, r#"<path d="{d}"/>"#);
    }
    for points in outlines.chevrons {
        let _ = write!(out, r#"<polygon points="{points}"/>"#);
    }
    out.push_str("</g>");
}

pub(crate) fn close_svg(out: &mut String) {
    out.push_str("</svg>");
}
