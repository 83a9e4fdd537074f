#![forbid(unsafe_code)]

//! SVG generation for LA.IO partner badges.
//!
//! Every generator is a pure function of its inputs: same layout, width and colors, same bytes.
//! Output never references external resources and never contains script.

pub mod element;
pub mod horizontal;
pub mod outlines;
pub mod pill;
pub mod snippet;
pub mod standard;
pub mod svg;

pub use element::BadgeElement;
pub use horizontal::horizontal_svg;
pub use pill::{PillPaint, pill_svg};
pub use snippet::{SnippetOptions, embed_script_snippet, markdown_snippet};
pub use standard::standard_svg;
pub use svg::{FALLBACK_WIDTH_PX, MAX_WIDTH_PX, MIN_WIDTH_PX, clamp_width, parse_width};

use laio_badge_core::{BadgeConfig, BadgeLayout, HexColor};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL cannot carry a path: {url}")]
    CannotBeABase { url: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders `layout` at `width` CSS pixels.
///
/// `bg_color` and `fg_color` only affect the pill; the other layouts paint every glyph with
/// `color`.
pub fn render_svg(
    layout: BadgeLayout,
    width: f64,
    color: HexColor,
    bg_color: Option<HexColor>,
    fg_color: Option<HexColor>,
) -> String {
    match layout {
        BadgeLayout::Standard => standard_svg(width, color),
        BadgeLayout::Pill => pill_svg(width, color, bg_color, fg_color),
        BadgeLayout::Horizontal => horizontal_svg(width, color),
    }
}

/// [`render_svg`] for a resolved configuration, at the pixel width of its size.
pub fn render_config_svg(config: &BadgeConfig) -> String {
    render_svg(
        config.layout,
        f64::from(config.pixels()),
        config.color,
        config.bg_color,
        config.fg_color,
    )
}
