#![forbid(unsafe_code)]

//! `laio-badge` keeps an LA.IO partner badge mounted on third-party pages.
//!
//! The crate re-exports the configuration resolver ([`laio_badge_core`]) and the SVG generators
//! ([`render`]), and adds the mount controller that places the badge, re-mounts it when a
//! single-page app removes it, and reports impressions and clicks.
//!
//! The controller only talks to a page through the [`Host`] and [`Transport`] traits. On
//! `wasm32` the `web` module implements both over `web-sys`; elsewhere `testing::MemoryHost`
//! provides an in-memory document.
//!
//! # Features
//!
//! - `raster`: enable PNG output via pure-Rust SVG rasterization (`laio_badge::raster`)
//! - `testing`: in-memory host and recording transport (`laio_badge::testing`)

pub use laio_badge_core::*;

pub mod controller;
pub mod host;
pub mod script;
pub mod track;

#[cfg(feature = "raster")]
pub mod raster;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controller::{BadgeController, BadgeState, ControllerOptions, HostEvent, StartOutcome};
pub use host::{BuiltBadge, Host, HostError, ReadyState, WatchHandle};
pub use track::{Delivery, Tracker, TrackerConfig, Transport, TransportError};

pub mod render {
    pub use laio_badge_render::element::{BadgeElement, link_href};
    pub use laio_badge_render::pill::PillPaint;
    pub use laio_badge_render::snippet::{SnippetOptions, embed_script_snippet, markdown_snippet};
    pub use laio_badge_render::svg::{clamp_width, parse_width};
    pub use laio_badge_render::{
        horizontal_svg, pill_svg, render_config_svg, render_svg, standard_svg,
    };
}

/// Errors from the non-browser entry points of this crate.
#[derive(Debug, thiserror::Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Core(#[from] laio_badge_core::Error),
    #[error(transparent)]
    Render(#[from] laio_badge_render::Error),
    #[cfg(feature = "raster")]
    #[error(transparent)]
    Raster(#[from] raster::RasterError),
}

/// Resolves `attributes` and renders the resulting badge as a standalone `<span>` fragment.
pub fn render_embed_html(attributes: &EmbedAttributes) -> String {
    let config = BadgeConfig::resolve(attributes);
    render::BadgeElement::build(&config).to_html()
}
