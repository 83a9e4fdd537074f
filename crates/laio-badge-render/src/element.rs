//! Description of the DOM subtree that carries a badge.
//!
//! Hosts build real nodes from this (the browser binding), or serialize it with
//! [`BadgeElement::to_html`] for static embedding and previews.

use crate::render_config_svg;
use laio_badge_core::{BadgeConfig, Slug};
use serde::Serialize;
use url::Url;

/// Marker attribute set on every wrapper.
pub const WRAPPER_MARKER: &str = "data-laio-badge";
pub const WRAPPER_STYLE: &str = "display:inline-block;line-height:0";
pub const DEBUG_OUTLINE: &str = "1px dashed #f0f";
pub const LINK_BASE: &str = "https://la.io/";

/// Marketing link for a partner: `https://la.io/?ref=badge&slug=<slug>`.
pub fn link_href(base: &Url, slug: &Slug) -> String {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("ref", "badge")
        .append_pair("slug", slug.as_str());
    url.into()
}

pub fn default_link_base() -> Url {
    Url::parse(LINK_BASE).expect("valid link base")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeElement {
    /// Inline style of the wrapper `<span>`.
    pub wrapper_style: String,
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
    /// SVG markup placed inside the anchor.
    pub svg: String,
}

impl BadgeElement {
    pub fn build(config: &BadgeConfig) -> Self {
        Self::build_with_link_base(config, &default_link_base())
    }

    pub fn build_with_link_base(config: &BadgeConfig, link_base: &Url) -> Self {
        let mut wrapper_style = WRAPPER_STYLE.to_string();
        if config.debug {
            wrapper_style.push_str(";outline:");
            wrapper_style.push_str(DEBUG_OUTLINE);
        }
        Self {
            wrapper_style,
            href: link_href(link_base, &config.slug),
            target: "_blank",
            rel: "noopener",
            svg: render_config_svg(config),
        }
    }

    /// `<span data-laio-badge ...><a ...><svg .../></a></span>`
    pub fn to_html(&self) -> String {
        format!(
            r#"<span {WRAPPER_MARKER}="" style="{}"><a href="{}" target="{}" rel="{}">{}</a></span>"#,
            htmlize::escape_attribute(&self.wrapper_style),
            htmlize::escape_attribute(&self.href),
            self.target,
            self.rel,
            self.svg
        )
    }
}
