//! Copy-paste snippets handed to partners by the builder.

use crate::{Error, Result};
use crate::element::{default_link_base, link_href};
use laio_badge_core::{BadgeConfig, BadgeLayout};
use std::fmt::Write as _;
use url::Url;

pub const DEFAULT_SCRIPT_URL: &str = "https://badgebuilder.la.io/badge.js";
pub const DEFAULT_IMAGE_BASE: &str = "https://badgebuilder.la.io/badge/";

#[derive(Debug, Clone)]
pub struct SnippetOptions {
    pub script_url: Url,
    /// Base for the static `<slug>.svg` image used by the markdown snippet.
    pub image_base: Url,
    pub link_base: Url,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            script_url: Url::parse(DEFAULT_SCRIPT_URL).expect("valid script url"),
            image_base: Url::parse(DEFAULT_IMAGE_BASE).expect("valid image base"),
            link_base: default_link_base(),
        }
    }
}

impl SnippetOptions {
    pub fn with_script_url(mut self, script_url: &str) -> Result<Self> {
        self.script_url = Url::parse(script_url)?;
        Ok(self)
    }
}

/// `<script async src=... data-...></script>` embed code.
///
/// A pill with both two-tone colors gets `data-bg-color`/`data-fg-color` instead of
/// `data-color`. `data-layout` is omitted for the standard layout so snippets generated before
/// layouts existed stay identical.
pub fn embed_script_snippet(config: &BadgeConfig, options: &SnippetOptions) -> String {
    let mut attrs: Vec<(&str, String)> = vec![
        ("data-slug", config.slug.to_string()),
        ("data-size", config.size.to_string()),
    ];

    match (config.layout, config.bg_color, config.fg_color) {
        (BadgeLayout::Pill, Some(bg), Some(fg)) => {
            attrs.push(("data-bg-color", bg.to_string()));
            attrs.push(("data-fg-color", fg.to_string()));
        }
        _ => attrs.push(("data-color", config.color.to_string())),
    }

    if config.layout != BadgeLayout::Standard {
        attrs.push(("data-layout", config.layout.to_string()));
    }

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<script async src="{}""#,
        htmlize::escape_attribute(options.script_url.as_str())
    );
    for (name, value) in attrs {
        let _ = write!(
            &mut out,
            "\n        {name}=\"{}\"",
            htmlize::escape_attribute(value.as_str())
        );
    }
    out.push_str("></script>");
    out
}

/// `[![LA.IO Partner](<image>)](<link>)` for READMEs and docs.
pub fn markdown_snippet(config: &BadgeConfig, options: &SnippetOptions) -> Result<String> {
    let mut image = options.image_base.clone();
    image
        .path_segments_mut()
        .map_err(|()| Error::CannotBeABase {
            url: options.image_base.to_string(),
        })?
        .pop_if_empty()
        .push(&format!("{}.svg", config.slug));
    let link = link_href(&options.link_base, &config.slug);
    Ok(format!("[![LA.IO Partner]({image})]({link})"))
}
