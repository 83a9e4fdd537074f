//! Locating and reading the embedding `<script>` tag.

use laio_badge_core::EmbedAttributes;
use regex::Regex;
use std::sync::OnceLock;

fn embed_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/badge\.js(\?|$)").expect("valid regex"))
}

/// Collects the `data-*` attributes of an element. Other attributes are ignored.
pub fn embed_attributes<'a, I>(attributes: I) -> EmbedAttributes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    attributes
        .into_iter()
        .filter(|(name, _)| name.starts_with("data-"))
        .collect()
}

/// Whether a script looks like a badge embed when `document.currentScript` is unavailable.
///
/// Matches a `src` ending in `/badge.js` (optionally with a query) or any script carrying a
/// non-empty `data-slug`, `data-color` or `data-size`.
pub fn is_embed_script(src: Option<&str>, attributes: &EmbedAttributes) -> bool {
    src.is_some_and(|src| embed_src_re().is_match(src))
        || ["slug", "color", "size"]
            .iter()
            .any(|key| attributes.get_non_empty(key).is_some())
}
