use crate::color::HexColor;
use crate::sanitize;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Dataset keys accepted for the partner slug, highest priority first.
pub const SLUG_ALIASES: &[&str] = &[
    "slug", "org_slug", "orgSlug", "orgslug", "org", "partner", "client",
];

pub const UNKNOWN_SLUG: &str = "unknown";

/// Raw `data-*` attributes read from the embedding `<script>` tag.
///
/// Keys are stored the way `HTMLElement.dataset` exposes them: `data-bg-color` and `bgColor`
/// both end up as `bgColor`, `data-org_slug` stays `org_slug`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedAttributes(IndexMap<String, String>);

impl EmbedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute. `name` may be a full attribute name (`data-bg-color`) or a
    /// dataset key (`bgColor`). Later inserts overwrite earlier ones.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(dataset_key(name), value.into());
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&dataset_key(key)).map(String::as_str)
    }

    /// Like [`Self::get`] but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EmbedAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert(k.as_ref(), v);
        }
        out
    }
}

/// Maps an attribute name to its `dataset` key.
///
/// Mirrors the HTML rule: drop the `data-` prefix, then every `-` followed by an ASCII
/// lowercase letter is removed and the letter uppercased. Names without the prefix are
/// assumed to already be dataset keys.
pub fn dataset_key(name: &str) -> String {
    let Some(rest) = name.strip_prefix("data-") else {
        return name.to_string();
    };
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Sanitized partner identifier: never empty, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub(crate) fn from_sanitized(value: String) -> Self {
        if value.is_empty() {
            Self::unknown()
        } else {
            Self(value)
        }
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_SLUG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Slug {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitized host element id (`[A-Za-z0-9-_]{1,100}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub(crate) fn from_sanitized(value: String) -> Option<Self> {
        (!value.is_empty()).then_some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BadgeSize {
    #[serde(rename = "s")]
    Small,
    #[default]
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
    #[serde(rename = "auto")]
    Auto,
}

impl BadgeSize {
    pub const ALL: [BadgeSize; 4] = [Self::Small, Self::Medium, Self::Large, Self::Auto];

    /// Attribute / wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "s",
            Self::Medium => "m",
            Self::Large => "l",
            Self::Auto => "auto",
        }
    }

    /// Rendered badge width in CSS pixels.
    pub fn pixels(self) -> u32 {
        match self {
            Self::Small => 120,
            Self::Medium | Self::Auto => 160,
            Self::Large => 220,
        }
    }
}

impl FromStr for BadgeSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" => Ok(Self::Small),
            "m" => Ok(Self::Medium),
            "l" => Ok(Self::Large),
            "auto" => Ok(Self::Auto),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BadgeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLayout {
    /// Square-ish mark with the caption under the wordmark (~4:1).
    #[default]
    Standard,
    /// Rounded pill with a filled background (~5.5:1).
    Pill,
    /// Wide wordmark with the caption to the right (~6.8:1).
    Horizontal,
}

impl BadgeLayout {
    pub const ALL: [BadgeLayout; 3] = [Self::Standard, Self::Pill, Self::Horizontal];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
            Self::Horizontal => "horizontal",
        }
    }
}

impl FromStr for BadgeLayout {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "pill" => Ok(Self::Pill),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BadgeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sanitized, immutable configuration of one embedded badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeConfig {
    pub slug: Slug,
    pub color: HexColor,
    /// Two-tone pill background. Only set when the attribute was present.
    pub bg_color: Option<HexColor>,
    /// Two-tone pill foreground. Only set when the attribute was present.
    pub fg_color: Option<HexColor>,
    pub size: BadgeSize,
    pub layout: BadgeLayout,
    pub target_id: Option<TargetId>,
    pub debug: bool,
    pub track: bool,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            slug: Slug::unknown(),
            color: HexColor::default(),
            bg_color: None,
            fg_color: None,
            size: BadgeSize::default(),
            layout: BadgeLayout::default(),
            target_id: None,
            debug: false,
            track: true,
        }
    }
}

impl BadgeConfig {
    /// Resolves untrusted embed attributes. Never fails: every field falls back to its default.
    pub fn resolve(attrs: &EmbedAttributes) -> Self {
        Self {
            slug: pick_slug(attrs),
            color: sanitize::sanitize_color(attrs.get("color").unwrap_or_default()),
            bg_color: sanitize::sanitize_optional_color(attrs.get("bgColor")),
            fg_color: sanitize::sanitize_optional_color(attrs.get("fgColor")),
            size: sanitize::sanitize_size(attrs.get("size").unwrap_or_default()),
            layout: sanitize::sanitize_layout(attrs.get("layout").unwrap_or_default()),
            target_id: sanitize::sanitize_target_id(attrs.get("target").unwrap_or_default()),
            debug: attrs.get("debug") == Some("1"),
            track: attrs.get("track") != Some("0"),
        }
    }

    /// Badge width in CSS pixels for the configured size.
    pub fn pixels(&self) -> u32 {
        self.size.pixels()
    }
}

/// First non-empty slug alias, sanitized.
pub fn pick_slug(attrs: &EmbedAttributes) -> Slug {
    let raw = SLUG_ALIASES
        .iter()
        .find_map(|key| attrs.get_non_empty(key))
        .unwrap_or_default();
    sanitize::sanitize_slug(raw)
}
