//! Sanitization of untrusted embed attribute values.
//!
//! Every `sanitize_*` function is total: malformed input yields a safe default instead of an
//! error. The stricter `validate_*` helpers are for the builder UI and report what is wrong.

use crate::color::{DEFAULT_COLOR, HexColor};
use crate::config::{BadgeLayout, BadgeSize, Slug, TargetId};
use crate::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

pub const SLUG_MAX_LEN: usize = 50;
pub const TARGET_ID_MAX_LEN: usize = 100;

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-F]{6}$").expect("valid regex"))
}

fn slug_charset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("valid regex"))
}

fn whitespace_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn hyphen_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid regex"))
}

/// Browser-style whitespace: Unicode `White_Space` plus the BOM.
fn is_html_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || is_html_whitespace(ch) || ch == '-' || ch == '_'
}

fn is_target_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn trim_html(input: &str) -> &str {
    input.trim_matches(is_html_whitespace)
}

fn take_chars(input: &str, max: usize) -> &str {
    match input.char_indices().nth(max) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Trims, caps at 50 characters, drops anything outside `[A-Za-z0-9 whitespace - _]` and
/// lowercases. An empty result becomes `"unknown"`.
pub fn sanitize_slug(input: &str) -> Slug {
    let capped = take_chars(trim_html(input), SLUG_MAX_LEN);
    let cleaned: String = capped
        .chars()
        .filter(|&ch| is_slug_char(ch))
        .collect::<String>()
        .to_lowercase();
    Slug::from_sanitized(cleaned)
}

/// Normalizes a color to `#RRGGBB` (uppercase). A missing `#` is tolerated; anything else that
/// is not six hex digits yields [`DEFAULT_COLOR`].
pub fn sanitize_color(input: &str) -> HexColor {
    normalize_hex(input).unwrap_or(DEFAULT_COLOR)
}

/// Like [`sanitize_color`] but `None` for an absent or empty attribute, so that optional
/// two-tone colors stay unset instead of turning into the default.
pub fn sanitize_optional_color(input: Option<&str>) -> Option<HexColor> {
    match input {
        Some(raw) if !raw.is_empty() => Some(sanitize_color(raw)),
        _ => None,
    }
}

fn normalize_hex(input: &str) -> Option<HexColor> {
    let upper = trim_html(input).to_uppercase();
    let with_hash = if upper.starts_with('#') {
        upper
    } else {
        format!("#{upper}")
    };
    if !hex_color_regex().is_match(&with_hash) {
        return None;
    }
    with_hash.parse().ok()
}

/// Case-insensitive match against `s`, `m`, `l`, `auto`; anything else is medium.
pub fn sanitize_size(input: &str) -> BadgeSize {
    trim_html(input).parse().unwrap_or_default()
}

/// Case-insensitive match against `standard`, `pill`, `horizontal`; anything else is standard.
pub fn sanitize_layout(input: &str) -> BadgeLayout {
    trim_html(input).parse().unwrap_or_default()
}

/// Trims, caps at 100 characters and keeps only `[A-Za-z0-9-_]`. `None` means "no explicit
/// target".
pub fn sanitize_target_id(input: &str) -> Option<TargetId> {
    let capped = take_chars(trim_html(input), TARGET_ID_MAX_LEN);
    let cleaned: String = capped.chars().filter(|&ch| is_target_char(ch)).collect();
    TargetId::from_sanitized(cleaned)
}

/// Converts a display name into a URL-friendly slug: `"Acme  Corp!"` becomes `"acme-corp"`.
pub fn name_to_slug(name: &str) -> String {
    let lowered = trim_html(name).to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|&ch| !ch.is_ascii_uppercase() && is_slug_char(ch))
        .collect();
    let dashed = whitespace_run_regex().replace_all(&cleaned, "-");
    let collapsed = hyphen_run_regex().replace_all(&dashed, "-");
    take_chars(collapsed.trim_matches('-'), SLUG_MAX_LEN).to_string()
}

/// Strict partner-name validation used by the builder. Returns the trimmed name.
pub fn validate_slug(input: &str) -> Result<String, ValidationError> {
    let trimmed = trim_html(input);
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    if trimmed.chars().count() > SLUG_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: SLUG_MAX_LEN,
        });
    }
    if !slug_charset_regex().is_match(trimmed) {
        return Err(ValidationError::InvalidCharacters { field: "name" });
    }
    Ok(trimmed.to_string())
}

/// Strict color validation used by the builder.
pub fn validate_color(input: &str) -> Result<HexColor, ValidationError> {
    if trim_html(input).is_empty() {
        return Err(ValidationError::Required { field: "color" });
    }
    normalize_hex(input).ok_or_else(|| ValidationError::InvalidColor {
        input: input.to_string(),
    })
}
