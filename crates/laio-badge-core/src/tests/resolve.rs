use crate::*;
use serde_json::json;

fn attrs(pairs: &[(&str, &str)]) -> EmbedAttributes {
    pairs.iter().copied().collect()
}

#[test]
fn resolve_defaults_when_no_attributes() {
    let config = BadgeConfig::resolve(&EmbedAttributes::new());
    assert_eq!(config, BadgeConfig::default());
    assert_eq!(config.slug.as_str(), "unknown");
    assert_eq!(config.color.to_string(), "#101948");
    assert_eq!(config.size, BadgeSize::Medium);
    assert_eq!(config.layout, BadgeLayout::Standard);
    assert!(config.track);
    assert!(!config.debug);
}

#[test]
fn resolve_sanitizes_every_attribute() {
    let config = BadgeConfig::resolve(&attrs(&[
        ("data-slug", "Acme! Corp"),
        ("data-color", "blue"),
        ("data-size", "XL"),
        ("data-layout", " PILL "),
        ("data-target", "badge<slot>"),
        ("data-debug", "1"),
        ("data-track", "0"),
    ]));
    assert_eq!(config.slug.as_str(), "acme corp");
    assert_eq!(config.color, DEFAULT_COLOR);
    assert_eq!(config.size, BadgeSize::Medium);
    assert_eq!(config.pixels(), 160);
    assert_eq!(config.layout, BadgeLayout::Pill);
    assert_eq!(config.target_id.as_ref().map(TargetId::as_str), Some("badgeslot"));
    assert!(config.debug);
    assert!(!config.track);
}

#[test]
fn debug_and_track_require_exact_values() {
    let config = BadgeConfig::resolve(&attrs(&[("data-debug", "true"), ("data-track", "false")]));
    assert!(!config.debug);
    assert!(config.track);
}

#[test]
fn slug_aliases_follow_priority_and_skip_empty_values() {
    let config = BadgeConfig::resolve(&attrs(&[
        ("data-client", "Client Co"),
        ("data-org-slug", "Org Slug"),
        ("data-slug", ""),
    ]));
    assert_eq!(config.slug.as_str(), "org slug");

    let config = BadgeConfig::resolve(&attrs(&[
        ("data-partner", "partner"),
        ("data-org_slug", "underscored"),
    ]));
    assert_eq!(config.slug.as_str(), "underscored");

    let config = BadgeConfig::resolve(&attrs(&[("data-orgslug", "flat")]));
    assert_eq!(config.slug.as_str(), "flat");
}

#[test]
fn two_tone_colors_are_independent_and_optional() {
    let config = BadgeConfig::resolve(&attrs(&[
        ("data-bg-color", "#01233c"),
        ("data-fg-color", "nope"),
    ]));
    assert_eq!(config.bg_color.map(|c| c.to_string()).as_deref(), Some("#01233C"));
    assert_eq!(config.fg_color, Some(DEFAULT_COLOR));
    assert_eq!(config.color, DEFAULT_COLOR);

    let config = BadgeConfig::resolve(&attrs(&[("bgColor", "")]));
    assert_eq!(config.bg_color, None);
    assert_eq!(config.fg_color, None);
}

#[test]
fn dataset_keys_match_the_html_rule() {
    use crate::config::dataset_key;
    assert_eq!(dataset_key("data-bg-color"), "bgColor");
    assert_eq!(dataset_key("data-org_slug"), "org_slug");
    assert_eq!(dataset_key("data-org-slug"), "orgSlug");
    assert_eq!(dataset_key("data-x-1"), "x-1");
    assert_eq!(dataset_key("fgColor"), "fgColor");
}

#[test]
fn resolved_config_serializes_to_wire_values() {
    let config = BadgeConfig::resolve(&attrs(&[
        ("data-slug", "acme"),
        ("data-size", "l"),
        ("data-layout", "horizontal"),
    ]));
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "slug": "acme",
            "color": "#101948",
            "bgColor": null,
            "fgColor": null,
            "size": "l",
            "layout": "horizontal",
            "targetId": null,
            "debug": false,
            "track": true
        })
    );
}
