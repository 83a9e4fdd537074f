use laio_badge_core::color::{DARK_NAVY, WHITE};
use laio_badge_core::{BadgeConfig, BadgeLayout, EmbedAttributes, HexColor};
use laio_badge_render::{BadgeElement, render_config_svg, render_svg};

const NAVY: HexColor = HexColor::new(0x10, 0x19, 0x48);
const SKY: HexColor = HexColor::new(0x00, 0xBA, 0xFF);

fn parse(svg: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(svg).expect("well-formed svg")
}

fn root_attr<'a>(doc: &'a roxmltree::Document<'a>, name: &str) -> Option<&'a str> {
    doc.root_element().attribute(name)
}

#[test]
fn every_layout_is_well_formed_and_accessible() {
    for layout in BadgeLayout::ALL {
        let svg = render_svg(layout, 160.0, NAVY, None, None);
        let doc = parse(&svg);
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "svg", "{layout}");
        assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
        assert_eq!(root.attribute("role"), Some("img"));
        assert_eq!(root.attribute("aria-label"), Some("LA.IO badge"));
        assert_eq!(root.attribute("width"), Some("160"));
        assert!(
            root.descendants().any(|n| n.has_tag_name("path")),
            "{layout} has glyph paths"
        );
    }
}

#[test]
fn view_boxes_and_heights_per_layout() {
    let svg = render_svg(BadgeLayout::Standard, 220.0, NAVY, None, None);
    let doc = parse(&svg);
    assert_eq!(root_attr(&doc, "viewBox"), Some("0 0 274.03 67.72"));
    assert_eq!(root_attr(&doc, "width"), Some("220"));
    assert_eq!(root_attr(&doc, "height"), None);

    let svg = render_svg(BadgeLayout::Pill, 160.0, NAVY, None, None);
    let doc = parse(&svg);
    assert_eq!(root_attr(&doc, "viewBox"), Some("0 0 130.23 23.58"));
    assert_eq!(root_attr(&doc, "height"), Some("29"));

    let svg = render_svg(BadgeLayout::Horizontal, 160.0, NAVY, None, None);
    let doc = parse(&svg);
    assert_eq!(root_attr(&doc, "viewBox"), Some("0 0 459.69 67.88"));
    assert_eq!(root_attr(&doc, "height"), Some("24"));
}

#[test]
fn out_of_range_widths_fall_back() {
    for width in [10.0, 501.0, f64::NAN] {
        let svg = render_svg(BadgeLayout::Horizontal, width, NAVY, None, None);
        let doc = parse(&svg);
        assert_eq!(root_attr(&doc, "width"), Some("160"));
    }
}

#[test]
fn standard_paints_glyphs_with_badge_color() {
    let svg = render_svg(BadgeLayout::Standard, 160.0, SKY, None, None);
    let doc = parse(&svg);
    let fills: Vec<_> = doc
        .descendants()
        .filter_map(|n| n.attribute("fill"))
        .collect();
    assert_eq!(fills, vec!["#00BAFF"]);
}

#[test]
fn pill_single_color_uses_contrast_text() {
    // 0.587 * 186 + 0.114 * 255 puts this sky blue just above the 0.5 luminance threshold.
    let svg = render_svg(BadgeLayout::Pill, 160.0, SKY, None, None);
    let doc = parse(&svg);
    let rect = doc
        .descendants()
        .find(|n| n.has_tag_name("rect"))
        .expect("pill background");
    assert_eq!(rect.attribute("fill"), Some("#00BAFF"));
    assert_eq!(rect.attribute("rx"), Some("11.79"));
    let group = doc
        .descendants()
        .find(|n| n.has_tag_name("g"))
        .expect("glyph group");
    assert_eq!(group.attribute("fill"), Some(DARK_NAVY.to_string().as_str()));

    let svg = render_svg(BadgeLayout::Pill, 160.0, NAVY, None, None);
    let doc = parse(&svg);
    let group = doc.descendants().find(|n| n.has_tag_name("g")).unwrap();
    assert_eq!(group.attribute("fill"), Some(WHITE.to_string().as_str()));
}

#[test]
fn pill_two_tone_ignores_badge_color() {
    let bg = HexColor::new(0x01, 0x23, 0x3C);
    let fg = HexColor::new(0x63, 0xDC, 0xDE);
    let svg = render_svg(BadgeLayout::Pill, 160.0, SKY, Some(bg), Some(fg));
    assert!(svg.contains(r##"fill="#01233C""##));
    assert!(svg.contains(r##"<g fill="#63DCDE">"##));
    assert!(!svg.contains("#00BAFF"));
}

#[test]
fn output_is_inert_and_deterministic() {
    for layout in BadgeLayout::ALL {
        let a = render_svg(layout, 180.0, SKY, None, None);
        let b = render_svg(layout, 180.0, SKY, None, None);
        assert_eq!(a, b);
        for needle in ["<script", "href", "url(", "<image", "<foreignObject"] {
            assert!(!a.contains(needle), "{layout} contains {needle}");
        }
        let doc = parse(&a);
        assert!(
            doc.descendants()
                .flat_map(|n| n.attributes())
                .all(|attr| !attr.name().starts_with("on")),
            "{layout} has an event handler attribute"
        );
    }
}

#[test]
fn config_svg_follows_size_and_layout() {
    let config = BadgeConfig::resolve(
        &EmbedAttributes::new()
            .with("data-size", "l")
            .with("data-layout", "horizontal")
            .with("data-color", "00baff"),
    );
    let svg = render_config_svg(&config);
    let doc = parse(&svg);
    assert_eq!(root_attr(&doc, "width"), Some("220"));
    assert_eq!(root_attr(&doc, "height"), Some("32"));
    assert!(svg.contains(r##"fill="#00BAFF""##));
}

#[test]
fn element_html_parses_as_markup() {
    let config = BadgeConfig::resolve(&EmbedAttributes::new().with("data-slug", "acme"));
    let html = BadgeElement::build(&config).to_html();
    let doc = parse(&html);
    let wrapper = doc.root_element();
    assert_eq!(wrapper.tag_name().name(), "span");
    assert!(wrapper.has_attribute("data-laio-badge"));
    let anchor = wrapper.first_element_child().expect("anchor");
    assert_eq!(
        anchor.attribute("href"),
        Some("https://la.io/?ref=badge&slug=acme")
    );
    assert_eq!(anchor.attribute("rel"), Some("noopener"));
    assert!(anchor.first_element_child().unwrap().has_tag_name("svg"));
}
