//! Official LA.IO brand colors and the two-tone pill schemes built from them.

use crate::color::HexColor;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetColor {
    pub hex: HexColor,
    pub name: &'static str,
}

const fn preset(r: u8, g: u8, b: u8, name: &'static str) -> PresetColor {
    PresetColor {
        hex: HexColor::new(r, g, b),
        name,
    }
}

pub const DARK: [PresetColor; 5] = [
    preset(0x10, 0x19, 0x48, "Dark Purple"),
    preset(0x17, 0x27, 0x08, "Dark Green"),
    preset(0x01, 0x23, 0x3C, "Dark Blue"),
    preset(0x30, 0x25, 0x11, "Dark Orange"),
    preset(0x23, 0x1F, 0x20, "Dark Gray"),
];

pub const EASY: [PresetColor; 5] = [
    preset(0xE3, 0x85, 0xFE, "Easy Magenta"),
    preset(0xC8, 0xED, 0x5D, "Easy Green"),
    preset(0x63, 0xDC, 0xDE, "Easy Blue"),
    preset(0xF1, 0xDC, 0x43, "Easy Orange"),
    preset(0xE3, 0xE6, 0xE7, "Easy Gray"),
];

pub const ELECTRIC: [PresetColor; 5] = [
    preset(0xF6, 0x29, 0xCB, "Electric Magenta"),
    preset(0x96, 0xF9, 0x0B, "Electric Green"),
    preset(0x00, 0xB9, 0xFE, "Electric Blue"),
    preset(0xF5, 0xC1, 0x24, "Electric Orange"),
    preset(0x92, 0x94, 0x97, "Gray"),
];

/// All presets, dark first.
pub fn all_presets() -> impl Iterator<Item = &'static PresetColor> {
    DARK.iter().chain(EASY.iter()).chain(ELECTRIC.iter())
}

/// One hue in its dark, easy and electric variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorFamily {
    pub name: &'static str,
    pub dark: HexColor,
    pub easy: HexColor,
    pub electric: HexColor,
}

pub const FAMILIES: [ColorFamily; 5] = [
    family("Magenta", 0),
    family("Green", 1),
    family("Blue", 2),
    family("Orange", 3),
    family("Gray", 4),
];

const fn family(name: &'static str, idx: usize) -> ColorFamily {
    ColorFamily {
        name,
        dark: DARK[idx].hex,
        easy: EASY[idx].hex,
        electric: ELECTRIC[idx].hex,
    }
}

pub fn find_family(name: &str) -> Option<&'static ColorFamily> {
    FAMILIES.iter().find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PillScheme {
    #[default]
    EasyDark,
    ElectricDark,
}

impl FromStr for PillScheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy-dark" => Ok(Self::EasyDark),
            "electric-dark" => Ok(Self::ElectricDark),
            _ => Err(()),
        }
    }
}

/// Background and foreground of a two-tone pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillColors {
    pub bg: HexColor,
    pub fg: HexColor,
}

/// Colors for a pill scheme. Unknown families fall back to Blue easy-dark.
///
/// By default the dark variant is the background; `reversed` swaps them.
pub fn pill_scheme_colors(family_name: &str, scheme: PillScheme, reversed: bool) -> PillColors {
    let (dark, light) = match find_family(family_name) {
        Some(fam) => {
            let light = match scheme {
                PillScheme::EasyDark => fam.easy,
                PillScheme::ElectricDark => fam.electric,
            };
            (fam.dark, light)
        }
        None => (FAMILIES[2].dark, FAMILIES[2].easy),
    };
    if reversed {
        PillColors { bg: light, fg: dark }
    } else {
        PillColors { bg: dark, fg: light }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_line_up_with_preset_rows() {
        assert_eq!(FAMILIES[0].dark.to_string(), "#101948");
        assert_eq!(FAMILIES[2].electric.to_string(), "#00B9FE");
        assert_eq!(all_presets().count(), 15);
    }

    #[test]
    fn pill_scheme_colors_handles_reverse_and_unknown_family() {
        let green = pill_scheme_colors("green", PillScheme::ElectricDark, false);
        assert_eq!(green.bg.to_string(), "#172708");
        assert_eq!(green.fg.to_string(), "#96F90B");

        let reversed = pill_scheme_colors("Green", PillScheme::ElectricDark, true);
        assert_eq!(reversed.bg, green.fg);
        assert_eq!(reversed.fg, green.bg);

        let fallback = pill_scheme_colors("Teal", PillScheme::ElectricDark, false);
        assert_eq!(fallback.bg.to_string(), "#01233C");
        assert_eq!(fallback.fg.to_string(), "#63DCDE");
    }
}
