use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A `#RRGGBB` color. Always displayed uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Brand default used whenever a color attribute is missing or malformed.
pub const DEFAULT_COLOR: HexColor = HexColor::new(0x10, 0x19, 0x48);

/// Pill text color on light backgrounds.
pub const DARK_NAVY: HexColor = HexColor::new(0x03, 0x24, 0x3C);

pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance in `0.0..=1.0` using the `0.299/0.587/0.114` weights.
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// Text color with enough contrast against `self` as a background.
    pub fn contrast_text(&self) -> HexColor {
        if self.is_light() { DARK_NAVY } else { WHITE }
    }
}

impl Default for HexColor {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color {input:?} (use #RRGGBB)")]
pub struct ParseHexColorError {
    pub input: String,
}

impl FromStr for HexColor {
    type Err = ParseHexColorError;

    /// Strict `#RRGGBB` parse (either case). No trimming, no missing `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHexColorError {
            input: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_uppercase_with_hash() {
        assert_eq!(HexColor::new(0x00, 0xba, 0xff).to_string(), "#00BAFF");
        assert_eq!(DEFAULT_COLOR.to_string(), "#101948");
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("#00baff".parse::<HexColor>(), Ok(HexColor::new(0, 0xBA, 0xFF)));
        assert!("00BAFF".parse::<HexColor>().is_err());
        assert!("#00BAF".parse::<HexColor>().is_err());
        assert!("#00BAFG".parse::<HexColor>().is_err());
        assert!(" #00BAFF".parse::<HexColor>().is_err());
    }

    #[test]
    fn contrast_text_follows_luminance_threshold() {
        // (0.587 * 186 + 0.114 * 255) / 255 ~= 0.542
        let electric_blue = HexColor::new(0x00, 0xBA, 0xFF);
        assert!(electric_blue.luminance() > 0.5);
        assert_eq!(electric_blue.contrast_text(), DARK_NAVY);

        let dark = DEFAULT_COLOR;
        assert!(!dark.is_light());
        assert_eq!(dark.contrast_text(), WHITE);

        let easy_green = HexColor::new(0xC8, 0xED, 0x5D);
        assert!(easy_green.is_light());
        assert_eq!(easy_green.contrast_text(), DARK_NAVY);
    }
}
