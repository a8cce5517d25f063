//! Color types and textual color resolution
//!
//! A color specification is one of four syntaxes, tried in order:
//! a named palette key, a `#` hex string, an `rgb(...)`/`rgba(...)`
//! functional form, and finally the opaque-white fallback.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color_parser;

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// Channels are read left to right and reading stops at the first
    /// digit group that is not hex, leaving the rest at zero. Alpha starts
    /// at 255. Any other length gives opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        let mut channels = [0u8, 0, 0, 255];

        match digits.len() {
            3 => {
                for (slot, &d) in channels.iter_mut().zip(digits) {
                    match hex_value(d) {
                        Some(v) => *slot = v << 4 | v,
                        None => break,
                    }
                }
            }
            6 | 8 => {
                for (slot, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                    match (hex_value(pair[0]), hex_value(pair[1])) {
                        (Some(hi), Some(lo)) => *slot = hi << 4 | lo,
                        _ => break,
                    }
                }
            }
            _ => {}
        }

        let [r, g, b, a] = channels;
        Self { r, g, b, a }
    }

    /// Convert to array [r, g, b, a]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|v| v as u8)
}

/// Named colors. Keys are matched case-sensitively.
pub static PALETTE: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("gray", "#a4b0be"),
    ("red", "#e74c3c"),
    ("blue", "#3498db"),
    ("green", "#2ecc71"),
    ("yellow", "#ffd43b"),
];

/// Look up a palette key, returning its hex string
pub fn named_color(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, hex)| *hex)
}

/// The branch a color specification resolved through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec<'a> {
    /// Palette key, carrying the palette's hex string
    Named(&'static str),
    /// `#`-prefixed input, passed through untouched
    Hex(&'a str),
    /// `rgb(...)` or `rgba(...)`
    Functional(Rgba),
    /// Anything else
    Fallback,
}

impl ColorSpec<'_> {
    pub const FALLBACK_HEX: &'static str = "#ffffff";

    /// The hex string a canvas should receive, if this spec is hex-backed
    pub fn hex(&self) -> Option<&str> {
        match self {
            ColorSpec::Named(hex) => Some(*hex),
            ColorSpec::Hex(hex) => Some(*hex),
            ColorSpec::Fallback => Some(Self::FALLBACK_HEX),
            ColorSpec::Functional(_) => None,
        }
    }

    pub fn to_rgba(&self) -> Rgba {
        match self {
            ColorSpec::Functional(color) => *color,
            other => other.hex().map(Rgba::from_hex).unwrap_or(Rgba::WHITE),
        }
    }
}

/// Classify a textual color specification
pub fn parse_color_spec(spec: &str) -> ColorSpec<'_> {
    if let Some(hex) = named_color(spec) {
        return ColorSpec::Named(hex);
    }
    if spec.starts_with('#') {
        return ColorSpec::Hex(spec);
    }

    let lowered = spec.to_lowercase();
    if lowered.starts_with("rgb") {
        let compact: String = lowered.chars().filter(|c| *c != ' ' && *c != '\t').collect();
        if let Some(color) = color_parser::parse_functional(&compact) {
            return ColorSpec::Functional(color);
        }
    }

    debug!("Unrecognized color spec {:?}, using white", spec);
    ColorSpec::Fallback
}

/// Resolve a color specification to RGBA. Never fails.
pub fn resolve(spec: &str) -> Rgba {
    parse_color_spec(spec).to_rgba()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        assert_eq!(resolve("white"), Rgba::rgb(0xff, 0xff, 0xff));
        assert_eq!(resolve("black"), Rgba::rgb(0, 0, 0));
        assert_eq!(resolve("gray"), Rgba::rgb(0xa4, 0xb0, 0xbe));
        assert_eq!(resolve("red"), Rgba::rgb(0xe7, 0x4c, 0x3c));
        assert_eq!(resolve("blue"), Rgba::rgb(0x34, 0x98, 0xdb));
        assert_eq!(resolve("green"), Rgba::rgb(0x2e, 0xcc, 0x71));
        assert_eq!(resolve("yellow"), Rgba::rgb(0xff, 0xd4, 0x3b));
    }

    #[test]
    fn test_palette_is_case_sensitive() {
        assert_eq!(parse_color_spec("Red"), ColorSpec::Fallback);
        assert_eq!(resolve("RED"), Rgba::WHITE);
    }

    #[test]
    fn test_fallback() {
        for spec in ["", "purple", "hsl(0,100%,50%)", "rgb", "rgb(1,2)", "rgba(.5,1,2)"] {
            assert_eq!(resolve(spec), Rgba::new(255, 255, 255, 255), "{spec}");
        }
    }

    #[test]
    fn test_functional() {
        assert_eq!(resolve("rgb(255,0,0)"), Rgba::new(255, 0, 0, 255));
        assert_eq!(resolve("rgba(0,128,255,0.5)"), Rgba::new(0, 128, 255, 128));
        assert_eq!(resolve("rgba(10,20,30,80)"), Rgba::new(10, 20, 30, 80));
        assert_eq!(resolve("RGB( 1 ,\t2, 3 )"), Rgba::new(1, 2, 3, 255));
    }

    #[test]
    fn test_hex_passthrough() {
        assert_eq!(parse_color_spec("#123456"), ColorSpec::Hex("#123456"));
        assert_eq!(resolve("#123456"), Rgba::rgb(0x12, 0x34, 0x56));
        assert_eq!(resolve("#abc"), Rgba::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(resolve("#11223380"), Rgba::new(0x11, 0x22, 0x33, 0x80));
    }

    #[test]
    fn test_from_hex_malformed() {
        assert_eq!(Rgba::from_hex("#12"), Rgba::BLACK);
        assert_eq!(Rgba::from_hex("#12zz56"), Rgba::new(0x12, 0, 0, 255));
        assert_eq!(Rgba::from_hex("#+f0000"), Rgba::BLACK);
    }
}
