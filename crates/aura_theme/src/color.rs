//! Color math for theme derivation
//!
//! Everything here works on `#RRGGBB` strings or the [`Rgb`] triple they
//! parse into. The lossy entry point [`hex_to_rgb`] never fails: input that
//! is not a 6-digit hex color degrades to black. Use [`Rgb::parse_hex`] when
//! "black" and "invalid" must be told apart.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Text color used on dark backgrounds
pub const WHITE_HEX: &str = "#FFFFFF";

/// Text color used on light backgrounds
pub const BLACK_HEX: &str = "#000000";

/// Perceived brightness below which a color counts as dark
const DARK_BRIGHTNESS_THRESHOLD: u32 = 128;

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#?([a-fA-F\d]{2})([a-fA-F\d]{2})([a-fA-F\d]{2})$")
            .expect("hex color pattern is valid")
    })
}

/// An 8-bit sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) string, case-insensitive.
    pub fn parse_hex(hex: &str) -> Result<Self, ThemeError> {
        let caps = hex_pattern()
            .captures(hex.trim())
            .ok_or_else(|| ThemeError::InvalidHex(hex.to_string()))?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16);
        match (channel(1), channel(2), channel(3)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ThemeError::InvalidHex(hex.to_string())),
        }
    }

    /// Render as uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Add `offset` to every channel, saturating at 255
    pub fn lighten(self, offset: u8) -> Self {
        Self::new(
            self.r.saturating_add(offset),
            self.g.saturating_add(offset),
            self.b.saturating_add(offset),
        )
    }

    /// Subtract `offset` from every channel, saturating at 0
    pub fn darken(self, offset: u8) -> Self {
        Self::new(
            self.r.saturating_sub(offset),
            self.g.saturating_sub(offset),
            self.b.saturating_sub(offset),
        )
    }

    /// Perceived brightness on a 0..=255 scale (ITU-R BT.601 weights)
    pub fn brightness(self) -> u32 {
        (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000
    }

    pub fn is_dark(self) -> bool {
        self.brightness() < DARK_BRIGHTNESS_THRESHOLD
    }

    /// WCAG 2.1 relative luminance in [0.0, 1.0]
    pub fn luminance(self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// CSS `rgba(r, g, b, a)` with `alpha` clamped to [0, 1]
    pub fn to_rgba(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_alpha(alpha)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse a hex color, falling back to black on malformed input.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    Rgb::parse_hex(hex).unwrap_or_else(|_| {
        tracing::debug!("hex_to_rgb: `{}` is not #RRGGBB, using black", hex);
        Rgb::BLACK
    })
}

/// WCAG relative luminance of a hex color
pub fn luminance(hex: &str) -> f64 {
    hex_to_rgb(hex).luminance()
}

/// WCAG contrast ratio between two hex colors, in [1.0, 21.0]
///
/// The result does not depend on argument order.
pub fn contrast_ratio(hex1: &str, hex2: &str) -> f64 {
    let l1 = luminance(hex1);
    let l2 = luminance(hex2);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn is_dark(hex: &str) -> bool {
    hex_to_rgb(hex).is_dark()
}

/// White text on dark backgrounds, black text on light ones
pub fn optimal_text_color(hex: &str) -> &'static str {
    if is_dark(hex) {
        WHITE_HEX
    } else {
        BLACK_HEX
    }
}

/// CSS `rgba(...)` for a hex color at the given alpha
pub fn rgba(hex: &str, alpha: f64) -> String {
    hex_to_rgb(hex).to_rgba(alpha)
}

/// Clamp to [0, 1], round to 3 decimals and print in shortest form (`0.1`, `1`)
pub(crate) fn format_alpha(alpha: f64) -> String {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    let rounded = (alpha * 1000.0).round() / 1000.0;
    format!("{rounded}")
}

/// Round to 2 decimals and print in shortest form (`30`, `12.5`)
pub(crate) fn format_number(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing `-0`
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}
