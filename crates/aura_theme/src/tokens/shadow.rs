//! Shadow tokens for theming

use serde::Serialize;

use crate::color::{format_number, Rgb};
use crate::theme::ColorScheme;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Glow,
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    /// Any CSS color string
    pub color: String,
}

impl Shadow {
    pub fn new(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: impl Into<String>) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.into(),
        }
    }

    /// CSS `box-shadow` value, e.g. `0 4px 6px -1px rgba(0, 0, 0, 0.3)`
    pub fn to_css(&self) -> String {
        fn px(v: f64) -> String {
            let n = format_number(v);
            if n == "0" {
                n
            } else {
                format!("{n}px")
            }
        }

        let mut out = format!("{} {} {}", px(self.offset_x), px(self.offset_y), px(self.blur));
        if self.spread != 0.0 {
            out.push(' ');
            out.push_str(&px(self.spread));
        }
        out.push(' ');
        out.push_str(&self.color);
        out
    }
}

/// Complete set of shadow tokens, rendered as CSS `box-shadow` strings
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowTokens {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub glow: String,
}

impl ShadowTokens {
    /// Elevation shadows for a scheme plus a glow in `glow_color`
    pub fn new(scheme: ColorScheme, glow_color: &str, mystical: f64) -> Self {
        let (sm_alpha, alpha) = match scheme {
            ColorScheme::Dark => (0.2, 0.3),
            ColorScheme::Light => (0.05, 0.1),
        };
        let black = Rgb::BLACK;
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, black.to_rgba(sm_alpha)).to_css(),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, black.to_rgba(alpha)).to_css(),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, black.to_rgba(alpha)).to_css(),
            glow: Shadow::new(0.0, 0.0, mystical * 60.0, 0.0, glow_color).to_css(),
        }
    }

    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &str {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Glow => &self.glow,
        }
    }
}
