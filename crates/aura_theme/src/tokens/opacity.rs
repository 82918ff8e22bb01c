//! Opacity tokens for theming

use crate::theme::ColorScheme;

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    TextSecondary,
    TextTertiary,
    AccentMuted,
    BorderPrimary,
    BorderSecondary,
    BorderAccent,
    GlassShadow,
}

/// Fixed opacities applied during derivation
///
/// The variable opacities (`glass`, `mystical`) come from
/// [`ThemeVariables`](crate::ThemeVariables); these are the constant ones.
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub text_secondary: f64,
    pub text_tertiary: f64,
    pub accent_muted: f64,
    pub border_primary: f64,
    pub border_secondary: f64,
    pub border_accent: f64,
    pub glass_shadow: f64,
}

impl OpacityTokens {
    /// Opacities for a background of the given scheme
    ///
    /// Light backgrounds get a steeper text ramp since black text at high
    /// alpha reads heavier than white.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                text_secondary: 0.7,
                text_tertiary: 0.5,
                glass_shadow: 0.5,
                ..Self::default()
            },
            ColorScheme::Light => Self {
                text_secondary: 0.6,
                text_tertiary: 0.4,
                glass_shadow: 0.1,
                ..Self::default()
            },
        }
    }

    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f64 {
        match token {
            OpacityToken::TextSecondary => self.text_secondary,
            OpacityToken::TextTertiary => self.text_tertiary,
            OpacityToken::AccentMuted => self.accent_muted,
            OpacityToken::BorderPrimary => self.border_primary,
            OpacityToken::BorderSecondary => self.border_secondary,
            OpacityToken::BorderAccent => self.border_accent,
            OpacityToken::GlassShadow => self.glass_shadow,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            text_secondary: 0.7,
            text_tertiary: 0.5,
            accent_muted: 0.2,
            border_primary: 0.1,
            border_secondary: 0.05,
            border_accent: 0.5,
            glass_shadow: 0.5,
        }
    }
}
