//! Theme derivation
//!
//! [`generate_theme`] turns six [`ThemeVariables`] into a fully resolved
//! [`Theme`]. It is a single pass with no I/O: the same input always
//! produces an equal theme, and malformed hex input degrades to black
//! instead of failing.

use indexmap::IndexMap;
use serde::Serialize;

use crate::color::{format_number, hex_to_rgb, optimal_text_color, rgba, Rgb, BLACK_HEX, WHITE_HEX};
use crate::contrast::ContrastReport;
use crate::tokens::*;
use crate::variables::ThemeVariables;

/// Tertiary accent shipped with every theme.
///
/// This is a fixed brand color carried over from the first release of the
/// palette. It is intentionally not derived from `secondary`.
pub const LEGACY_ACCENT_TERTIARY: &str = "#A855F7";

/// Channel offset between the base and the secondary background tier
pub const BACKGROUND_SECONDARY_OFFSET: u8 = 15;

/// Channel offset between the base and the tertiary background tier
pub const BACKGROUND_TERTIARY_OFFSET: u8 = 25;

/// Whether a theme sits on a light or dark base
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// A fully resolved, immutable set of theme tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    pub scheme: ColorScheme,
    pub variables: ThemeVariables,
    pub colors: ThemeColors,
    pub shadows: ShadowTokens,
    pub contrast: ContrastReport,
}

impl Theme {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> &str {
        self.colors.get(token)
    }

    /// Get a shadow token value
    pub fn shadow(&self, token: ShadowToken) -> &str {
        self.shadows.get(token)
    }

    /// Flatten every token into a CSS variable map.
    ///
    /// Keys are variable names without the `--` prefix, in token order:
    /// colors first, then `shadow-sm`, `shadow-md`, `shadow-lg`,
    /// `shadow-glow`.
    ///
    /// ```ignore
    /// let vars = theme.to_css_variable_map();
    /// // vars["background-primary"] == "#000000"
    /// // vars["mystical-blur"] == "30px"
    /// ```
    pub fn to_css_variable_map(&self) -> IndexMap<String, String> {
        let mut vars = IndexMap::with_capacity(ColorToken::all().len() + 4);
        for &token in ColorToken::all() {
            vars.insert(token.css_name().to_string(), self.color(token).to_string());
        }
        for (name, token) in [
            ("shadow-sm", ShadowToken::Sm),
            ("shadow-md", ShadowToken::Md),
            ("shadow-lg", ShadowToken::Lg),
            ("shadow-glow", ShadowToken::Glow),
        ] {
            vars.insert(name.to_string(), self.shadow(token).to_string());
        }
        vars
    }

    /// Render the variable map as a CSS rule, e.g. `:root { --text-primary: #FFFFFF; }`
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = format!("{selector} {{\n");
        for (name, value) in self.to_css_variable_map() {
            out.push_str(&format!("  --{name}: {value};\n"));
        }
        out.push_str("}\n");
        out
    }
}

/// Derive a complete theme from its seed variables.
pub fn generate_theme(name: &str, variables: &ThemeVariables) -> Theme {
    let ThemeVariables {
        primary,
        secondary,
        base,
        text,
        glass,
        mystical,
    } = variables;
    let (glass, mystical) = (*glass, *mystical);

    let base_rgb = hex_to_rgb(base);
    let primary_rgb = hex_to_rgb(primary);
    let secondary_rgb = hex_to_rgb(secondary);
    let text_rgb = hex_to_rgb(text);
    let (primary, secondary) = (primary_rgb.to_hex(), secondary_rgb.to_hex());
    let scheme = if base_rgb.is_dark() {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    };
    let opacity = OpacityTokens::for_scheme(scheme);

    let (background_secondary, background_tertiary) = match scheme {
        ColorScheme::Dark => (
            base_rgb.lighten(BACKGROUND_SECONDARY_OFFSET),
            base_rgb.lighten(BACKGROUND_TERTIARY_OFFSET),
        ),
        ColorScheme::Light => (
            base_rgb.darken(BACKGROUND_SECONDARY_OFFSET),
            base_rgb.darken(BACKGROUND_TERTIARY_OFFSET),
        ),
    };

    let background = BackgroundColors {
        primary: base_rgb.to_hex(),
        secondary: background_secondary.to_hex(),
        tertiary: background_tertiary.to_hex(),
        glass: text_rgb.to_rgba(glass),
        glass_opaque: text_rgb.to_rgba(glass * 2.0),
        glass_subtle: text_rgb.to_rgba(glass * 0.5),
    };

    let text_primary = optimal_text_color(&background.primary);
    let text_colors = TextColors {
        primary: text_primary.to_string(),
        secondary: rgba(text_primary, opacity.get(OpacityToken::TextSecondary)),
        tertiary: rgba(text_primary, opacity.get(OpacityToken::TextTertiary)),
        inverse: (if text_primary == WHITE_HEX { BLACK_HEX } else { WHITE_HEX }).to_string(),
    };

    let accent = AccentColors {
        primary: primary.clone(),
        secondary: secondary.clone(),
        tertiary: LEGACY_ACCENT_TERTIARY.to_string(),
        muted: primary_rgb.to_rgba(opacity.get(OpacityToken::AccentMuted)),
    };

    let glass_colors = GlassColors {
        background: text_rgb.to_rgba(glass),
        border: text_rgb.to_rgba(glass * 2.0),
        highlight: text_rgb.to_rgba(glass * 3.0),
        shadow: Rgb::BLACK.to_rgba(opacity.get(OpacityToken::GlassShadow)),
    };

    let border = BorderColors {
        primary: text_rgb.to_rgba(opacity.get(OpacityToken::BorderPrimary)),
        secondary: text_rgb.to_rgba(opacity.get(OpacityToken::BorderSecondary)),
        accent: primary_rgb.to_rgba(opacity.get(OpacityToken::BorderAccent)),
    };

    let gradients = Gradients {
        primary: format!("linear-gradient(135deg, {primary} 0%, {secondary} 100%)"),
        secondary: format!("linear-gradient(135deg, {secondary} 0%, {primary} 100%)"),
        mystical: format!(
            "radial-gradient(circle, {} 0%, transparent 70%)",
            primary_rgb.to_rgba(mystical)
        ),
        background: format!(
            "linear-gradient(180deg, {} 0%, {} 100%)",
            background.primary, background.secondary
        ),
    };

    let mystical_tokens = MysticalTokens {
        glow: primary_rgb.to_rgba(mystical * 0.4),
        blur: format!("{}px", format_number(mystical * 100.0)),
        orb: primary_rgb.to_rgba(mystical * 0.2),
    };

    let shadows = ShadowTokens::new(scheme, &mystical_tokens.glow, mystical);
    let contrast = ContrastReport::measure(&text_colors.primary, &background, &primary);

    tracing::trace!(
        "generate_theme: {} ({:?}, min text contrast {:.2})",
        name,
        scheme,
        contrast.min_text_ratio()
    );

    Theme {
        name: name.to_string(),
        scheme,
        variables: variables.clone(),
        colors: ThemeColors {
            background,
            text: text_colors,
            accent,
            glass: glass_colors,
            border,
            gradients,
            mystical: mystical_tokens,
        },
        shadows,
        contrast,
    }
}
