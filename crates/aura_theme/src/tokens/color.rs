//! Color tokens for theming

use serde::Serialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Background tiers
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,
    BackgroundGlass,
    BackgroundGlassOpaque,
    BackgroundGlassSubtle,

    // Text ramp
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,

    // Accent colors
    AccentPrimary,
    AccentSecondary,
    AccentTertiary,
    AccentMuted,

    // Glass-morphism surfaces
    GlassBackground,
    GlassBorder,
    GlassHighlight,
    GlassShadow,

    // Border colors
    BorderPrimary,
    BorderSecondary,
    BorderAccent,

    // Gradients
    GradientPrimary,
    GradientSecondary,
    GradientMystical,
    GradientBackground,

    // Mystical effects
    MysticalGlow,
    MysticalBlur,
    MysticalOrb,
}

impl ColorToken {
    /// Every token, grouped the way [`ThemeColors`] nests them
    pub fn all() -> &'static [ColorToken] {
        use ColorToken::*;
        const TOKENS: [ColorToken; 28] = [
            BackgroundPrimary,
            BackgroundSecondary,
            BackgroundTertiary,
            BackgroundGlass,
            BackgroundGlassOpaque,
            BackgroundGlassSubtle,
            TextPrimary,
            TextSecondary,
            TextTertiary,
            TextInverse,
            AccentPrimary,
            AccentSecondary,
            AccentTertiary,
            AccentMuted,
            GlassBackground,
            GlassBorder,
            GlassHighlight,
            GlassShadow,
            BorderPrimary,
            BorderSecondary,
            BorderAccent,
            GradientPrimary,
            GradientSecondary,
            GradientMystical,
            GradientBackground,
            MysticalGlow,
            MysticalBlur,
            MysticalOrb,
        ];
        &TOKENS
    }

    /// CSS custom property name (without the `--` prefix)
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BackgroundPrimary => "background-primary",
            Self::BackgroundSecondary => "background-secondary",
            Self::BackgroundTertiary => "background-tertiary",
            Self::BackgroundGlass => "background-glass",
            Self::BackgroundGlassOpaque => "background-glass-opaque",
            Self::BackgroundGlassSubtle => "background-glass-subtle",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextTertiary => "text-tertiary",
            Self::TextInverse => "text-inverse",
            Self::AccentPrimary => "accent-primary",
            Self::AccentSecondary => "accent-secondary",
            Self::AccentTertiary => "accent-tertiary",
            Self::AccentMuted => "accent-muted",
            Self::GlassBackground => "glass-background",
            Self::GlassBorder => "glass-border",
            Self::GlassHighlight => "glass-highlight",
            Self::GlassShadow => "glass-shadow",
            Self::BorderPrimary => "border-primary",
            Self::BorderSecondary => "border-secondary",
            Self::BorderAccent => "border-accent",
            Self::GradientPrimary => "gradient-primary",
            Self::GradientSecondary => "gradient-secondary",
            Self::GradientMystical => "gradient-mystical",
            Self::GradientBackground => "gradient-background",
            Self::MysticalGlow => "mystical-glow",
            Self::MysticalBlur => "mystical-blur",
            Self::MysticalOrb => "mystical-orb",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BackgroundColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub glass: String,
    pub glass_opaque: String,
    pub glass_subtle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub inverse: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccentColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub muted: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GlassColors {
    pub background: String,
    pub border: String,
    pub highlight: String,
    pub shadow: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// CSS gradient strings
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gradients {
    pub primary: String,
    pub secondary: String,
    pub mystical: String,
    pub background: String,
}

/// Glow/blur/orb effect tokens scaled by mystical intensity
///
/// `blur` is a CSS length (`"30px"`), the others are colors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MysticalTokens {
    pub glow: String,
    pub blur: String,
    pub orb: String,
}

/// Complete set of derived color tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeColors {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub glass: GlassColors,
    pub border: BorderColors,
    pub gradients: Gradients,
    pub mystical: MysticalTokens,
}

impl ThemeColors {
    /// Get a token value by key
    pub fn get(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::BackgroundPrimary => &self.background.primary,
            ColorToken::BackgroundSecondary => &self.background.secondary,
            ColorToken::BackgroundTertiary => &self.background.tertiary,
            ColorToken::BackgroundGlass => &self.background.glass,
            ColorToken::BackgroundGlassOpaque => &self.background.glass_opaque,
            ColorToken::BackgroundGlassSubtle => &self.background.glass_subtle,
            ColorToken::TextPrimary => &self.text.primary,
            ColorToken::TextSecondary => &self.text.secondary,
            ColorToken::TextTertiary => &self.text.tertiary,
            ColorToken::TextInverse => &self.text.inverse,
            ColorToken::AccentPrimary => &self.accent.primary,
            ColorToken::AccentSecondary => &self.accent.secondary,
            ColorToken::AccentTertiary => &self.accent.tertiary,
            ColorToken::AccentMuted => &self.accent.muted,
            ColorToken::GlassBackground => &self.glass.background,
            ColorToken::GlassBorder => &self.glass.border,
            ColorToken::GlassHighlight => &self.glass.highlight,
            ColorToken::GlassShadow => &self.glass.shadow,
            ColorToken::BorderPrimary => &self.border.primary,
            ColorToken::BorderSecondary => &self.border.secondary,
            ColorToken::BorderAccent => &self.border.accent,
            ColorToken::GradientPrimary => &self.gradients.primary,
            ColorToken::GradientSecondary => &self.gradients.secondary,
            ColorToken::GradientMystical => &self.gradients.mystical,
            ColorToken::GradientBackground => &self.gradients.background,
            ColorToken::MysticalGlow => &self.mystical.glow,
            ColorToken::MysticalBlur => &self.mystical.blur,
            ColorToken::MysticalOrb => &self.mystical.orb,
        }
    }
}
