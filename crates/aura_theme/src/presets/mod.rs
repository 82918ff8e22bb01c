//! Built-in theme presets.

use std::fmt::{Display, Formatter};

use crate::theme::{generate_theme, Theme};
use crate::variables::ThemeVariables;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default theme: violet and indigo on pure black.
    MysticalPurple,
    /// Indigo and violet on a blue-black night sky.
    CosmicDark,
    /// The only light preset: violet and pink on near-white.
    EtherealLight,
    /// Amber tones on warm umber.
    GoldenAura,
    /// Sky and cyan on deep navy.
    OceanDepths,
    /// Emerald greens on dark moss.
    ForestSpirit,
}

impl ThemePreset {
    /// Preset used when nothing (or something unknown) is selected.
    pub const DEFAULT: ThemePreset = ThemePreset::MysticalPurple;

    /// Stable preset id for config/storage.
    pub fn id(self) -> &'static str {
        match self {
            Self::MysticalPurple => "mystical-purple",
            Self::CosmicDark => "cosmic-dark",
            Self::EtherealLight => "ethereal-light",
            Self::GoldenAura => "golden-aura",
            Self::OceanDepths => "ocean-depths",
            Self::ForestSpirit => "forest-spirit",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::MysticalPurple => "Mystical Purple",
            Self::CosmicDark => "Cosmic Dark",
            Self::EtherealLight => "Ethereal Light",
            Self::GoldenAura => "Golden Aura",
            Self::OceanDepths => "Ocean Depths",
            Self::ForestSpirit => "Forest Spirit",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 6] = [
            ThemePreset::MysticalPurple,
            ThemePreset::CosmicDark,
            ThemePreset::EtherealLight,
            ThemePreset::GoldenAura,
            ThemePreset::OceanDepths,
            ThemePreset::ForestSpirit,
        ];
        &PRESETS
    }

    /// Look up a preset by its id.
    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Seed variables for this preset.
    pub fn variables(self) -> ThemeVariables {
        match self {
            Self::MysticalPurple => {
                ThemeVariables::new("#9333EA", "#4F46E5", "#000000", "#FFFFFF", 0.05, 0.3)
            }
            Self::CosmicDark => {
                ThemeVariables::new("#6366F1", "#8B5CF6", "#0A0A0F", "#FFFFFF", 0.08, 0.4)
            }
            Self::EtherealLight => {
                ThemeVariables::new("#7C3AED", "#EC4899", "#FAFAFA", "#1F1F1F", 0.04, 0.2)
            }
            Self::GoldenAura => {
                ThemeVariables::new("#F59E0B", "#D97706", "#1C1410", "#FFFFFF", 0.06, 0.35)
            }
            Self::OceanDepths => {
                ThemeVariables::new("#0EA5E9", "#06B6D4", "#0C1220", "#FFFFFF", 0.05, 0.25)
            }
            Self::ForestSpirit => {
                ThemeVariables::new("#10B981", "#059669", "#0F1A14", "#FFFFFF", 0.05, 0.3)
            }
        }
    }

    /// Derive the theme for this preset.
    pub fn theme(self) -> Theme {
        generate_theme(self.id(), &self.variables())
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Theme {
    preset.theme()
}
