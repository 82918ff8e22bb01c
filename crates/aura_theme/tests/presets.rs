mod common;

use aura_theme::{preset_theme, ColorScheme, ColorToken, ThemePreset, LEGACY_ACCENT_TERTIARY};

use common::assert_valid_css;

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "cosmic-dark",
            "ethereal-light",
            "forest-spirit",
            "golden-aura",
            "mystical-purple",
            "ocean-depths",
        ]
    );
}

#[test]
fn every_preset_token_is_valid_css() {
    for &preset in ThemePreset::all() {
        assert_valid_css(&preset.theme());
    }
}

#[test]
fn preset_theme_matches_preset_method() {
    for &preset in ThemePreset::all() {
        let theme = preset_theme(preset);
        assert_eq!(theme.name(), preset.id());
        assert_eq!(theme, preset.theme());
    }
}

#[test]
fn every_preset_passes_wcag_aa_for_body_text() {
    for &preset in ThemePreset::all() {
        let theme = preset.theme();
        assert!(
            theme.contrast.passes_aa(),
            "preset={preset:?} min ratio {:.2}",
            theme.contrast.min_text_ratio()
        );
        assert!(theme.contrast.accent_passes_large(), "preset={preset:?}");
    }
}

#[test]
fn only_ethereal_light_is_light() {
    for &preset in ThemePreset::all() {
        let expected = if preset == ThemePreset::EtherealLight {
            ColorScheme::Light
        } else {
            ColorScheme::Dark
        };
        assert_eq!(preset.theme().scheme(), expected, "preset={preset:?}");
    }
}

#[test]
fn presets_share_the_legacy_tertiary_accent() {
    for &preset in ThemePreset::all() {
        assert_eq!(
            preset.theme().color(ColorToken::AccentTertiary),
            LEGACY_ACCENT_TERTIARY
        );
    }
}

#[test]
fn presets_have_distinct_accents() {
    let mut accents: Vec<String> = ThemePreset::all()
        .iter()
        .map(|p| p.theme().colors.accent.primary.clone())
        .collect();
    accents.sort();
    accents.dedup();
    assert_eq!(accents.len(), ThemePreset::all().len());
}

#[test]
fn mystical_purple_glass_opaque_doubles_glass() {
    let theme = ThemePreset::MysticalPurple.theme();
    assert_eq!(theme.variables.glass, 0.05);
    assert_eq!(
        theme.color(ColorToken::BackgroundGlassOpaque),
        "rgba(255, 255, 255, 0.1)"
    );
}
