mod common;

use aura_theme::{
    generate_theme, hex_to_rgb, is_dark, optimal_text_color, ColorScheme, ColorToken, Rgb,
    ThemeVariables,
};
use pretty_assertions::assert_eq;

use common::{assert_valid_css, is_gradient};

fn test_variables() -> ThemeVariables {
    ThemeVariables::new("#9333EA", "#4F46E5", "#000000", "#FFFFFF", 0.05, 0.3)
}

#[test]
fn end_to_end_dark_theme() {
    let theme = generate_theme("Test", &test_variables());
    assert_eq!(theme.name(), "Test");
    assert_eq!(theme.colors.text.primary, "#FFFFFF");
    assert_eq!(theme.colors.background.primary, "#000000");
    assert_eq!(theme.colors.mystical.blur, "30px");
    assert_eq!(theme.variables, test_variables());
}

#[test]
fn derivation_is_deterministic() {
    let vars = test_variables();
    let a = generate_theme("Test", &vars);
    let b = generate_theme("Test", &vars);
    assert_eq!(a, b);
    assert_eq!(a.to_css_variable_map(), b.to_css_variable_map());
}

#[test]
fn text_color_follows_brightness_threshold() {
    assert_eq!(optimal_text_color("#000000"), "#FFFFFF");
    assert_eq!(optimal_text_color("#FFFFFF"), "#000000");
    assert_eq!(optimal_text_color("#808080"), "#000000");
    assert!(is_dark("#000000"));
    assert!(!is_dark("#FAFAFA"));
}

#[test]
fn malformed_hex_never_panics() {
    assert_eq!(hex_to_rgb("not-a-color"), Rgb { r: 0, g: 0, b: 0 });

    let vars = ThemeVariables::new("??", "", "not-a-color", "#12345", 0.05, 0.3);
    let theme = generate_theme("Garbage", &vars);
    assert_eq!(theme.scheme(), ColorScheme::Dark);
    assert_eq!(theme.color(ColorToken::BackgroundGlass), "rgba(0, 0, 0, 0.05)");
    assert_eq!(theme.color(ColorToken::AccentMuted), "rgba(0, 0, 0, 0.2)");
}

#[test]
fn malformed_seeds_never_leak_into_tokens() {
    let vars = ThemeVariables::new("??", "", "midnight", "#FFFFFF", 0.05, 0.3);
    let theme = generate_theme("Garbage", &vars);

    assert_eq!(theme.colors.background.primary, "#000000");
    assert_eq!(theme.colors.accent.primary, "#000000");
    assert_eq!(theme.colors.accent.secondary, "#000000");
    assert_eq!(
        theme.colors.gradients.primary,
        "linear-gradient(135deg, #000000 0%, #000000 100%)"
    );
    assert_eq!(
        theme.colors.gradients.background,
        "linear-gradient(180deg, #000000 0%, #0F0F0F 100%)"
    );
    for value in theme.to_css_variable_map().values() {
        assert!(!value.contains("midnight") && !value.contains("??"), "{value}");
    }
}

#[test]
fn seed_hex_is_normalized() {
    let vars = ThemeVariables::new(" #9333ea ", "4f46e5", "#fafafa", "#000000", 0.05, 0.3);
    let theme = generate_theme("Loose", &vars);

    assert_eq!(theme.colors.background.primary, "#FAFAFA");
    assert_eq!(theme.colors.accent.primary, "#9333EA");
    assert_eq!(theme.colors.accent.secondary, "#4F46E5");
    assert_eq!(
        theme.colors.gradients.secondary,
        "linear-gradient(135deg, #4F46E5 0%, #9333EA 100%)"
    );
    assert!(is_gradient(&theme.colors.gradients.mystical));
}

#[test]
fn degenerate_seeds_still_produce_valid_css() {
    let seeds = [
        ("empty", ThemeVariables::new("", "", "", "", 0.05, 0.3)),
        ("garbage", ThemeVariables::new("??", "zzzzzz", "midnight", "#12345", 0.05, 0.3)),
        ("lowercase", ThemeVariables::new("#9333ea", "#4f46e5", "#0a0a0a", "#ffffff", 0.05, 0.3)),
        ("padded", ThemeVariables::new(" #9333ea", "#4F46E5 ", " #FAFAFA ", " #000000", 0.05, 0.3)),
        ("saturated", ThemeVariables::new("#9333EA", "#4F46E5", "#000000", "#FFFFFF", 2.0, 5.0)),
    ];
    for (name, vars) in seeds {
        assert_valid_css(&generate_theme(name, &vars));
    }
}

#[test]
fn theme_serializes_to_nested_json() {
    let theme = generate_theme("Test", &test_variables());
    let json = serde_json::to_value(&theme).unwrap();
    assert_eq!(json["name"], "Test");
    assert_eq!(json["scheme"], "dark");
    assert_eq!(json["colors"]["background"]["glass_opaque"], "rgba(255, 255, 255, 0.1)");
    assert_eq!(json["colors"]["mystical"]["blur"], "30px");
    assert_eq!(json["variables"]["glass"], 0.05);
    assert!(json["contrast"]["text_on_primary"].as_f64().unwrap() > 20.0);
}

#[test]
fn mystical_intensity_drives_effects() {
    let mut vars = test_variables();
    vars.mystical = 0.0;
    let calm = generate_theme("Calm", &vars);
    assert_eq!(calm.colors.mystical.blur, "0px");
    assert_eq!(calm.colors.mystical.glow, "rgba(147, 51, 234, 0)");

    vars.mystical = 1.0;
    let intense = generate_theme("Intense", &vars);
    assert_eq!(intense.colors.mystical.blur, "100px");
    assert_eq!(intense.colors.mystical.glow, "rgba(147, 51, 234, 0.4)");
    assert_eq!(intense.colors.mystical.orb, "rgba(147, 51, 234, 0.2)");
}
