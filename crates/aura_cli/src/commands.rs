//! Text rendering for CLI output

use std::fmt::Write;

use anyhow::{Context, Result};
use aura_theme::{Theme, ThemePreset, ThemeState, WCAG_AA_NORMAL};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
    Css,
}

/// Serialize a theme in the requested format
pub fn render_theme(theme: &Theme, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(theme).context("Failed to serialize theme as JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(theme).context("Failed to serialize theme as TOML")
        }
        OutputFormat::Css => Ok(theme.to_css(":root")),
    }
}

/// One line per theme; the selected theme is marked with `*`
pub fn render_list(state: &ThemeState) -> String {
    let current = state.theme_name();
    let mut out = String::new();
    for theme in state.registry().iter() {
        let marker = if theme.name() == current { '*' } else { ' ' };
        let label = ThemePreset::from_id(theme.name())
            .map(ThemePreset::display_name)
            .unwrap_or("Custom");
        let _ = writeln!(
            out,
            "{marker} {:<18} {:<16} {:?}",
            theme.name(),
            label,
            theme.scheme()
        );
    }
    out
}

/// Contrast summary for one theme
pub fn render_report(theme: &Theme) -> String {
    let report = &theme.contrast;
    let verdict = if report.passes_aa() { "PASS" } else { "FAIL" };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{verdict}] (AA body text >= {WCAG_AA_NORMAL}:1)",
        theme.name()
    );
    for (label, ratio) in [
        ("text on primary", report.text_on_primary),
        ("text on secondary", report.text_on_secondary),
        ("text on tertiary", report.text_on_tertiary),
        ("accent on primary", report.accent_on_primary),
    ] {
        let _ = writeln!(out, "  {label:<18} {ratio:>6.2}:1");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_theme::{generate_theme, MemoryStore, ThemeRegistry, ThemeVariables, THEME_STORAGE_KEY};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn css_output_is_a_root_rule() {
        let theme = ThemePreset::MysticalPurple.theme();
        let css = render_theme(&theme, OutputFormat::Css).unwrap();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--mystical-blur: 30px;"));
    }

    #[test]
    fn json_output_parses_back() {
        let theme = ThemePreset::CosmicDark.theme();
        let json = render_theme(&theme, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "cosmic-dark");
    }

    #[test]
    fn toml_output_contains_nested_tables() {
        let theme = ThemePreset::EtherealLight.theme();
        let rendered = render_theme(&theme, OutputFormat::Toml).unwrap();
        assert!(rendered.contains("name = \"ethereal-light\""));
        assert!(rendered.contains("[colors.background]"));
    }

    #[test]
    fn list_marks_selected_theme() {
        let state = ThemeState::new(
            Arc::new(ThemeRegistry::from_presets()),
            Box::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "golden-aura")),
        );
        let listing = render_list(&state);
        let selected: Vec<&str> = listing.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(selected.len(), 1);
        assert!(selected[0].contains("golden-aura"));
        assert_eq!(listing.lines().count(), 6);
    }

    #[test]
    fn report_flags_failing_themes() {
        let vars = ThemeVariables::new("#FFFFFF", "#FFFFFF", "#7F7F7F", "#FFFFFF", 0.05, 0.3);
        let report = render_report(&generate_theme("murky", &vars));
        assert!(report.starts_with("murky [FAIL]"));

        let report = render_report(&ThemePreset::MysticalPurple.theme());
        assert!(report.starts_with("mystical-purple [PASS]"));
        assert!(report.contains("text on primary     21.00:1"));
    }
}
