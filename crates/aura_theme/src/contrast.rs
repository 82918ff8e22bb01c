//! WCAG contrast audit attached to every generated theme.
//!
//! Text color selection uses perceived brightness, which is cheap but does
//! not guarantee a readable ratio for mid-tone bases. The report measures
//! the resolved text color against each background tier so callers (and
//! `aura check`) can see whether a seed produces readable output.

use serde::Serialize;

use crate::color::contrast_ratio;
use crate::tokens::BackgroundColors;

/// WCAG 2.1 AA minimum for body text
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// WCAG 2.1 AA minimum for large text and UI components
pub const WCAG_AA_LARGE: f64 = 3.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastReport {
    pub text_on_primary: f64,
    pub text_on_secondary: f64,
    pub text_on_tertiary: f64,
    pub accent_on_primary: f64,
}

impl ContrastReport {
    /// Measure `text` against each opaque background tier and `accent`
    /// against the base.
    pub fn measure(text: &str, background: &BackgroundColors, accent: &str) -> Self {
        Self {
            text_on_primary: contrast_ratio(text, &background.primary),
            text_on_secondary: contrast_ratio(text, &background.secondary),
            text_on_tertiary: contrast_ratio(text, &background.tertiary),
            accent_on_primary: contrast_ratio(accent, &background.primary),
        }
    }

    /// Lowest text ratio across the background tiers
    pub fn min_text_ratio(&self) -> f64 {
        self.text_on_primary
            .min(self.text_on_secondary)
            .min(self.text_on_tertiary)
    }

    /// Body text meets AA on every background tier
    pub fn passes_aa(&self) -> bool {
        self.min_text_ratio() >= WCAG_AA_NORMAL
    }

    /// Accent is usable for large text and UI components on the base
    pub fn accent_passes_large(&self) -> bool {
        self.accent_on_primary >= WCAG_AA_LARGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backgrounds(primary: &str, secondary: &str, tertiary: &str) -> BackgroundColors {
        BackgroundColors {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
            glass: "rgba(255, 255, 255, 0.05)".into(),
            glass_opaque: "rgba(255, 255, 255, 0.1)".into(),
            glass_subtle: "rgba(255, 255, 255, 0.025)".into(),
        }
    }

    #[test]
    fn white_on_black_passes() {
        let report = ContrastReport::measure(
            "#FFFFFF",
            &backgrounds("#000000", "#0F0F0F", "#191919"),
            "#9333EA",
        );
        assert!(report.passes_aa());
        assert!((report.text_on_primary - 21.0).abs() < 1e-9);
        assert!(report.min_text_ratio() <= report.text_on_primary);
    }

    #[test]
    fn white_on_mid_gray_fails() {
        // Brightness 127 picks white text, which only reaches ~4.0:1
        let report = ContrastReport::measure(
            "#FFFFFF",
            &backgrounds("#7F7F7F", "#8E8E8E", "#989898"),
            "#FFFFFF",
        );
        assert!(!report.passes_aa());
    }

    #[test]
    fn accent_check_uses_large_text_threshold() {
        let report = ContrastReport::measure(
            "#FFFFFF",
            &backgrounds("#000000", "#0F0F0F", "#191919"),
            "#000000",
        );
        assert!(!report.accent_passes_large());
    }
}
