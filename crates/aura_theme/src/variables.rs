//! The six seed values a theme is derived from

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ThemeError;

/// Seed values for [`generate_theme`](crate::generate_theme)
///
/// Hex colors are `#RRGGBB`. `glass` is the base opacity for translucent
/// surfaces and `mystical` scales glow, blur and orb effects; both are
/// expected in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeVariables {
    pub primary: String,
    pub secondary: String,
    pub base: String,
    pub text: String,
    pub glass: f64,
    pub mystical: f64,
}

impl ThemeVariables {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        base: impl Into<String>,
        text: impl Into<String>,
        glass: f64,
        mystical: f64,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            base: base.into(),
            text: text.into(),
            glass,
            mystical,
        }
    }

    /// Check every color parses and both intensities are in range.
    ///
    /// Derivation itself never fails, so this is the place to reject input
    /// that would otherwise silently turn black.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for hex in [&self.primary, &self.secondary, &self.base, &self.text] {
            Rgb::parse_hex(hex)?;
        }
        for (field, value) in [("glass", self.glass), ("mystical", self.mystical)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ThemeError::InvalidOpacity { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ThemeVariables {
        ThemeVariables::new("#9333EA", "#4F46E5", "#000000", "#FFFFFF", 0.05, 0.3)
    }

    #[test]
    fn valid_variables_pass() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn bad_hex_is_rejected() {
        let mut vars = sample();
        vars.secondary = "indigo".into();
        assert!(matches!(vars.validate(), Err(ThemeError::InvalidHex(s)) if s == "indigo"));
    }

    #[test]
    fn out_of_range_intensity_is_rejected() {
        let mut vars = sample();
        vars.mystical = 1.5;
        assert!(matches!(
            vars.validate(),
            Err(ThemeError::InvalidOpacity { field: "mystical", .. })
        ));

        let mut vars = sample();
        vars.glass = f64::NAN;
        assert!(matches!(
            vars.validate(),
            Err(ThemeError::InvalidOpacity { field: "glass", .. })
        ));
    }
}
