//! Immutable name → theme lookup table
//!
//! Themes are derived once when the registry is built and handed out as
//! `Arc<Theme>`, so selecting the same name twice yields the same object.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::theme::{generate_theme, Theme};
use crate::variables::ThemeVariables;

type ThemeMap = IndexMap<String, Arc<Theme>, FxBuildHasher>;

/// Process-wide registry of the built-in presets
static BUILTIN: OnceLock<ThemeRegistry> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: ThemeMap,
    default_name: String,
}

impl ThemeRegistry {
    /// Registry holding every built-in preset, default `mystical-purple`
    pub fn from_presets() -> Self {
        let mut themes = ThemeMap::with_capacity_and_hasher(ThemePreset::all().len(), FxBuildHasher);
        for &preset in ThemePreset::all() {
            themes.insert(preset.id().to_string(), Arc::new(preset.theme()));
        }
        Self {
            themes,
            default_name: ThemePreset::DEFAULT.id().to_string(),
        }
    }

    /// Shared registry of the built-in presets, built on first use
    pub fn builtin() -> &'static ThemeRegistry {
        BUILTIN.get_or_init(Self::from_presets)
    }

    /// Presets plus custom themes, in declaration order.
    ///
    /// Every custom seed is validated strictly; a name that is already taken
    /// (by a preset or an earlier custom theme) is rejected.
    pub fn with_custom<I, S>(custom: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (S, ThemeVariables)>,
        S: Into<String>,
    {
        let mut registry = Self::from_presets();
        for (name, variables) in custom {
            let name = name.into();
            if registry.themes.contains_key(&name) {
                return Err(ThemeError::DuplicateTheme(name));
            }
            variables.validate()?;
            tracing::debug!("ThemeRegistry: registering custom theme {}", name);
            let theme = generate_theme(&name, &variables);
            registry.themes.insert(name, Arc::new(theme));
        }
        Ok(registry)
    }

    /// Replace the fallback theme; `name` must be registered
    pub fn with_default(mut self, name: &str) -> Result<Self, ThemeError> {
        if !self.themes.contains_key(name) {
            return Err(ThemeError::UnknownTheme(name.to_string()));
        }
        self.default_name = name.to_string();
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Look up `name`, falling back to the default theme when unknown
    pub fn resolve(&self, name: &str) -> Arc<Theme> {
        match self.get(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(
                    "Unknown theme `{}`, falling back to `{}`",
                    name,
                    self.default_name
                );
                self.default_theme()
            }
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn default_theme(&self) -> Arc<Theme> {
        // default_name is checked on construction and in with_default
        Arc::clone(&self.themes[self.default_name.as_str()])
    }

    /// Theme names in declaration order (presets first)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Theme>> {
        self.themes.values()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::from_presets()
    }
}
