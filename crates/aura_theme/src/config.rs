//! Aura configuration file handling (`aura.toml`)
//!
//! ```toml
//! [theme]
//! default = "cosmic-dark"
//! storage = ".aura/state.toml"
//!
//! [[theme.custom]]
//! name = "rose-quartz"
//! primary = "#F43F5E"
//! secondary = "#FB7185"
//! base = "#1A0A0E"
//! text = "#FFFFFF"
//! mystical = 0.5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::variables::ThemeVariables;

/// Config file name looked up inside a directory
pub const CONFIG_FILE_NAME: &str = "aura.toml";

/// Top-level Aura configuration (aura.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuraConfig {
    #[serde(default)]
    pub theme: ThemeSection,
}

/// Theme selection and custom theme definitions
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeSection {
    /// Theme used when nothing valid is persisted
    #[serde(default)]
    pub default: Option<String>,
    /// File the selected theme name is persisted to
    #[serde(default = "default_storage")]
    pub storage: PathBuf,
    /// Additional themes derived alongside the presets
    #[serde(default)]
    pub custom: Vec<CustomTheme>,
}

fn default_storage() -> PathBuf {
    PathBuf::from(".aura/state.toml")
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            default: None,
            storage: default_storage(),
            custom: Vec::new(),
        }
    }
}

/// A user-defined theme seed
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomTheme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub base: String,
    pub text: String,
    #[serde(default = "default_glass")]
    pub glass: f64,
    #[serde(default = "default_mystical")]
    pub mystical: f64,
}

fn default_glass() -> f64 {
    0.05
}

fn default_mystical() -> f64 {
    0.3
}

impl CustomTheme {
    pub fn variables(&self) -> ThemeVariables {
        ThemeVariables::new(
            self.primary.clone(),
            self.secondary.clone(),
            self.base.clone(),
            self.text.clone(),
            self.glass,
            self.mystical,
        )
    }
}

impl AuraConfig {
    /// Load configuration from a file, or from `aura.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ThemeError::Io {
            path: config_path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ThemeError::ConfigParse {
            path: config_path,
            source,
        })
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ThemeError> {
        match Self::load(path) {
            Err(ThemeError::Io { source, path }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the registry: presets, then custom themes, then the default
    pub fn build_registry(&self) -> Result<ThemeRegistry, ThemeError> {
        let registry = ThemeRegistry::with_custom(
            self.theme
                .custom
                .iter()
                .map(|custom| (custom.name.clone(), custom.variables())),
        )?;
        match &self.theme.default {
            Some(name) => registry.with_default(name),
            None => Ok(registry),
        }
    }

    /// Storage path resolved against the directory holding the config
    pub fn storage_path(&self, config_dir: &Path) -> PathBuf {
        if self.theme.storage.is_absolute() {
            self.theme.storage.clone()
        } else {
            config_dir.join(&self.theme.storage)
        }
    }
}
