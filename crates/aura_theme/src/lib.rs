//! Aura Theme Engine
//!
//! Derives complete UI themes from six seed variables, with contrast-aware
//! text colors, glass-morphism surfaces, and "mystical" glow effects.
//!
//! # Overview
//!
//! The engine provides:
//! - **Color math**: hex parsing, WCAG luminance and contrast, brightness-based
//!   light/dark detection
//! - **Derivation**: [`generate_theme`] turns [`ThemeVariables`] into a
//!   [`Theme`] of CSS-ready color, gradient and shadow strings
//! - **Presets**: six built-in themes ([`ThemePreset`])
//! - **Selection**: an immutable [`ThemeRegistry`] plus [`ThemeState`], which
//!   persists the selected theme through a [`ThemeStore`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aura_theme::{generate_theme, ThemeState, ThemeVariables};
//!
//! // Ad-hoc derivation
//! let vars = ThemeVariables::new("#9333EA", "#4F46E5", "#000000", "#FFFFFF", 0.05, 0.3);
//! let theme = generate_theme("Test", &vars);
//! assert_eq!(theme.colors.mystical.blur, "30px");
//!
//! // App-wide selection
//! ThemeState::init_default();
//! ThemeState::get().set_theme("cosmic-dark")?;
//! let css = ThemeState::get().theme().to_css(":root");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ThemeVariables (6 seeds)
//!     │
//!     ▼
//! color.rs:    parse hex, brightness, luminance, rgba()
//!     │
//!     ▼
//! theme.rs:    derive background/text/accent/glass/border/gradient/mystical tokens
//!     │
//!     ▼
//! contrast.rs: WCAG report for the resolved text colors
//!     │
//!     ▼
//! registry.rs: name → Arc<Theme>, built once
//!     │
//!     ▼
//! state.rs:    current selection, persisted via store.rs
//! ```

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod presets;
pub mod registry;
pub mod state;
pub mod store;
pub mod theme;
pub mod tokens;
pub mod variables;

// Re-export commonly used types
pub use color::{contrast_ratio, hex_to_rgb, is_dark, luminance, optimal_text_color, rgba, Rgb};
pub use config::{AuraConfig, CustomTheme, ThemeSection};
pub use contrast::{ContrastReport, WCAG_AA_LARGE, WCAG_AA_NORMAL};
pub use error::ThemeError;
pub use presets::{preset_theme, ThemePreset};
pub use registry::ThemeRegistry;
pub use state::{set_redraw_callback, ThemeState};
pub use store::{FileStore, MemoryStore, ThemeStore, THEME_STORAGE_KEY};
pub use theme::{generate_theme, ColorScheme, Theme, LEGACY_ACCENT_TERTIARY};
pub use tokens::*;
pub use variables::ThemeVariables;
