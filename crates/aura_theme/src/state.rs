//! Theme selection state
//!
//! ThemeState holds the currently selected theme and keeps the selection in
//! a [`ThemeStore`] so it survives restarts. Themes themselves are never
//! regenerated here: selection swaps which precomputed `Arc<Theme>` from the
//! registry is current.

use std::sync::{Arc, Mutex, OnceLock, RwLock};

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::store::{MemoryStore, ThemeStore, THEME_STORAGE_KEY};
use crate::theme::Theme;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called after every successful theme switch.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

/// Trigger a redraw via the registered callback
fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

pub struct ThemeState {
    registry: Arc<ThemeRegistry>,
    store: Box<dyn ThemeStore>,
    current: RwLock<Arc<Theme>>,
}

impl ThemeState {
    /// Create a state, restoring the persisted selection from `store`.
    ///
    /// A missing, unreadable or unknown persisted name selects the
    /// registry's default theme.
    pub fn new(registry: Arc<ThemeRegistry>, store: Box<dyn ThemeStore>) -> Self {
        let current = match store.load(THEME_STORAGE_KEY) {
            Ok(Some(name)) => registry.resolve(&name),
            Ok(None) => registry.default_theme(),
            Err(e) => {
                tracing::warn!("ThemeState: failed to load saved theme: {}", e);
                registry.default_theme()
            }
        };
        tracing::debug!("ThemeState: starting with {}", current.name());

        Self {
            registry,
            store,
            current: RwLock::new(current),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(registry: Arc<ThemeRegistry>, store: Box<dyn ThemeStore>) {
        let _ = THEME_STATE.set(Self::new(registry, store));
    }

    /// Initialize with the built-in presets and in-memory storage
    pub fn init_default() {
        Self::init(
            Arc::new(ThemeRegistry::builtin().clone()),
            Box::new(MemoryStore::new()),
        );
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// The currently selected theme
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&*self.current.read().unwrap())
    }

    pub fn theme_name(&self) -> String {
        self.current.read().unwrap().name().to_string()
    }

    /// Select a theme by name and persist the choice.
    ///
    /// Unknown names are rejected and leave the selection untouched.
    /// Reselecting the current theme still persists it but skips the redraw.
    /// If persisting fails the new theme stays selected for this session and
    /// the storage error is returned.
    pub fn set_theme(&self, name: &str) -> Result<(), ThemeError> {
        let theme = self
            .registry
            .get(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;

        let mut current = self.current.write().unwrap();
        if Arc::ptr_eq(&*current, &theme) {
            drop(current);
            return self.store.save(THEME_STORAGE_KEY, name);
        }
        tracing::debug!(
            "ThemeState::set_theme - switching from {} to {}",
            current.name(),
            theme.name()
        );
        *current = theme;
        drop(current);

        trigger_redraw();
        self.store.save(THEME_STORAGE_KEY, name)
    }

    /// Names of every selectable theme
    pub fn available_themes(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }
}
