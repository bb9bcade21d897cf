//! Light/dark preference backed by an injected key-value store.
//!
//! The manager owns the current [`ThemeMode`], the palette built for it, and
//! a list of observers that are told about every change. Rendering code reads
//! [`ThemeManager::theme`]; it never inspects the store directly.

use std::fmt;
use std::sync::Arc;

use beranda_types::ThemeMode;
use beranda_util::PreferenceStore;
use tracing::{debug, warn};

use super::{Theme, palette};

/// Preference key holding `"light"` or `"dark"`.
pub const THEME_PREFERENCE_KEY: &str = "theme";

pub type ThemeObserver = Box<dyn Fn(ThemeMode) + Send + Sync>;

pub struct ThemeManager {
    store: Arc<dyn PreferenceStore>,
    mode: ThemeMode,
    theme: Box<dyn Theme>,
    observers: Vec<ThemeObserver>,
}

impl ThemeManager {
    /// Reads the stored mode; a missing or unrecognized value yields light.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let mode = stored_mode(store.as_ref());
        debug!(%mode, "theme loaded");
        Self {
            store,
            mode,
            theme: palette(mode),
            observers: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn subscribe(&mut self, observer: impl Fn(ThemeMode) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Flips between light and dark and returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Applies `mode`, persists it, and notifies observers. A store failure is
    /// logged; the in-memory mode changes regardless.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if let Err(error) = self.store.set(THEME_PREFERENCE_KEY, mode.as_str()) {
            warn!(%error, %mode, "failed to persist theme preference");
        }
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.theme = palette(mode);
        for observer in &self.observers {
            observer(mode);
        }
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("mode", &self.mode)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn stored_mode(store: &dyn PreferenceStore) -> ThemeMode {
    match store.get(THEME_PREFERENCE_KEY) {
        Some(value) => value.parse().unwrap_or_else(|error| {
            warn!(%error, "ignoring stored theme");
            ThemeMode::default()
        }),
        None => ThemeMode::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beranda_util::{PreferencesError, UserPreferences};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PreferencesError> {
            Err(PreferencesError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn defaults_to_light_for_missing_or_unknown_values() {
        let store = Arc::new(UserPreferences::ephemeral());
        assert_eq!(ThemeManager::new(store.clone()).mode(), ThemeMode::Light);

        store.set(THEME_PREFERENCE_KEY, "sepia").unwrap();
        assert_eq!(ThemeManager::new(store).mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_notifies() {
        let store = Arc::new(UserPreferences::ephemeral());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut manager = ThemeManager::new(store.clone());
        manager.subscribe(move |mode| sink.lock().unwrap().push(mode));

        assert_eq!(manager.toggle(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_PREFERENCE_KEY).as_deref(), Some("dark"));
        assert_eq!(manager.theme().roles().background, palette(ThemeMode::Dark).roles().background);

        assert_eq!(manager.toggle(), ThemeMode::Light);
        assert_eq!(*seen.lock().unwrap(), vec![ThemeMode::Dark, ThemeMode::Light]);
        assert_eq!(ThemeManager::new(store).mode(), ThemeMode::Light);
    }

    #[test]
    fn stored_dark_is_restored() {
        let store = Arc::new(UserPreferences::ephemeral());
        store.set(THEME_PREFERENCE_KEY, "dark").unwrap();
        assert_eq!(ThemeManager::new(store).mode(), ThemeMode::Dark);
    }

    #[test]
    fn persistence_failure_still_switches_mode() {
        let mut manager = ThemeManager::new(Arc::new(FailingStore));
        assert_eq!(manager.toggle(), ThemeMode::Dark);
        assert_eq!(manager.mode(), ThemeMode::Dark);
    }
}
