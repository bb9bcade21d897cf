use std::sync::{Arc, Mutex};

use beranda_tui::{THEME_PREFERENCE_KEY, ThemeManager};
use beranda_types::ThemeMode;
use beranda_util::{PreferenceStore, UserPreferences};
use tempfile::tempdir;

#[test]
fn toggled_theme_survives_a_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let store: Arc<dyn PreferenceStore> = Arc::new(UserPreferences::at(&path).unwrap());
    let mut manager = ThemeManager::new(Arc::clone(&store));
    assert_eq!(manager.mode(), ThemeMode::Light);
    assert_eq!(manager.toggle(), ThemeMode::Dark);
    assert_eq!(store.get(THEME_PREFERENCE_KEY).as_deref(), Some("dark"));

    let reopened = ThemeManager::new(Arc::new(UserPreferences::at(&path).unwrap()));
    assert_eq!(reopened.mode(), ThemeMode::Dark);
}

#[test]
fn observers_hear_each_change_once() {
    let heard = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&heard);
    let mut manager = ThemeManager::new(Arc::new(UserPreferences::ephemeral()));
    manager.subscribe(move |mode| sink.lock().unwrap().push(mode));

    manager.toggle();
    manager.set_mode(ThemeMode::Dark);
    manager.toggle();
    assert_eq!(*heard.lock().unwrap(), vec![ThemeMode::Dark, ThemeMode::Light]);
}

#[test]
fn garbage_preference_falls_back_to_light() {
    let store = Arc::new(UserPreferences::ephemeral());
    store.set(THEME_PREFERENCE_KEY, "sepia").unwrap();
    let manager = ThemeManager::new(store);
    assert_eq!(manager.mode(), ThemeMode::Light);
}
