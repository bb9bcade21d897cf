//! Theme styling module for the TUI UI layer.
//!
//! Two palettes (light and dark) map onto semantic [`roles::ThemeRoles`]; the
//! [`ThemeManager`] picks one from the stored preference. Prefer the helper
//! builders over hard-coding colors in components.

use beranda_types::ThemeMode;

pub mod dark;
pub mod light;
pub mod manager;
pub mod roles;
pub mod theme_helpers;

pub use dark::DarkTheme;
pub use light::LightTheme;
pub use manager::{THEME_PREFERENCE_KEY, ThemeManager};
pub use roles::Theme;

/// Builds the palette for `mode`.
pub fn palette(mode: ThemeMode) -> Box<dyn Theme> {
    match mode {
        ThemeMode::Light => Box::new(LightTheme::new()),
        ThemeMode::Dark => Box::new(DarkTheme::new()),
    }
}
