//! # Beranda TUI
//!
//! Terminal rendition of the Bule Network landing page: a sticky header
//! with section navigation, internet package cards with an order form, a
//! testimonial carousel driven by drag gestures and an auto-advance timer, a
//! bill lookup, and a contact form that hands messages off to WhatsApp.
//!
//! ## Architecture
//!
//! State lives on a single `App`. Components render it and translate input
//! into `Effect`s; the runtime applies those effects and redraws only when
//! the state is marked dirty.
//!
//! Two pieces are useful on their own and are exported for embedding and
//! testing: [`GestureCarousel`], a clock-agnostic slide state machine, and
//! [`MaskedDigitInput`], a grouped digit-entry field model.

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use beranda_util::PreferenceStore;

pub use app::AppConfig;
pub use ui::components::carousel::{
    CarouselConfig, CarouselError, CarouselMode, DEFAULT_AUTO_ADVANCE_INTERVAL, DEFAULT_SWIPE_DISTANCE, DEFAULT_SWIPE_MAX_DURATION,
    GestureCarousel, GestureOutcome, IndexObserver, PointerInput,
};
pub use ui::components::common::{ControlKey, DEFAULT_GROUP_SIZE, DEFAULT_MAX_DIGITS, KeyEntry, MaskError, MaskedDigitInput};
pub use ui::theme::{THEME_PREFERENCE_KEY, ThemeManager};

/// Runs the landing page until the user quits.
///
/// `preferences` persists the theme choice; pass an ephemeral store to leave
/// no trace on disk.
///
/// # Errors
///
/// Fails when the configuration is unusable (for example zero testimonial
/// slides) or the terminal cannot be set up or drawn to.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use beranda_tui::{AppConfig, run};
/// use beranda_util::UserPreferences;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     run(AppConfig::default(), Arc::new(UserPreferences::ephemeral())).await
/// }
/// ```
pub async fn run(config: AppConfig, preferences: Arc<dyn PreferenceStore>) -> Result<()> {
    ui::runtime::run_app(config, preferences).await
}
