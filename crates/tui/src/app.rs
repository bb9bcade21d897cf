//! Application state for the Beranda TUI.
//!
//! `App` is the single state container the runtime mutates: the theme, the
//! testimonial carousel, navigation and scroll, the three forms, and pending
//! toasts. Components read and write it; the runtime executes the effects
//! they return.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use beranda_types::{Effect, Msg, NoticeLevel, Section, TESTIMONIALS, Testimonial};
use beranda_util::{DEFAULT_CHAT_NUMBER, PreferenceStore};
use tracing::debug;

use crate::ui::components::billing::{BillingField, BillingState};
use crate::ui::components::carousel::{CarouselConfig, DEFAULT_AUTO_ADVANCE_INTERVAL, GestureCarousel, TrackState};
use crate::ui::components::contact::ContactFormState;
use crate::ui::components::nav_bar::NavigationState;
use crate::ui::components::order::OrderFormState;
use crate::ui::components::packages::PackagesState;
use crate::ui::components::toast::ToastState;
use crate::ui::theme::ThemeManager;

/// Startup options for the TUI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Number of testimonials to cycle; `None` shows all of them.
    pub slides: Option<usize>,
    pub auto_advance_interval: Duration,
    /// Business number receiving chat hand-offs.
    pub chat_number: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slides: None,
            auto_advance_interval: DEFAULT_AUTO_ADVANCE_INTERVAL,
            chat_number: DEFAULT_CHAT_NUMBER.to_string(),
        }
    }
}

/// Keyboard focus. `Page` scrolls; the others route keys to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Packages,
    Testimonials,
    Billing,
    Contact,
}

impl Focus {
    const CYCLE: [Focus; 5] = [Focus::Page, Focus::Packages, Focus::Testimonials, Focus::Billing, Focus::Contact];

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn previous(self) -> Self {
        self.step(-1)
    }

    fn step(self, delta: isize) -> Self {
        let len = Self::CYCLE.len() as isize;
        let index = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::CYCLE[(index + delta).rem_euclid(len) as usize]
    }

    pub fn section(self) -> Option<Section> {
        match self {
            Focus::Page => None,
            Focus::Packages => Some(Section::Packages),
            Focus::Testimonials => Some(Section::Testimonials),
            Focus::Billing => Some(Section::Billing),
            Focus::Contact => Some(Section::Contact),
        }
    }

    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Home => Focus::Page,
            Section::Packages => Focus::Packages,
            Section::Testimonials => Focus::Testimonials,
            Section::Billing => Focus::Billing,
            Section::Contact => Focus::Contact,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub theme: ThemeManager,
    pub carousel: GestureCarousel,
    pub track: TrackState,
    pub testimonials: Vec<Testimonial>,
    pub nav: NavigationState,
    pub packages: PackagesState,
    pub billing: BillingState,
    pub contact: ContactFormState,
    /// Open order modal, if any.
    pub order: Option<OrderFormState>,
    pub toasts: ToastState,
    pub focus: Focus,
    pub chat_number: String,
    dirty: bool,
}

impl App {
    /// Builds the application state. `on_slide_changed` observes carousel
    /// index changes and is how the runtime learns it must redraw.
    pub fn new(
        config: AppConfig,
        preferences: Arc<dyn PreferenceStore>,
        on_slide_changed: impl FnMut(usize) + Send + 'static,
    ) -> Result<Self> {
        let slide_count = config.slides.unwrap_or(TESTIMONIALS.len()).min(TESTIMONIALS.len());
        let carousel_config = CarouselConfig {
            auto_advance_interval: config.auto_advance_interval,
            ..CarouselConfig::default()
        };
        let carousel = GestureCarousel::with_config(slide_count, carousel_config, on_slide_changed)
            .context("failed to build the testimonial carousel")?;

        Ok(Self {
            theme: ThemeManager::new(preferences),
            carousel,
            track: TrackState::default(),
            testimonials: TESTIMONIALS[..slide_count].to_vec(),
            nav: NavigationState::default(),
            packages: PackagesState::default(),
            billing: BillingState::default(),
            contact: ContactFormState::default(),
            order: None,
            toasts: ToastState::default(),
            focus: Focus::Page,
            chat_number: config.chat_number,
            dirty: true,
        })
    }

    /// Applies an application message. Marks the app dirty when the change is
    /// visible.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                let now = Instant::now();
                self.carousel.tick(now);
                if self.toasts.prune(now) {
                    self.dirty = true;
                }
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.dirty = true;
            }
            Msg::SlideChanged(index) => {
                debug!(index, "testimonial slide changed");
                self.dirty = true;
            }
            Msg::ThemeChanged(mode) => {
                debug!(%mode, "theme changed");
                self.dirty = true;
            }
        }
        Vec::new()
    }

    /// Moves keyboard focus; focusing a section scrolls it into view.
    pub fn set_focus(&mut self, focus: Focus) -> Vec<Effect> {
        self.focus = focus;
        self.dirty = true;
        focus.section().map(Effect::ScrollTo).into_iter().collect()
    }

    /// Whether keystrokes currently land in a text field, in which case
    /// single-letter shortcuts must not fire.
    pub fn is_editing_text(&self) -> bool {
        if let Some(order) = &self.order {
            return order.field.is_text();
        }
        match self.focus {
            Focus::Billing => self.billing.field == BillingField::CustomerId,
            Focus::Contact => self.contact.field.is_text(),
            Focus::Page | Focus::Packages | Focus::Testimonials => false,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.toasts.push(message, level, Instant::now());
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beranda_util::UserPreferences;

    fn app(config: AppConfig) -> App {
        App::new(config, Arc::new(UserPreferences::ephemeral()), |_| {}).unwrap()
    }

    #[test]
    fn focus_cycles_through_sections() {
        assert_eq!(Focus::Page.next(), Focus::Packages);
        assert_eq!(Focus::Page.previous(), Focus::Contact);
        assert_eq!(Focus::Contact.next(), Focus::Page);
        assert_eq!(Focus::for_section(Section::Billing), Focus::Billing);
    }

    #[test]
    fn slide_option_caps_the_carousel() {
        let capped = app(AppConfig {
            slides: Some(3),
            ..AppConfig::default()
        });
        assert_eq!(capped.carousel.slide_count(), 3);
        assert_eq!(capped.testimonials.len(), 3);

        let all = app(AppConfig {
            slides: Some(100),
            ..AppConfig::default()
        });
        assert_eq!(all.carousel.slide_count(), TESTIMONIALS.len());
    }

    #[test]
    fn zero_slides_is_rejected() {
        let result = App::new(
            AppConfig {
                slides: Some(0),
                ..AppConfig::default()
            },
            Arc::new(UserPreferences::ephemeral()),
            |_| {},
        );
        assert!(result.is_err());
    }

    #[test]
    fn focusing_a_section_requests_scroll() {
        let mut app = app(AppConfig::default());
        assert_eq!(app.set_focus(Focus::Contact), vec![Effect::ScrollTo(Section::Contact)]);
        assert!(app.set_focus(Focus::Page).is_empty());
    }

    #[test]
    fn text_fields_suppress_shortcuts() {
        let mut app = app(AppConfig::default());
        assert!(!app.is_editing_text());
        app.focus = Focus::Contact;
        assert!(app.is_editing_text());
        app.contact.field = crate::ui::components::contact::ContactField::Submit;
        assert!(!app.is_editing_text());
        app.order = OrderFormState::open("15mbps");
        assert!(app.is_editing_text());
    }

    #[test]
    fn dirty_flag_is_consumed() {
        let mut app = app(AppConfig::default());
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        app.update(&Msg::SlideChanged(1));
        assert!(app.take_dirty());
    }
}
