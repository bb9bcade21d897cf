//! Sticky header navigation: brand, section links, theme toggle, dropdown
//! menu and the scroll-to-top button.
//!
//! [`NavigationState`] also owns the page scroll position, since the header
//! style and the active link both derive from it.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::NavigationState;
