//! UI layer: the landing-page components, the main view that scrolls them,
//! themes, and the terminal runtime.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
