//! Shared type definitions for Beranda.
//!
//! These types are used by both the terminal front end and the CLI: the theme
//! mode persisted between runs, the package catalog offered on the landing
//! page, and the `Msg`/`Effect` vocabulary the runtime routes between
//! components.

mod catalog;
mod messages;
mod theme_mode;

pub use catalog::{InstallationWindow, InternetPackage, PACKAGES, Section, TESTIMONIALS, Testimonial, find_package};
pub use messages::{Effect, Modal, Msg, NoticeLevel};
pub use theme_mode::{ParseThemeModeError, ThemeMode};
