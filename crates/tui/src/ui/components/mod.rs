//! UI components: header navigation, page sections, the order modal and
//! toasts.

pub mod billing;
pub mod carousel;
pub mod common;
pub mod component;
pub mod contact;
pub mod hero;
pub mod nav_bar;
pub mod order;
pub mod packages;
pub mod toast;

pub use billing::BillingComponent;
pub use carousel::CarouselComponent;
pub(crate) use component::{Component, PageSection};
pub use contact::ContactComponent;
pub use hero::HeroComponent;
pub use nav_bar::NavBarComponent;
pub use order::OrderComponent;
pub use packages::PackagesComponent;
pub use toast::ToastComponent;
