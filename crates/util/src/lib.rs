//! Utility functions shared by the Beranda TUI and CLI.
//!
//! - [`preferences`]: JSON-backed key-value store for persisted flags.
//! - [`validation`]: phone and identity-number checks for the forms.
//! - [`chat_link`]: message templates and the chat-app hand-off link.
//! - [`billing`]: the in-memory bill lookup demo.

pub mod billing;
pub mod chat_link;
mod path_processing;
pub mod preferences;
pub mod validation;

pub use billing::{Bill, BillStatus, BillingError, CustomerDirectory, PaymentMethod};
pub use chat_link::{BRAND_NAME, ContactRequest, DEFAULT_CHAT_NUMBER, OrderDraft, OrderRequest, chat_link, encode_uri_component};
pub use path_processing::expand_tilde;
pub use preferences::{PreferenceStore, PreferencesError, UserPreferences};
pub use validation::{FormError, digits_only, is_valid_id_number, is_valid_phone};
