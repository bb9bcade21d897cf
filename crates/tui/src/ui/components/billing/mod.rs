mod billing_component;
mod state;

pub use billing_component::BillingComponent;
pub use state::{BillingField, BillingState};
