mod contact_component;
mod state;

pub use contact_component::ContactComponent;
pub use state::{ContactField, ContactFormState};
