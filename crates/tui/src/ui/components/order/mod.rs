mod order_component;
mod state;

pub use order_component::OrderComponent;
pub use state::{OrderField, OrderFormState};
