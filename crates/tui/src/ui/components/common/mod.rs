pub mod form_field;
pub mod masked_input;
pub mod scroll_metrics;
pub mod text_input;

pub use form_field::{FieldView, cycle, render_choice_field, render_text_field};
pub use masked_input::{ControlKey, DEFAULT_GROUP_SIZE, DEFAULT_MAX_DIGITS, KeyEntry, MaskError, MaskedDigitInput};
pub use scroll_metrics::ScrollMetrics;
pub use text_input::TextInputState;
