//! Testimonial carousel: the gesture state machine and its page section.

mod carousel_component;
mod state;
mod track;

pub use carousel_component::CarouselComponent;
pub use state::{
    CarouselConfig, CarouselError, CarouselMode, DEFAULT_AUTO_ADVANCE_INTERVAL, DEFAULT_SWIPE_DISTANCE, DEFAULT_SWIPE_MAX_DURATION,
    GestureCarousel, GestureOutcome, IndexObserver, PointerInput,
};
pub use track::TrackState;
