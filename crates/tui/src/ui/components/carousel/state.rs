//! Slide index, drag gesture, and auto-advance state for the testimonial
//! carousel.
//!
//! The state machine is clock-agnostic: every operation that depends on time
//! takes the current `Instant` from the caller. The runtime feeds it real
//! time; tests feed it synthetic instants.
//!
//! At any moment the carousel is in exactly one [`CarouselMode`]:
//! auto-advancing (a timer deadline is armed), dragging (a gesture is in
//! progress), or paused. Two independent holds pause it: an explicit pause
//! (keyboard) and the pointer hovering the track. Auto-advance runs only when
//! both are released. A gesture that starts while paused reports `Dragging`;
//! the holds are remembered and honored once the gesture resolves.

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, trace};

/// Minimum horizontal travel, in display units, for a drag to count as a swipe.
pub const DEFAULT_SWIPE_DISTANCE: f32 = 50.0;
/// A drag must be released within this long to count as a swipe.
pub const DEFAULT_SWIPE_MAX_DURATION: Duration = Duration::from_millis(500);
/// Period of the auto-advance timer.
pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub swipe_distance: f32,
    pub swipe_max_duration: Duration,
    pub auto_advance_interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_distance: DEFAULT_SWIPE_DISTANCE,
            swipe_max_duration: DEFAULT_SWIPE_MAX_DURATION,
            auto_advance_interval: DEFAULT_AUTO_ADVANCE_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    NoSlides,
    #[error("the auto-advance interval must be greater than zero")]
    ZeroInterval,
}

/// Pointer-like input shared by mouse and touch sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Pointer entered the carousel surface (hover begins).
    Enter,
    /// Press at horizontal position `x`.
    Down { x: f32, at: Instant },
    /// Movement while pressed.
    Move { x: f32 },
    /// Release at horizontal position `x`.
    Up { x: f32, at: Instant },
    /// Pointer left the carousel surface.
    Leave { at: Instant },
}

/// How a finished gesture was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Swiped toward the next slide.
    Advanced,
    /// Swiped toward the previous slide.
    Retreated,
    /// Too short or too slow; the track snaps back.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    AutoAdvancing,
    Dragging,
    Paused,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    start_x: f32,
    last_x: f32,
    started_at: Instant,
}

pub type IndexObserver = Box<dyn FnMut(usize) + Send>;

pub struct GestureCarousel {
    slide_count: usize,
    current_index: usize,
    config: CarouselConfig,
    drag: Option<DragState>,
    paused: bool,
    hovered: bool,
    /// Deadline of the next auto-advance; `Some` exactly when no gesture and
    /// no hold is active.
    next_advance_at: Option<Instant>,
    track_width: f32,
    on_index_changed: IndexObserver,
}

impl GestureCarousel {
    /// Creates a carousel with default thresholds; auto-advance starts now.
    pub fn new(slide_count: usize, on_index_changed: impl FnMut(usize) + Send + 'static) -> Result<Self, CarouselError> {
        Self::with_config(slide_count, CarouselConfig::default(), on_index_changed)
    }

    pub fn with_config(
        slide_count: usize,
        config: CarouselConfig,
        on_index_changed: impl FnMut(usize) + Send + 'static,
    ) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        if config.auto_advance_interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        let mut carousel = Self {
            slide_count,
            current_index: 0,
            config,
            drag: None,
            paused: false,
            hovered: false,
            next_advance_at: None,
            track_width: 0.0,
            on_index_changed: Box::new(on_index_changed),
        };
        carousel.start_auto_advance(Instant::now());
        Ok(carousel)
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn mode(&self) -> CarouselMode {
        if self.drag.is_some() {
            CarouselMode::Dragging
        } else if self.is_held() {
            CarouselMode::Paused
        } else {
            CarouselMode::AutoAdvancing
        }
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.next_advance_at.is_some()
    }

    pub fn next_advance_at(&self) -> Option<Instant> {
        self.next_advance_at
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Jumps to `index`, wrapping with Euclidean modulo so negative indices
    /// count back from the last slide.
    pub fn go_to(&mut self, index: i64) {
        let normalized = index.rem_euclid(self.slide_count as i64) as usize;
        if normalized == self.current_index {
            return;
        }
        trace!(from = self.current_index, to = normalized, "carousel slide change");
        self.current_index = normalized;
        (self.on_index_changed)(normalized);
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as i64 + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_index as i64 - 1);
    }

    /// Records the measured width of the slide track, in display units.
    pub fn set_track_width(&mut self, width: f32) {
        self.track_width = width.max(0.0);
    }

    /// Starts a gesture at `x`, suspending auto-advance.
    pub fn begin_gesture(&mut self, x: f32, at: Instant) {
        self.drag = Some(DragState {
            start_x: x,
            last_x: x,
            started_at: at,
        });
        self.next_advance_at = None;
        trace!(x, "carousel gesture started");
    }

    /// Tracks pointer movement and returns the live drag offset as a fraction
    /// of the track width (positive when dragging toward the next slide).
    /// Returns `None` when no gesture is active.
    pub fn update_gesture(&mut self, x: f32) -> Option<f32> {
        let drag = self.drag.as_mut()?;
        drag.last_x = x;
        Some(self.drag_offset().unwrap_or(0.0))
    }

    /// Live drag offset as a fraction of the track width, if dragging.
    pub fn drag_offset(&self) -> Option<f32> {
        let drag = self.drag?;
        if self.track_width <= 0.0 {
            return Some(0.0);
        }
        Some((drag.start_x - drag.last_x) / self.track_width)
    }

    /// Resolves the active gesture released at `x`.
    ///
    /// Commits a slide change only when the travel exceeds the swipe distance
    /// and the gesture was faster than the swipe duration. Auto-advance resumes
    /// afterwards unless an explicit pause is held. Returns `None` when no
    /// gesture was active.
    pub fn end_gesture(&mut self, x: f32, at: Instant) -> Option<GestureOutcome> {
        let drag = self.drag.take()?;
        let distance = drag.start_x - x;
        let elapsed = at.saturating_duration_since(drag.started_at);

        let outcome = if distance.abs() > self.config.swipe_distance && elapsed < self.config.swipe_max_duration {
            if distance > 0.0 {
                self.next();
                GestureOutcome::Advanced
            } else {
                self.previous();
                GestureOutcome::Retreated
            }
        } else {
            GestureOutcome::Cancelled
        };
        debug!(distance, elapsed_ms = elapsed.as_millis() as u64, ?outcome, "carousel gesture resolved");

        self.start_auto_advance(at);
        Some(outcome)
    }

    /// Resolves the active gesture at its last known position, as when the
    /// pointer leaves the track mid-drag.
    pub fn abort_gesture(&mut self, at: Instant) -> Option<GestureOutcome> {
        let last_x = self.drag?.last_x;
        self.end_gesture(last_x, at)
    }

    /// Holds auto-advance until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused = true;
        self.next_advance_at = None;
    }

    /// Releases an explicit pause; auto-advance restarts unless a gesture or
    /// the hover hold is still active.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.start_auto_advance(now);
    }

    /// Whether an explicit pause is held, regardless of hover.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_held(&self) -> bool {
        self.paused || self.hovered
    }

    /// (Re)arms the auto-advance timer one interval after `now`, replacing any
    /// previously armed deadline. Ignored while a gesture or hold is active.
    pub fn start_auto_advance(&mut self, now: Instant) {
        if self.drag.is_some() || self.is_held() {
            trace!("auto-advance start ignored while suspended");
            return;
        }
        self.next_advance_at = Some(now + self.config.auto_advance_interval);
    }

    /// Fires the auto-advance if its deadline has passed. Returns whether the
    /// carousel advanced. A late tick advances once and re-arms relative to
    /// `now`, so missed periods never fire in a burst.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_advance_at {
            Some(due) if now >= due => {
                self.next();
                self.next_advance_at = Some(now + self.config.auto_advance_interval);
                true
            }
            _ => false,
        }
    }

    /// Routes a unified pointer event through the gesture state machine.
    pub fn handle_pointer(&mut self, input: PointerInput) -> Option<GestureOutcome> {
        match input {
            PointerInput::Enter => {
                self.hovered = true;
                self.next_advance_at = None;
                None
            }
            PointerInput::Down { x, at } => {
                self.begin_gesture(x, at);
                None
            }
            PointerInput::Move { x } => {
                self.update_gesture(x);
                None
            }
            PointerInput::Up { x, at } => self.end_gesture(x, at),
            PointerInput::Leave { at } => {
                let outcome = self.abort_gesture(at);
                self.hovered = false;
                self.start_auto_advance(at);
                outcome
            }
        }
    }
}

impl fmt::Debug for GestureCarousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCarousel")
            .field("slide_count", &self.slide_count)
            .field("current_index", &self.current_index)
            .field("mode", &self.mode())
            .field("paused", &self.paused)
            .field("hovered", &self.hovered)
            .field("next_advance_at", &self.next_advance_at)
            .field("track_width", &self.track_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn recording(slide_count: usize) -> (GestureCarousel, Arc<Mutex<Vec<usize>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let carousel = GestureCarousel::new(slide_count, move |index| sink.lock().unwrap().push(index)).unwrap();
        (carousel, seen)
    }

    #[test]
    fn rejects_empty_track_and_zero_interval() {
        assert_eq!(GestureCarousel::new(0, |_| {}).unwrap_err(), CarouselError::NoSlides);
        let config = CarouselConfig {
            auto_advance_interval: Duration::ZERO,
            ..CarouselConfig::default()
        };
        assert_eq!(GestureCarousel::with_config(3, config, |_| {}).unwrap_err(), CarouselError::ZeroInterval);
    }

    #[test]
    fn go_to_wraps_any_integer() {
        let (mut carousel, _) = recording(6);
        for index in [-13_i64, -7, -6, -1, 0, 5, 6, 11, 1_000_003] {
            carousel.go_to(index);
            assert_eq!(carousel.current_index() as i64, ((index % 6) + 6) % 6, "index {index}");
        }
    }

    #[test]
    fn next_then_previous_restores_index() {
        let (mut carousel, _) = recording(4);
        for start in 0..4 {
            carousel.go_to(start);
            carousel.next();
            carousel.previous();
            assert_eq!(carousel.current_index() as i64, start);
            carousel.previous();
            carousel.next();
            assert_eq!(carousel.current_index() as i64, start);
        }
    }

    #[test]
    fn observer_sees_only_real_changes() {
        let (mut carousel, seen) = recording(3);
        carousel.go_to(0);
        carousel.next();
        carousel.go_to(4);
        carousel.previous();
        assert_eq!(*seen.lock().unwrap(), vec![1, 0]);
    }

    #[test]
    fn single_slide_never_notifies() {
        let (mut carousel, seen) = recording(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn fast_long_swipe_commits_next() {
        let (mut carousel, _) = recording(6);
        let t0 = Instant::now();
        carousel.go_to(2);
        carousel.begin_gesture(300.0, t0);
        assert_eq!(carousel.end_gesture(200.0, t0 + ms(100)), Some(GestureOutcome::Advanced));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn swipe_toward_start_commits_previous() {
        let (mut carousel, _) = recording(6);
        let t0 = Instant::now();
        carousel.begin_gesture(100.0, t0);
        assert_eq!(carousel.end_gesture(180.0, t0 + ms(50)), Some(GestureOutcome::Retreated));
        assert_eq!(carousel.current_index(), 5);
    }

    #[test]
    fn short_or_slow_gestures_snap_back() {
        let (mut carousel, seen) = recording(6);
        let t0 = Instant::now();
        carousel.go_to(2);

        carousel.begin_gesture(300.0, t0);
        assert_eq!(carousel.end_gesture(280.0, t0 + ms(100)), Some(GestureOutcome::Cancelled));

        carousel.begin_gesture(300.0, t0);
        assert_eq!(carousel.end_gesture(0.0, t0 + ms(500)), Some(GestureOutcome::Cancelled));

        carousel.begin_gesture(300.0, t0);
        assert_eq!(carousel.end_gesture(250.0, t0 + ms(10)), Some(GestureOutcome::Cancelled));

        assert_eq!(carousel.current_index(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let (mut carousel, _) = recording(3);
        assert_eq!(carousel.end_gesture(0.0, Instant::now()), None);
        assert_eq!(carousel.update_gesture(10.0), None);
    }

    #[test]
    fn update_reports_fraction_of_track_without_moving() {
        let (mut carousel, _) = recording(3);
        carousel.set_track_width(400.0);
        carousel.begin_gesture(300.0, Instant::now());
        assert_eq!(carousel.update_gesture(200.0), Some(0.25));
        assert_eq!(carousel.update_gesture(400.0), Some(-0.25));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn unmeasured_track_reports_zero_offset() {
        let (mut carousel, _) = recording(3);
        carousel.begin_gesture(300.0, Instant::now());
        assert_eq!(carousel.update_gesture(0.0), Some(0.0));
    }

    #[test]
    fn gesture_suspends_and_then_restarts_timer() {
        let (mut carousel, _) = recording(3);
        let t0 = Instant::now();
        carousel.begin_gesture(10.0, t0);
        assert_eq!(carousel.mode(), CarouselMode::Dragging);
        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.tick(t0 + ms(60_000)));

        carousel.end_gesture(10.0, t0 + ms(100));
        assert_eq!(carousel.mode(), CarouselMode::AutoAdvancing);
        assert_eq!(carousel.next_advance_at(), Some(t0 + ms(5_100)));
    }

    #[test]
    fn tick_fires_once_per_interval() {
        let (mut carousel, _) = recording(3);
        let t0 = Instant::now();
        carousel.start_auto_advance(t0);
        assert!(!carousel.tick(t0 + ms(4_999)));
        assert!(carousel.tick(t0 + ms(5_000)));
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.tick(t0 + ms(5_001)));
        assert!(carousel.tick(t0 + ms(10_000)));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn late_tick_does_not_burst() {
        let (mut carousel, _) = recording(6);
        let t0 = Instant::now();
        carousel.start_auto_advance(t0);
        assert!(carousel.tick(t0 + ms(30_000)));
        assert!(!carousel.tick(t0 + ms(30_001)));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn restarting_timer_replaces_the_deadline() {
        let (mut carousel, _) = recording(3);
        let t0 = Instant::now();
        carousel.start_auto_advance(t0);
        carousel.start_auto_advance(t0 + ms(1_000));
        assert!(!carousel.tick(t0 + ms(5_000)));
        assert!(carousel.tick(t0 + ms(6_000)));
        assert!(!carousel.tick(t0 + ms(6_500)));
    }

    #[test]
    fn pause_and_gesture_both_must_clear_before_resuming() {
        let (mut carousel, _) = recording(3);
        let t0 = Instant::now();
        carousel.pause();
        assert_eq!(carousel.mode(), CarouselMode::Paused);

        carousel.begin_gesture(0.0, t0);
        assert_eq!(carousel.mode(), CarouselMode::Dragging);
        carousel.end_gesture(0.0, t0 + ms(10));
        assert_eq!(carousel.mode(), CarouselMode::Paused);
        assert!(!carousel.is_auto_advancing());

        carousel.start_auto_advance(t0);
        assert!(!carousel.is_auto_advancing());

        carousel.resume(t0 + ms(20));
        assert_eq!(carousel.next_advance_at(), Some(t0 + ms(5_020)));
    }

    #[test]
    fn resume_during_gesture_waits_for_release() {
        let (mut carousel, _) = recording(3);
        let t0 = Instant::now();
        carousel.pause();
        carousel.begin_gesture(0.0, t0);
        carousel.resume(t0);
        assert!(!carousel.is_auto_advancing());
        carousel.end_gesture(0.0, t0 + ms(5));
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn pointer_leave_resolves_drag_at_last_position() {
        let (mut carousel, _) = recording(4);
        let t0 = Instant::now();
        carousel.handle_pointer(PointerInput::Enter);
        carousel.handle_pointer(PointerInput::Down { x: 200.0, at: t0 });
        carousel.handle_pointer(PointerInput::Move { x: 120.0 });
        let outcome = carousel.handle_pointer(PointerInput::Leave { at: t0 + ms(200) });
        assert_eq!(outcome, Some(GestureOutcome::Advanced));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.mode(), CarouselMode::AutoAdvancing);
    }

    #[test]
    fn hover_pauses_until_leave() {
        let (mut carousel, _) = recording(4);
        let t0 = Instant::now();
        carousel.handle_pointer(PointerInput::Enter);
        assert!(!carousel.tick(t0 + ms(60_000)));
        assert_eq!(carousel.handle_pointer(PointerInput::Leave { at: t0 }), None);
        assert!(carousel.tick(t0 + ms(5_000)));
    }

    #[test]
    fn hover_out_keeps_an_explicit_pause() {
        let (mut carousel, _) = recording(4);
        let t0 = Instant::now();
        carousel.pause();
        carousel.handle_pointer(PointerInput::Enter);
        carousel.handle_pointer(PointerInput::Leave { at: t0 });
        assert_eq!(carousel.mode(), CarouselMode::Paused);
        assert!(carousel.is_paused());
        assert_eq!(carousel.next_advance_at(), None);
        assert!(!carousel.tick(t0 + ms(60_000)));
    }

    #[test]
    fn resume_while_hovered_waits_for_leave() {
        let (mut carousel, _) = recording(4);
        let t0 = Instant::now();
        carousel.handle_pointer(PointerInput::Enter);
        carousel.pause();
        carousel.resume(t0);
        assert_eq!(carousel.mode(), CarouselMode::Paused);
        assert!(!carousel.is_paused());
        assert_eq!(carousel.next_advance_at(), None);

        carousel.handle_pointer(PointerInput::Leave { at: t0 + ms(10) });
        assert_eq!(carousel.next_advance_at(), Some(t0 + ms(5_010)));
    }

    #[test]
    fn gesture_under_hover_does_not_restart_the_timer() {
        let (mut carousel, _) = recording(4);
        let t0 = Instant::now();
        carousel.handle_pointer(PointerInput::Enter);
        carousel.handle_pointer(PointerInput::Down { x: 200.0, at: t0 });
        carousel.handle_pointer(PointerInput::Up { x: 100.0, at: t0 + ms(100) });
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.mode(), CarouselMode::Paused);
        assert!(!carousel.is_auto_advancing());
    }
}
