use ratatui::layout::Rect;

use super::GestureOutcome;

/// Hit-test areas and hover state of the rendered carousel, in page
/// coordinates.
#[derive(Debug, Clone, Default)]
pub struct TrackState {
    pub area: Rect,
    pub previous_area: Rect,
    pub next_area: Rect,
    pub dot_areas: Vec<Rect>,
    /// Pointer is over the track (auto-advance held).
    pub hovered: bool,
    /// How the most recent gesture resolved; drives the snap-back hint.
    pub last_outcome: Option<GestureOutcome>,
}
