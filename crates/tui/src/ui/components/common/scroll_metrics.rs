//! Vertical scroll position of the landing page.
//!
//! Offsets are terminal rows (`u16`) so they map directly onto the page
//! buffer; predicates that are defined in display units convert through
//! [`rows_to_units`].

use crate::ui::utils::rows_to_units;

/// Header switches to its condensed style past this offset, in display units.
pub const CONDENSE_AFTER_UNITS: f32 = 50.0;
/// Absolute offset past which the near-bottom rule can reveal scroll-to-top.
pub const SCROLL_TOP_MIN_UNITS: f32 = 500.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    pub fn update_viewport_height(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    pub fn update_content_height(&mut self, content_height: u16) {
        self.content_height = content_height;
        self.clamp_offset();
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i32) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = next as u16;
    }

    pub fn scroll_pages(&mut self, delta_pages: i32) {
        let page = i32::from(self.viewport_height.saturating_sub(1).max(1));
        self.scroll_lines(page.saturating_mul(delta_pages));
    }

    /// Jumps to an absolute row, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn header_condensed(&self) -> bool {
        header_condensed(rows_to_units(self.offset))
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        scroll_to_top_visible(
            rows_to_units(self.offset),
            rows_to_units(self.viewport_height),
            rows_to_units(self.content_height),
        )
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

pub fn header_condensed(offset: f32) -> bool {
    offset > CONDENSE_AFTER_UNITS
}

/// Scroll-to-top shows once past half the scrollable range, or when far down
/// and within the last fifth of the content.
pub fn scroll_to_top_visible(offset: f32, viewport: f32, content: f32) -> bool {
    let scrollable = content - viewport;
    let past_half = scrollable > 0.0 && offset / scrollable > 0.5;
    let near_bottom = offset > SCROLL_TOP_MIN_UNITS && offset + viewport >= 0.8 * content;
    past_half || near_bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut metrics = ScrollMetrics::default();
        metrics.update_viewport_height(5);
        metrics.update_content_height(20);

        metrics.scroll_lines(3);
        assert_eq!(metrics.offset(), 3);

        metrics.scroll_lines(-10);
        assert_eq!(metrics.offset(), 0);

        metrics.scroll_to(99);
        assert_eq!(metrics.offset(), 15);

        metrics.update_content_height(10);
        assert_eq!(metrics.offset(), 5);
    }

    #[test]
    fn page_scrolling_keeps_one_row_of_context() {
        let mut metrics = ScrollMetrics::default();
        metrics.update_viewport_height(5);
        metrics.update_content_height(40);
        metrics.scroll_pages(2);
        assert_eq!(metrics.offset(), 8);
        metrics.scroll_pages(-1);
        assert_eq!(metrics.offset(), 4);
    }

    #[test]
    fn header_condenses_past_threshold() {
        assert!(!header_condensed(50.0));
        assert!(header_condensed(50.5));

        let mut metrics = ScrollMetrics::default();
        metrics.update_viewport_height(10);
        metrics.update_content_height(100);
        metrics.scroll_to(3);
        assert!(!metrics.header_condensed());
        metrics.scroll_to(4);
        assert!(metrics.header_condensed());
        metrics.scroll_to_top();
        assert!(!metrics.header_condensed());
    }

    #[test]
    fn scroll_to_top_rules() {
        // Past half of the scrollable range.
        assert!(scroll_to_top_visible(600.0, 800.0, 1_800.0));
        assert!(!scroll_to_top_visible(500.0, 800.0, 1_800.0));
        // Near the bottom of long content but under half the range.
        assert!(scroll_to_top_visible(920.0, 3_100.0, 5_000.0));
        // Far down but not near the end.
        assert!(!scroll_to_top_visible(600.0, 400.0, 5_000.0));
        // Nothing to scroll.
        assert!(!scroll_to_top_visible(0.0, 800.0, 600.0));
    }
}
