use beranda_types::{Effect, Section};
use ratatui::layout::Rect;
use tracing::trace;

use crate::ui::components::common::ScrollMetrics;
use crate::ui::utils::contains;

/// Header navigation and page scroll state.
///
/// Owns the section list, the dropdown menu, the page scroll position, and
/// the hit-test areas recorded during the last render.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub items: Vec<Section>,
    /// Highlighted entry while the menu is open.
    pub selected_index: usize,
    menu_open: bool,
    pub scroll: ScrollMetrics,
    /// Top row of each section on the page, in document order.
    section_offsets: Vec<(Section, u16)>,

    pub header_area: Rect,
    pub menu_toggle_area: Rect,
    pub theme_toggle_area: Rect,
    pub menu_area: Rect,
    pub per_item_areas: Vec<Rect>,
    /// Inline links shown in a wide header.
    pub inline_item_areas: Vec<(Section, Rect)>,
    pub scroll_top_area: Option<Rect>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Section::ALL.to_vec())
    }
}

impl NavigationState {
    pub fn new(items: Vec<Section>) -> Self {
        Self {
            items,
            selected_index: 0,
            menu_open: false,
            scroll: ScrollMetrics::default(),
            section_offsets: Vec::new(),
            header_area: Rect::default(),
            menu_toggle_area: Rect::default(),
            theme_toggle_area: Rect::default(),
            menu_area: Rect::default(),
            per_item_areas: Vec::new(),
            inline_item_areas: Vec::new(),
            scroll_top_area: None,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.menu_open = true;
            self.selected_index = self.items.iter().position(|s| *s == self.active_section()).unwrap_or(0);
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.per_item_areas.clear();
        self.menu_area = Rect::default();
    }

    /// Moves the highlighted menu entry, wrapping at both ends.
    pub fn cycle_selection(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index as isize + delta).rem_euclid(len) as usize;
    }

    /// Closes the menu and jumps to the entry at `index`.
    pub fn activate(&mut self, index: usize) -> Vec<Effect> {
        self.close_menu();
        match self.items.get(index) {
            Some(section) => vec![Effect::ScrollTo(*section)],
            None => Vec::new(),
        }
    }

    pub fn activate_selected(&mut self) -> Vec<Effect> {
        self.activate(self.selected_index)
    }

    /// Menu entry under the given screen cell.
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.menu_open {
            return None;
        }
        self.per_item_areas.iter().position(|area| contains(*area, column, row))
    }

    /// Whether a click at the given cell lands outside both the open menu and
    /// its toggle, which dismisses the menu.
    pub fn is_outside_click(&self, column: u16, row: u16) -> bool {
        self.menu_open && !contains(self.menu_area, column, row) && !contains(self.menu_toggle_area, column, row)
    }

    pub fn set_section_offsets(&mut self, offsets: Vec<(Section, u16)>) {
        self.section_offsets = offsets;
    }

    pub fn section_offset(&self, section: Section) -> Option<u16> {
        self.section_offsets.iter().find(|(s, _)| *s == section).map(|(_, offset)| *offset)
    }

    /// Scrolls so `section` starts at the top of the viewport.
    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(offset) = self.section_offset(section) {
            trace!(?section, offset, "scrolling to section");
            self.scroll.scroll_to(offset);
        }
    }

    /// Section whose top is the last one at or above the current offset.
    pub fn active_section(&self) -> Section {
        let offset = self.scroll.offset();
        self.section_offsets
            .iter()
            .take_while(|(_, top)| *top <= offset)
            .last()
            .map(|(section, _)| *section)
            .unwrap_or(Section::Home)
    }

    /// Section that contains page row `row`.
    pub fn section_at_row(&self, row: u16) -> Option<Section> {
        self.section_offsets
            .iter()
            .take_while(|(_, top)| *top <= row)
            .last()
            .map(|(section, _)| *section)
    }

    pub fn is_condensed(&self) -> bool {
        self.scroll.header_condensed()
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.scroll.scroll_to_top_visible()
    }
}
