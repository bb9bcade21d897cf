//! UI utilities shared across components: modal geometry, hit testing,
//! terminal-cell to display-unit conversion, and copying an off-screen page
//! buffer into the frame.

use ratatui::{buffer::Buffer, prelude::*};

/// Width of one terminal column, in display units.
pub const CELL_WIDTH_UNITS: f32 = 8.0;
/// Height of one terminal row, in display units.
pub const ROW_HEIGHT_UNITS: f32 = 16.0;

/// Centers a fixed-size box inside `r`, shrinking it when `r` is smaller.
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

pub fn columns_to_units(columns: u16) -> f32 {
    f32::from(columns) * CELL_WIDTH_UNITS
}

pub fn rows_to_units(rows: u16) -> f32 {
    f32::from(rows) * ROW_HEIGHT_UNITS
}

/// Copies rows `offset..offset + target.height` of `page` into `target` on
/// the frame buffer. Rows past the end of the page are left untouched.
pub fn blit_rows(page: &Buffer, offset: u16, target: Rect, frame_buffer: &mut Buffer) {
    let width = target.width.min(page.area.width);
    for row in 0..target.height {
        let source_y = page.area.y.saturating_add(offset).saturating_add(row);
        if source_y >= page.area.bottom() {
            break;
        }
        for column in 0..width {
            let source = page.cell((page.area.x + column, source_y));
            let destination = frame_buffer.cell_mut((target.x + column, target.y + row));
            if let (Some(source), Some(destination)) = (source, destination) {
                *destination = source.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_box_is_centered_and_clamped() {
        let outer = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(40, 10, outer), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_fixed(100, 30, outer), outer);
    }

    #[test]
    fn blit_copies_visible_window() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 6));
        for row in 0..6u16 {
            page.set_string(0, row, format!("r{row}"), Style::default());
        }
        let mut frame = Buffer::empty(Rect::new(0, 0, 4, 3));
        blit_rows(&page, 2, Rect::new(0, 1, 4, 3), &mut frame);
        assert_eq!(frame.cell((0, 1)).map(|c| c.symbol()), Some("r"));
        assert_eq!(frame.cell((1, 1)).map(|c| c.symbol()), Some("2"));
        assert_eq!(frame.cell((1, 2)).map(|c| c.symbol()), Some("3"));
    }

    #[test]
    fn unit_conversion() {
        assert_eq!(columns_to_units(10), 80.0);
        assert_eq!(rows_to_units(4), 64.0);
    }
}
