//! TUI widgets for the single-page form
//!
//! Layout:
//! ┌── Sidebar (40) ──┬── Result pane (flex) ─────────┐
//! │ API key          │ heading                       │
//! │ [Confirm]        │ markdown verbatim             │
//! │ Category list    │                               │
//! │ [Search]         │ caption                       │
//! ├──────────────────┴───────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod help;
pub mod result_pane;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 40;

/// Compute the form regions from a terminal area
pub struct FormLayout {
    pub sidebar: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let sidebar_width = SIDEBAR_WIDTH.min(area.width / 2);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(10)])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            result: horizontal[1],
            status_bar: vertical[1],
        }
    }

    /// Create a centered overlay rect (for help)
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = FormLayout::compute(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.result.width, 80);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_narrow_terminal_halves_sidebar() {
        let layout = FormLayout::compute(Rect::new(0, 0, 60, 20));
        assert_eq!(layout.sidebar.width, 30);
    }

    #[test]
    fn test_overlay_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let overlay = FormLayout::centered_overlay(60, 60, area);
        assert!(overlay.width <= 60 && overlay.height <= 30);
        assert!(overlay.x >= 20 && overlay.y >= 10);
    }
}
