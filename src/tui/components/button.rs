//! Clickable button widget
//!
//! A bordered, single-line label. Buttons carry no state of their own; the
//! owning component decides which one is selected and what pressing it does.

use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Position, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Button height: one label line plus top and bottom border
pub const BUTTON_HEIGHT: u16 = 3;

/// A labelled button with a short variant for narrow terminals
#[derive(Debug, Clone, Copy)]
pub struct Button {
    label: &'static str,
    short_label: &'static str,
}

impl Button {
    pub const fn new(label: &'static str, short_label: &'static str) -> Self {
        Self { label, short_label }
    }

    /// Label shown at the given breakpoint
    pub fn label(&self, bp: Breakpoint) -> &'static str {
        if bp.at_least(Breakpoint::Normal) {
            self.label
        } else {
            self.short_label
        }
    }

    /// Rendered width: label + one cell of padding and a border on each side
    pub fn width(&self, bp: Breakpoint) -> u16 {
        self.label(bp).width() as u16 + 4
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, bp: Breakpoint, selected: bool) {
        let style = theme.button_style(selected);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(selected));

        let label = Paragraph::new(self.label(bp))
            .alignment(Alignment::Center)
            .style(style)
            .block(block);

        f.render_widget(label, area);
    }
}

/// Lay buttons out left to right on one row, clipped to `area`
pub fn button_row(area: Rect, widths: &[u16]) -> Vec<Rect> {
    let height = BUTTON_HEIGHT.min(area.height);
    let mut x = area.x;

    widths
        .iter()
        .map(|&w| {
            let width = w.min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, width, height);
            x = x.saturating_add(width);
            rect
        })
        .collect()
}

/// Whether a terminal cell falls inside a button
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEND: Button = Button::new("Send Child Count!", "Send");

    #[test]
    fn short_label_on_compact_terminals() {
        assert_eq!(SEND.label(Breakpoint::Compact), "Send");
        assert_eq!(SEND.label(Breakpoint::Normal), "Send Child Count!");
        assert_eq!(SEND.width(Breakpoint::Compact), 8);
        assert_eq!(SEND.width(Breakpoint::Wide), 21);
    }

    #[test]
    fn row_places_buttons_side_by_side() {
        let rects = button_row(Rect::new(2, 5, 40, 3), &[10, 12]);
        assert_eq!(rects[0], Rect::new(2, 5, 10, 3));
        assert_eq!(rects[1], Rect::new(12, 5, 12, 3));
    }

    #[test]
    fn row_clips_to_available_width() {
        let rects = button_row(Rect::new(0, 0, 15, 2), &[10, 10]);
        assert_eq!(rects[0], Rect::new(0, 0, 10, 2));
        assert_eq!(rects[1], Rect::new(10, 0, 5, 2));
    }

    #[test]
    fn hit_testing_respects_bounds() {
        let area = Rect::new(4, 4, 6, 3);
        assert!(hit(area, 4, 4));
        assert!(hit(area, 9, 6));
        assert!(!hit(area, 10, 6));
        assert!(!hit(area, 5, 7));
    }
}
