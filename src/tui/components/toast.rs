//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with the default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }

    /// Where the toast lands inside `area`: bottom-right, 2 cells from the edge
    fn placement(&self, area: Rect) -> Rect {
        // 2 cells of padding plus the border on each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);

        let x = area.right().saturating_sub(width + 2).max(area.x);
        let y = area.bottom().saturating_sub(height + 2).max(area.y);
        Rect::new(x, y, width, height)
    }
}

impl Component for Toast {
    fn id(&self) -> ComponentId {
        ComponentId::Toast
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let toast_area = self.placement(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.bg));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg))
            .block(block);

        // Clear first so the toast sits on top of the panels
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let toast = Toast::new("Sent 2 to parent");
        assert!(!toast.is_expired_at(toast.created_at));
        assert!(!toast.is_expired_at(toast.created_at + Duration::from_millis(1999)));
        assert!(toast.is_expired_at(toast.created_at + TOAST_DURATION));
    }

    #[test]
    fn placement_stays_inside_area() {
        let toast = Toast::new("Sent 2 to parent");
        let area = Rect::new(0, 0, 80, 24);
        let placed = toast.placement(area);

        assert_eq!(placed.width, 16 + 4);
        assert_eq!(placed.height, 3);
        assert_eq!(placed.right(), 78);
        assert_eq!(placed.bottom(), 22);

        let tiny = Rect::new(0, 0, 10, 2);
        let placed = toast.placement(tiny);
        assert!(placed.right() <= tiny.right());
        assert!(placed.bottom() <= tiny.bottom());
    }
}
