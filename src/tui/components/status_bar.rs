// Status bar component
//
// Renders global key hints plus the focused component's own hint.

use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data shown in the status bar, built fresh each frame
pub struct StatusBar {
    /// Hint from the focused component, if it has one
    pub focus_hint: Option<&'static str>,
}

impl StatusBar {
    /// Text for a bar of the given width
    ///
    /// Narrow terminals drop the focused component's hint.
    pub fn text(&self, focus: ComponentId, width: u16) -> String {
        let bp = Breakpoint::from_width(width);
        if !bp.at_least(Breakpoint::Normal) {
            return " Tab:focus p/c/s q:quit".to_string();
        }

        let globals = " Tab:focus  p:parent+1  c:child+1  s:send  t:theme  q:quit";
        match self.focus_hint {
            Some(hint) => format!("{} │ {}: {}", globals, focus.label(), hint),
            None => globals.to_string(),
        }
    }
}

impl Component for StatusBar {
    fn id(&self) -> ComponentId {
        ComponentId::StatusBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let status = Paragraph::new(self.text(ctx.focus, area.width))
            .style(Style::default().fg(ctx.theme.status_bar))
            .block(Block::default().borders(Borders::TOP));

        f.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_bar_shows_focused_hint() {
        let bar = StatusBar {
            focus_hint: Some("Enter:increment"),
        };
        let text = bar.text(ComponentId::Parent, 120);
        assert!(text.contains("q:quit"));
        assert!(text.ends_with("Parent: Enter:increment"));
    }

    #[test]
    fn compact_bar_drops_hint() {
        let bar = StatusBar {
            focus_hint: Some("Enter:increment"),
        };
        let text = bar.text(ComponentId::Parent, 40);
        assert!(!text.contains("Enter:increment"));
    }
}
