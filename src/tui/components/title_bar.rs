// Title bar component
//
// Renders the app name, a demo indicator, and the active theme.

use crate::tui::theme::ThemeKind;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data shown in the title bar, built fresh each frame
pub struct TitleBar {
    pub theme: ThemeKind,
    pub demo: bool,
}

impl Component for TitleBar {
    fn id(&self) -> ComponentId {
        ComponentId::TitleBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let title_text = if self.demo {
            " prop-counter ▶ demo".to_string()
        } else {
            " prop-counter".to_string()
        };

        let theme_label = Line::from(format!(" theme: {} ", self.theme.name())).right_aligned();

        let title = Paragraph::new(title_text)
            .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.title))
                    .title_top(theme_label),
            );

        f.render_widget(title, area);
    }
}
