//! Logs panel component
//!
//! Displays the tail of the in-memory log buffer, color-coded by level.
//! The panel receives entries rather than reaching into the shared buffer,
//! so it renders the same way in tests as in the running app.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Logs panel holding the entries visible this frame
pub struct LogsPanel {
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    /// Build a panel from the most recent entries (oldest first)
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Number of entry rows that fit inside a bordered panel of `height`
    pub fn capacity(height: u16) -> usize {
        height.saturating_sub(2) as usize
    }
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    let color = match level {
        LogLevel::Error => theme.log_error,
        LogLevel::Warn => theme.log_warn,
        LogLevel::Info => theme.log_info,
        LogLevel::Debug => theme.log_debug,
        LogLevel::Trace => theme.log_trace,
    };
    Style::default().fg(color)
}

/// Wide terminals also show where the event came from
fn format_log_entry(entry: &LogEntry, bp: Breakpoint) -> String {
    if bp.at_least(Breakpoint::Wide) {
        format!("{} ({})", entry.format_line(), entry.target)
    } else {
        entry.format_line()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let bp = Breakpoint::from_width(area.width);
        let skip = self.entries.len().saturating_sub(Self::capacity(area.height));

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .skip(skip)
            .map(|entry| {
                ListItem::new(format_log_entry(entry, bp))
                    .style(log_level_style(entry.level, ctx.theme))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(ctx.theme.border_style(false))
                .title(" System Logs "),
        );

        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level,
            target: "prop_counter::tui".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn shows_only_the_newest_entries_that_fit() {
        let entries = (0..10)
            .map(|i| entry(LogLevel::Info, &format!("line {}", i)))
            .collect();
        let panel = LogsPanel::new(entries);

        let mut terminal = Terminal::new(TestBackend::new(70, 5)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| panel.render(f, f.area(), &RenderContext::new(&theme, ComponentId::Parent)))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..5u16)
            .map(|y| (0..70u16).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();
        assert!(rows[1].contains("line 7"));
        assert!(rows[3].contains("line 9"));
        assert!(!rows.iter().any(|r| r.contains("line 6")));
        // Normal width omits the target
        assert!(!rows[1].contains("prop_counter::tui"));
    }

    #[test]
    fn wide_layout_includes_target() {
        let e = entry(LogLevel::Warn, "hello");
        assert!(format_log_entry(&e, Breakpoint::Wide).ends_with("(prop_counter::tui)"));
        assert!(!format_log_entry(&e, Breakpoint::Normal).contains("prop_counter::tui"));
    }

    #[test]
    fn capacity_accounts_for_borders() {
        assert_eq!(LogsPanel::capacity(8), 6);
        assert_eq!(LogsPanel::capacity(1), 0);
    }
}
