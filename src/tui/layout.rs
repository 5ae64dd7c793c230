//! Screen geometry for the TUI
//!
//! Single source of truth for width thresholds and the shell layout, so
//! drawing and mouse hit-testing never disagree about where things are.

use crate::tui::components::PARENT_MIN_HEIGHT;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered title bar
const TITLE_HEIGHT: u16 = 3;
/// Status bar: top border plus one line of hints
const STATUS_HEIGHT: u16 = 2;
/// Smallest logs panel worth drawing: borders plus one entry
const LOGS_MIN_HEIGHT: u16 = 3;

/// Responsive breakpoint for layout decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, buttons use short labels
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal, status bar shows all hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Where each shell piece goes for a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub parent: Rect,
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl ScreenLayout {
    /// Split the frame into title, parent panel, optional logs, and status
    ///
    /// The parent gets its minimum height when logs are shown; logs take the
    /// rest. Without logs the parent fills the space.
    pub fn new(area: Rect, show_logs: bool) -> Self {
        if show_logs {
            let [title, parent, logs, status] = Layout::vertical([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(PARENT_MIN_HEIGHT),
                Constraint::Min(LOGS_MIN_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .areas(area);
            Self {
                title,
                parent,
                logs: Some(logs),
                status,
            }
        } else {
            let [title, parent, status] = Layout::vertical([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(PARENT_MIN_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .areas(area);
            Self {
                title,
                parent,
                logs: None,
                status,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_layout_with_logs() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30), true);
        assert_eq!(layout.title, Rect::new(0, 0, 80, TITLE_HEIGHT));
        assert_eq!(layout.parent.y, TITLE_HEIGHT);
        assert_eq!(layout.parent.height, PARENT_MIN_HEIGHT);
        let logs = layout.logs.unwrap();
        assert_eq!(logs.y, layout.parent.bottom());
        assert_eq!(logs.bottom(), layout.status.y);
        assert_eq!(layout.status.bottom(), 30);
    }

    #[test]
    fn shell_layout_without_logs_gives_parent_the_rest() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30), false);
        assert!(layout.logs.is_none());
        assert_eq!(layout.parent.height, 30 - TITLE_HEIGHT - STATUS_HEIGHT);
    }

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(400), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }
}
