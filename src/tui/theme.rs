// Theme system for the TUI
//
// Provides color themes that can be switched at runtime ('t') or picked
// through config/env/CLI. Each theme defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Monokai,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Monokai,
            ThemeKind::Nord,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Look up a theme by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,

    // Counters and buttons
    pub counter: Color,
    pub button: Color,
    pub button_selected_bg: Color,
    pub button_selected_fg: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            muted: Color::DarkGray,

            counter: Color::Yellow,
            button: Color::Gray,
            button_selected_bg: Color::Cyan,
            button_selected_fg: Color::Black,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            muted: Color::Gray,

            counter: Color::Magenta,
            button: Color::DarkGray,
            button_selected_bg: Color::LightBlue,
            button_selected_fg: Color::Black,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            bg: Color::Rgb(39, 40, 34),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),
            border_type: BorderType::Rounded,

            title: Color::Rgb(249, 38, 114),
            status_bar: Color::Rgb(166, 226, 46),
            muted: Color::Rgb(117, 113, 94),

            counter: Color::Rgb(230, 219, 116),
            button: Color::Rgb(102, 217, 239),
            button_selected_bg: Color::Rgb(166, 226, 46),
            button_selected_fg: Color::Rgb(39, 40, 34),

            log_error: Color::Rgb(249, 38, 114),
            log_warn: Color::Rgb(253, 151, 31),
            log_info: Color::Rgb(102, 217, 239),
            log_debug: Color::Rgb(117, 113, 94),
            log_trace: Color::Rgb(117, 113, 94),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),
            border_type: BorderType::Rounded,

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),
            muted: Color::Rgb(76, 86, 106),

            counter: Color::Rgb(235, 203, 139),
            button: Color::Rgb(129, 161, 193),
            button_selected_bg: Color::Rgb(136, 192, 208),
            button_selected_fg: Color::Rgb(46, 52, 64),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(76, 86, 106),
        }
    }

    /// Panel border style, highlighted when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for a counter value
    pub fn counter_style(&self) -> Style {
        Style::default()
            .fg(self.counter)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a button label, inverted when selected
    pub fn button_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.button_selected_fg)
                .bg(self.button_selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.button)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_wraps() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ThemeKind::from_name("nord"), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name(" MONOKAI "), Some(ThemeKind::Monokai));
        assert_eq!(ThemeKind::from_name("solarized"), None);
    }
}
