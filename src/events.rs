// Actions that flow from input sources to the counter components
//
// Keyboard, mouse and the demo script all reduce to these. Using an enum
// keeps every state change behind one dispatch point (`App::apply`) and lets
// the demo task send them over a channel.

use std::fmt;

/// A user-level intent applied to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Parent's "Click Parent!" button
    ParentIncrement,
    /// Child's "Click Child!" button
    ChildIncrement,
    /// Child's "Send Child Count!" button
    ChildReport,
    /// Move focus forward (Tab)
    FocusNext,
    /// Move focus backward (Shift+Tab)
    FocusPrev,
    /// Switch to the next color theme
    CycleTheme,
    /// Leave the application
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::ParentIncrement => "parent +1",
            Action::ChildIncrement => "child +1",
            Action::ChildReport => "child send",
            Action::FocusNext => "focus next",
            Action::FocusPrev => "focus prev",
            Action::CycleTheme => "cycle theme",
            Action::Quit => "quit",
        };
        f.write_str(name)
    }
}
