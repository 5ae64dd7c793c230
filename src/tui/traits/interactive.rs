//! Interactive trait for components that handle input
//!
//! Components that can receive and process keyboard or mouse events
//! implement this trait. The App routes input to the focused component.

use super::Component;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Result of handling an input event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle input
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: q, Tab, p/c/s, t)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (drops unhandled keys)
/// ```
///
/// Mouse clicks are hit-tested against the area the component was last
/// rendered into, so `handle_click` receives the same `area` that
/// `Component::render` did.
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Handle a left click at terminal cell (`column`, `row`)
    fn handle_click(&mut self, _area: Rect, _column: u16, _row: u16) -> Handled {
        Handled::No
    }

    /// Hint text for status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handled_from_bool() {
        assert_eq!(Handled::from(true), Handled::Yes);
        assert_eq!(Handled::from(false), Handled::No);
        assert!(Handled::Yes.was_handled());
        assert!(!Handled::No.was_handled());
    }
}
