//! Child counter component
//!
//! Owns a local counter and two buttons:
//! - "Click Child!" increments the local counter
//! - "Send Child Count!" hands the current value to the `on_report` prop
//!
//! The child never looks at what `on_report` does with the value.

use super::button::{button_row, hit, Button, BUTTON_HEIGHT};
use crate::tui::layout::Breakpoint;
use crate::tui::reactive::{Callback, RenderSignal, UseState};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const INCREMENT_BUTTON: Button = Button::new("Click Child!", "+1");
const REPORT_BUTTON: Button = Button::new("Send Child Count!", "Send");

/// Minimum height for the child panel: borders + counter line + button row
pub const CHILD_MIN_HEIGHT: u16 = 2 + 1 + BUTTON_HEIGHT;

/// Which of the child's buttons is selected for keyboard activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildButton {
    #[default]
    Increment,
    Report,
}

impl ChildButton {
    fn toggle(self) -> Self {
        match self {
            Self::Increment => Self::Report,
            Self::Report => Self::Increment,
        }
    }
}

/// Props supplied by the owning component
#[derive(Debug, Clone)]
pub struct ChildProps {
    /// Receives the child's counter value when "Send Child Count!" fires
    pub on_report: Callback<u64>,
}

/// Screen regions of a rendered child panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildLayout {
    pub counter: Rect,
    pub increment: Rect,
    pub report: Rect,
}

pub struct ChildCounter {
    counter: UseState<u64>,
    selected: UseState<ChildButton>,
    on_report: Callback<u64>,
}

impl ChildCounter {
    pub fn new(props: ChildProps, signal: RenderSignal) -> Self {
        Self {
            counter: UseState::new(0, signal.clone()),
            selected: UseState::new(ChildButton::default(), signal),
            on_report: props.on_report,
        }
    }

    /// Current counter value
    pub fn value(&self) -> u64 {
        self.counter.get()
    }

    pub fn selected(&self) -> ChildButton {
        self.selected.get()
    }

    pub fn increment(&mut self) {
        self.counter.update(|v| v.saturating_add(1));
        tracing::debug!(value = self.counter.get(), "Child counter incremented");
    }

    /// Push the current value to the owner. Leaves the counter untouched.
    pub fn report(&self) {
        let value = self.counter.get();
        tracing::debug!(value, "Child reporting to parent");
        self.on_report.emit(value);
    }

    fn press(&mut self, button: ChildButton) {
        self.selected.set(button);
        match button {
            ChildButton::Increment => self.increment(),
            ChildButton::Report => self.report(),
        }
    }

    /// Compute where the counter and buttons land inside `area`
    ///
    /// Button labels follow the panel's own width, so drawing and
    /// hit-testing always agree.
    pub fn layout(area: Rect) -> ChildLayout {
        let bp = Breakpoint::from_width(area.width);
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [counter, buttons] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(BUTTON_HEIGHT)])
                .areas(inner);

        let row = button_row(
            buttons,
            &[
                INCREMENT_BUTTON.width(bp),
                REPORT_BUTTON.width(bp),
            ],
        );

        ChildLayout {
            counter,
            increment: row[0],
            report: row[1],
        }
    }
}

impl Component for ChildCounter {
    fn id(&self) -> ComponentId {
        ComponentId::Child
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let theme = ctx.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(" Child ");
        f.render_widget(block, area);

        let bp = Breakpoint::from_width(area.width);
        let layout = Self::layout(area);
        let counter = Paragraph::new(self.value().to_string()).style(theme.counter_style());
        f.render_widget(counter, layout.counter);

        let selected = self.selected();
        INCREMENT_BUTTON.render(
            f,
            layout.increment,
            theme,
            bp,
            focused && selected == ChildButton::Increment,
        );
        REPORT_BUTTON.render(
            f,
            layout.report,
            theme,
            bp,
            focused && selected == ChildButton::Report,
        );
    }
}

impl Interactive for ChildCounter {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.selected.update(ChildButton::toggle);
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.press(self.selected());
                Handled::Yes
            }
            KeyCode::Char('+') => {
                self.press(ChildButton::Increment);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> Handled {
        let layout = Self::layout(area);

        if hit(layout.increment, column, row) {
            self.press(ChildButton::Increment);
            Handled::Yes
        } else if hit(layout.report, column, row) {
            self.press(ChildButton::Report);
            Handled::Yes
        } else {
            Handled::No
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←→:select  Enter:press  +:increment  s:send")
    }
}
