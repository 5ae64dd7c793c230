//! Parent counter component
//!
//! Owns its own counter, a "Click Parent!" button, and exactly one
//! [`ChildCounter`]. The child's `on_report` prop is wired to the parent's
//! counter setter, so a report from the child overwrites the parent's value.
//!
//! # Ownership
//!
//! ```text
//! ParentCounter
//!   ├── counter: UseState<u64>   (strong, the only one)
//!   └── child: ChildCounter
//!         └── on_report: Callback<u64>
//!               └── StateSetter<u64>  (weak → parent.counter)
//! ```
//!
//! The callback holds a weak handle, so the child never keeps the parent's
//! state alive on its own.
//!
//! The parent takes the same kind of prop from its own owner: after each
//! overwrite it passes the received value up through `on_child_value`.

use super::button::{hit, Button, BUTTON_HEIGHT};
use super::child_counter::{ChildCounter, ChildProps, CHILD_MIN_HEIGHT};
use crate::tui::layout::Breakpoint;
use crate::tui::reactive::{Callback, RenderSignal, StateSetter, UseState};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const INCREMENT_BUTTON: Button = Button::new("Click Parent!", "+1");

/// Minimum height for the parent panel with the child nested inside
pub const PARENT_MIN_HEIGHT: u16 = 2 + 1 + BUTTON_HEIGHT + CHILD_MIN_HEIGHT;

/// Props supplied by the parent's owner
#[derive(Debug, Clone)]
pub struct ParentProps {
    /// Told about every value the child reports, after it is applied
    pub on_child_value: Callback<u64>,
}

/// Screen regions of a rendered parent panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLayout {
    pub counter: Rect,
    pub increment: Rect,
    pub child: Rect,
}

pub struct ParentCounter {
    counter: UseState<u64>,
    child: ChildCounter,
}

impl ParentCounter {
    /// Create the parent and its child, wiring the child's report callback
    pub fn mount(props: ParentProps, signal: RenderSignal) -> Self {
        let counter = UseState::new(0, signal.clone());

        let setter = counter.setter();
        let on_child_value = props.on_child_value;
        let on_report = Callback::new(move |value: u64| {
            if Self::receive_child_value(&setter, value) {
                on_child_value.emit(value);
            }
        });

        let child = ChildCounter::new(ChildProps { on_report }, signal);
        tracing::debug!("Parent mounted with one child");

        Self { counter, child }
    }

    /// Current counter value
    pub fn value(&self) -> u64 {
        self.counter.get()
    }

    pub fn increment(&mut self) {
        self.counter.update(|v| v.saturating_add(1));
        tracing::debug!(value = self.counter.get(), "Parent counter incremented");
    }

    /// Unconditionally replace the counter with a value from the child
    ///
    /// Runs through the setter captured in the child's `on_report` prop, so it
    /// needs no borrow of the parent itself. Returns false once unmounted.
    fn receive_child_value(counter: &StateSetter<u64>, value: u64) -> bool {
        let applied = counter.set(value);
        if applied {
            tracing::info!(value, "Parent counter overwritten by child");
        }
        applied
    }

    pub fn child(&self) -> &ChildCounter {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut ChildCounter {
        &mut self.child
    }

    /// Compute where the counter, button and child land inside `area`
    pub fn layout(area: Rect) -> ParentLayout {
        let bp = Breakpoint::from_width(area.width);
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [counter, button, child] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(CHILD_MIN_HEIGHT),
        ])
        .areas(inner);

        let width = INCREMENT_BUTTON.width(bp).min(button.width);
        ParentLayout {
            counter,
            increment: Rect::new(button.x, button.y, width, button.height),
            child,
        }
    }
}

impl Component for ParentCounter {
    fn id(&self) -> ComponentId {
        ComponentId::Parent
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let theme = ctx.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(" Parent ");
        f.render_widget(block, area);

        let layout = Self::layout(area);
        let counter = Paragraph::new(self.value().to_string()).style(theme.counter_style());
        f.render_widget(counter, layout.counter);

        INCREMENT_BUTTON.render(
            f,
            layout.increment,
            theme,
            Breakpoint::from_width(area.width),
            focused,
        );

        // Child renders beneath the parent's own controls
        self.child.render(f, layout.child, ctx);
    }
}

impl Interactive for ParentCounter {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => {
                self.increment();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> Handled {
        let layout = Self::layout(area);

        if hit(layout.increment, column, row) {
            self.increment();
            Handled::Yes
        } else if hit(layout.child, column, row) {
            self.child.handle_click(layout.child, column, row)
        } else {
            Handled::No
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter:increment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn mounted() -> (ParentCounter, RenderSignal) {
        let signal = RenderSignal::new();
        let props = ParentProps {
            on_child_value: Callback::noop(),
        };
        (ParentCounter::mount(props, signal.clone()), signal)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn increments_count_from_zero() {
        let (mut parent, _) = mounted();
        assert_eq!(parent.value(), 0);

        for n in 1..=10 {
            parent.increment();
            assert_eq!(parent.value(), n);
        }
    }

    #[test]
    fn child_report_overwrites_parent() {
        let (mut parent, _) = mounted();
        for _ in 0..7 {
            parent.increment();
        }
        parent.child_mut().increment();
        parent.child_mut().increment();

        parent.child().report();

        assert_eq!(parent.value(), 2);
        assert_eq!(parent.child().value(), 2);
    }

    #[test]
    fn repeated_report_is_idempotent() {
        let (mut parent, _) = mounted();
        parent.child_mut().increment();

        parent.child().report();
        assert_eq!(parent.value(), 1);
        parent.child().report();
        assert_eq!(parent.value(), 1);
    }

    #[test]
    fn report_of_zero_still_overwrites() {
        let (mut parent, _) = mounted();
        parent.increment();

        parent.child().report();

        assert_eq!(parent.value(), 0);
    }

    #[test]
    fn receive_child_value_replaces_without_merge() {
        let (mut parent, signal) = mounted();
        parent.increment();
        let before = signal.generation();

        assert!(ParentCounter::receive_child_value(&parent.counter.setter(), 40));

        assert_eq!(parent.value(), 40);
        assert!(signal.generation() > before);
    }

    #[test]
    fn owner_hears_each_applied_report() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&heard);
        let props = ParentProps {
            on_child_value: Callback::new(move |v| sink.borrow_mut().push(v)),
        };
        let mut parent = ParentCounter::mount(props, RenderSignal::new());

        parent.child_mut().increment();
        parent.child().report();
        parent.child().report();

        assert_eq!(*heard.borrow(), vec![1, 1]);
    }

    #[test]
    fn setter_after_unmount_is_ignored() {
        let (parent, _) = mounted();
        let setter = parent.counter.setter();
        drop(parent);

        assert!(!ParentCounter::receive_child_value(&setter, 9));
    }

    #[test]
    fn scenario_from_mount_to_reincrement() {
        let (mut parent, _) = mounted();

        for _ in 0..3 {
            parent.increment();
        }
        assert_eq!(parent.value(), 3);

        parent.child_mut().increment();
        parent.child_mut().increment();
        assert_eq!(parent.child().value(), 2);

        parent.child().report();
        assert_eq!(parent.value(), 2);

        parent.increment();
        assert_eq!(parent.value(), 3);
        assert_eq!(parent.child().value(), 2);
    }

    #[test]
    fn renders_both_counters_and_all_buttons() {
        let (mut parent, _) = mounted();
        for _ in 0..3 {
            parent.increment();
        }
        parent.child_mut().increment();

        let mut terminal = Terminal::new(TestBackend::new(70, PARENT_MIN_HEIGHT)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Parent);
                parent.render(f, f.area(), &ctx);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Parent"));
        assert!(text.contains("Click Parent!"));
        assert!(text.contains("Click Child!"));
        assert!(text.contains("Send Child Count!"));

        let layout = ParentCounter::layout(Rect::new(0, 0, 70, PARENT_MIN_HEIGHT));
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[layout.counter.y as usize].contains('3'));
        let child_counter = ChildCounter::layout(layout.child).counter;
        assert!(rows[child_counter.y as usize].contains('1'));
    }

    #[test]
    fn compact_width_uses_short_labels() {
        let (parent, _) = mounted();
        let mut terminal = Terminal::new(TestBackend::new(40, PARENT_MIN_HEIGHT)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Child);
                parent.render(f, f.area(), &ctx);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Send"));
        assert!(!text.contains("Send Child Count!"));
    }

    #[test]
    fn clicks_route_to_parent_and_child() {
        let (mut parent, _) = mounted();
        let area = Rect::new(0, 0, 70, PARENT_MIN_HEIGHT);
        let layout = ParentCounter::layout(area);
        let child_layout = ChildCounter::layout(layout.child);

        let inc = layout.increment;
        assert_eq!(parent.handle_click(area, inc.x + 2, inc.y + 1), Handled::Yes);
        assert_eq!(parent.value(), 1);

        let child_inc = child_layout.increment;
        for _ in 0..4 {
            parent.handle_click(area, child_inc.x + 1, child_inc.y + 1);
        }
        assert_eq!(parent.child().value(), 4);

        let send = child_layout.report;
        assert_eq!(parent.handle_click(area, send.x + 1, send.y + 1), Handled::Yes);
        assert_eq!(parent.value(), 4);

        // Parent border is not interactive
        assert_eq!(parent.handle_click(area, 0, 0), Handled::No);
    }

    #[test]
    fn parent_keys_increment() {
        use crossterm::event::KeyModifiers;

        let (mut parent, _) = mounted();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);

        assert_eq!(parent.handle_key(enter), Handled::Yes);
        assert_eq!(parent.handle_key(other), Handled::No);
        assert_eq!(parent.value(), 1);
    }
}
