// App state - the shell around the counter components
//
// Owns the component tree (parent, which owns the child), focus, theme,
// toast and the redraw bookkeeping. Every state change from keyboard, mouse
// or the demo script goes through here, and `apply` is the single point
// where high-level actions reach the components.

use crate::config::{Config, Features};
use crate::events::Action;
use crate::logging::{LogBuffer, LogEntry};
use crate::tui::components::button::hit;
use crate::tui::components::parent_counter::ParentProps;
use crate::tui::components::{ParentCounter, Toast};
use crate::tui::input::InputHandler;
use crate::tui::layout::ScreenLayout;
use crate::tui::reactive::{Callback, RenderSignal};
use crate::tui::theme::{Theme, ThemeKind};
use crate::tui::traits::{ComponentId, Handled, Interactive};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// Main application state
pub struct App {
    /// Root of the component tree
    parent: ParentCounter,

    /// Latest value the parent passed up, waiting to be announced
    pending_report: Rc<Cell<Option<u64>>>,

    /// Which component receives unhandled keys
    focus: ComponentId,

    theme_kind: ThemeKind,
    theme: Theme,

    /// Active toast notification (auto-dismisses)
    toast: Option<Toast>,

    /// Shared log buffer (filled by the tracing layer)
    log_buffer: LogBuffer,
    /// Log total seen at the last tick
    seen_log_total: u64,

    input: InputHandler,

    /// Bumped by every state write; compared against `last_drawn`
    signal: RenderSignal,
    last_drawn: Option<u64>,

    /// Frame size at the last draw, for mouse hit-testing
    frame_area: Rect,

    features: Features,
    demo_mode: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let signal = RenderSignal::new();

        let pending_report = Rc::new(Cell::new(None));
        let sink = Rc::clone(&pending_report);
        let props = ParentProps {
            on_child_value: Callback::new(move |value| sink.set(Some(value))),
        };
        let parent = ParentCounter::mount(props, signal.clone());

        let theme_kind = config.theme_kind();

        Self {
            parent,
            pending_report,
            focus: ComponentId::Parent,
            theme_kind,
            theme: theme_kind.theme(),
            toast: None,
            seen_log_total: log_buffer.total(),
            log_buffer,
            input: InputHandler::with_default_config(),
            signal,
            last_drawn: None,
            frame_area: Rect::default(),
            features: config.features.clone(),
            demo_mode: config.demo_mode,
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors for the view layer
    // ─────────────────────────────────────────────────────────────────────────

    pub fn parent(&self) -> &ParentCounter {
        &self.parent
    }

    pub fn focus(&self) -> ComponentId {
        self.focus
    }

    pub fn theme_kind(&self) -> ThemeKind {
        self.theme_kind
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The `limit` most recent log entries
    pub fn recent_logs(&self, limit: usize) -> Vec<LogEntry> {
        self.log_buffer.recent(limit)
    }

    /// Hint of the focused component, for the status bar
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            ComponentId::Parent => self.parent.focus_hint(),
            ComponentId::Child => self.parent.child().focus_hint(),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one high-level action to the component tree
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ParentIncrement => self.parent.increment(),
            Action::ChildIncrement => self.parent.child_mut().increment(),
            Action::ChildReport => self.parent.child().report(),
            Action::FocusNext => self.set_focus(self.focus.next_focus()),
            Action::FocusPrev => self.set_focus(self.focus.prev_focus()),
            Action::CycleTheme => self.set_theme(self.theme_kind.next()),
            Action::Quit => self.should_quit = true,
        }

        tracing::info!(
            parent = self.parent.value(),
            child = self.parent.child().value(),
            "Applied {}",
            action
        );
        self.announce_reports();
    }

    fn set_focus(&mut self, id: ComponentId) {
        if id.is_focusable() && id != self.focus {
            tracing::debug!(focus = id.label(), "Focus changed");
            self.focus = id;
            self.signal.notify();
        }
    }

    fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = kind.theme();
        self.signal.notify();
    }

    /// Show a toast for the latest value the child sent, if any
    fn announce_reports(&mut self) {
        if let Some(value) = self.pending_report.take() {
            if self.features.toasts {
                self.show_toast(format!("Sent {} to parent", value));
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        let toast = Toast::new(message);
        tracing::debug!(message = toast.message(), "Toast shown");
        self.toast = Some(toast);
        self.signal.notify();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Keys handled before the focused component sees them
    fn global_action(key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Char('p') => Some(Action::ParentIncrement),
            KeyCode::Char('c') => Some(Action::ChildIncrement),
            KeyCode::Char('s') => Some(Action::ChildReport),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        }
    }

    /// Route a key event: debounce, then global keys, then the focused component
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            self.input.release(key.code);
            return;
        }
        // Modified keys are chords, not held buttons; Ctrl+C must not be
        // swallowed as a repeat of `c`
        let chord = key.modifiers.contains(KeyModifiers::CONTROL);
        if !chord && !self.input.press(key.code) {
            return;
        }

        if let Some(action) = Self::global_action(&key) {
            self.apply(action);
            return;
        }

        let handled = match self.focus {
            ComponentId::Parent => self.parent.handle_key(key),
            ComponentId::Child => self.parent.child_mut().handle_key(key),
            _ => Handled::No,
        };
        if !handled.was_handled() {
            tracing::trace!(code = ?key.code, "Unhandled key");
        }
        self.announce_reports();
    }

    /// Route a mouse event (left clicks only)
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.features.mouse {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_click(mouse.column, mouse.row);
        }
    }

    /// Focus whichever panel was clicked and let it handle the click
    fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.screen_layout().parent;
        if !hit(area, column, row) {
            return;
        }

        let child_area = ParentCounter::layout(area).child;
        let target = if hit(child_area, column, row) {
            ComponentId::Child
        } else {
            ComponentId::Parent
        };
        self.set_focus(target);

        let handled = self.parent.handle_click(area, column, row);
        tracing::debug!(column, row, handled = handled.was_handled(), "Click");
        self.announce_reports();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Redraw bookkeeping
    // ─────────────────────────────────────────────────────────────────────────

    /// Layout of the last drawn frame
    pub fn screen_layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.frame_area, self.features.logs_panel)
    }

    /// Record the frame size; a change forces a redraw
    pub fn set_frame_area(&mut self, area: Rect) {
        if area != self.frame_area {
            self.frame_area = area;
            self.signal.notify();
        }
    }

    /// Whether anything changed since the last draw
    pub fn needs_redraw(&self) -> bool {
        self.last_drawn != Some(self.signal.generation())
    }

    pub fn mark_drawn(&mut self) {
        self.last_drawn = Some(self.signal.generation());
    }

    /// Periodic housekeeping: expire the toast, pick up new log lines
    pub fn on_tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
            self.signal.notify();
        }

        if self.features.logs_panel {
            let total = self.log_buffer.total();
            if total != self.seen_log_total {
                self.seen_log_total = total;
                self.signal.notify();
            }
        }
    }
}
