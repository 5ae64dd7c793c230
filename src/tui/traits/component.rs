//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for:
/// - Focus tracking (which component receives input)
/// - Log messages (which component changed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Parent counter panel (owns the child)
    Parent,
    /// Child counter panel
    Child,
    /// System logs panel (non-focusable)
    Logs,
    /// Title bar (non-focusable)
    TitleBar,
    /// Status bar (non-focusable)
    StatusBar,
    /// Toast notification (non-focusable)
    Toast,
}

impl ComponentId {
    /// Whether this component can receive focus
    pub fn is_focusable(&self) -> bool {
        matches!(self, ComponentId::Parent | ComponentId::Child)
    }

    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            _ => Self::Parent, // Non-focusable falls back to the root
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    ///
    /// With two focusable panels this mirrors `next_focus`, but callers
    /// should not rely on that.
    pub fn prev_focus(self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            _ => Self::Parent,
        }
    }

    /// Display name used in titles and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Child => "Child",
            Self::Logs => "System Logs",
            Self::TitleBar => "Title",
            Self::StatusBar => "Status",
            Self::Toast => "Toast",
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
/// Rendering stays pure: state changes happen in input handlers, never here.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Components that take input also implement `Interactive`.
///
/// # Example
///
/// ```ignore
/// impl Component for ChildCounter {
///     fn id(&self) -> ComponentId {
///         ComponentId::Child
///     }
///
///     fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
///         let focused = ctx.is_focused(self.id());
///         // ... render logic
///     }
/// }
/// ```
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, focus)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
