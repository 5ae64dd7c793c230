// Views module - screen-level rendering logic
//
// There is a single screen: title bar, the parent panel (with the child
// nested inside), an optional logs panel, and the status bar. Each shell
// piece is built from app state and drawn through the Component trait.

use super::app::App;
use super::components::{LogsPanel, StatusBar, TitleBar};
use super::traits::{Component, RenderContext};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called whenever app state changed
///
/// Rendering never mutates state; the caller records the frame size first so
/// hit-testing uses the same layout.
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let ctx = RenderContext::new(theme, app.focus());
    let frame_area = f.area();

    // Theme background across the whole frame
    f.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame_area);

    let layout = app.screen_layout();

    TitleBar {
        theme: app.theme_kind(),
        demo: app.demo_mode(),
    }
    .render(f, layout.title, &ctx);

    app.parent().render(f, layout.parent, &ctx);

    if let Some(area) = layout.logs {
        LogsPanel::new(app.recent_logs(LogsPanel::capacity(area.height))).render(f, area, &ctx);
    }

    StatusBar {
        focus_hint: app.focus_hint(),
    }
    .render(f, layout.status, &ctx);

    // Toast on top of everything
    if let Some(toast) = app.toast() {
        toast.render(f, frame_area, &ctx);
    }
}
