// Components module - reusable UI building blocks
//
// Counter components own state and take input:
// - Parent counter: its own counter plus the nested child
// - Child counter: its own counter and the callback into the parent
//
// Shell components are built fresh each frame from app state:
// - Title bar: App name, demo indicator, theme
// - Status bar: Key hints
// - Logs panel: System log entries
// - Toast: Transient notification overlay

pub mod button;
pub mod child_counter;
pub mod logs_panel;
pub mod parent_counter;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use parent_counter::{ParentCounter, PARENT_MIN_HEIGHT};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use toast::Toast;
