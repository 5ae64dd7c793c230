//! Component trait system for TUI architecture
//!
//! This module defines the contracts that UI components implement.
//! Instead of App knowing how to render and drive every panel,
//! components declare their own capabilities through traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │     (orchestrator: routes input, owns focus and theme)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌─────────────┐
//!                       │   Parent    │  owns
//!                       │   Counter   │───────┐
//!                       └─────────────┘       ▼
//!                                      ┌─────────────┐
//!                                      │    Child    │
//!                                      │   Counter   │
//!                                      └─────────────┘
//!                     Implements traits:
//!                 Component, Interactive
//! ```
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle keyboard and mouse input

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
