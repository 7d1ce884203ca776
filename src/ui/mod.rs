//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Theme management
//! - Widget components (mascot art, styling, etc.)
//! - Screen rendering (home, goals, intake, progress, summary, etc.)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const MASCOT_FRAME_COUNT: usize = widgets::mascot::FRAMES.len();

pub use render::render;
pub use theme::Theme;
