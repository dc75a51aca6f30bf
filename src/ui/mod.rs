//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod auth;
pub mod detail;
pub mod grid;
pub mod renderer;
pub mod screen;
pub mod search;
pub mod theme;

use ratatui::layout::Rect;

pub use grid::MediaGrid;
pub use screen::draw;
pub use renderer::{render, Card, CardRenderer, CardStyle, CompactRenderer, ItemRenderer};
pub use theme::Theme;

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
