//! Sortscope views.
//!
//! - [`MainView`](main_view::MainView) - header, bars, status line and hints
//! - [`HelpView`](help::HelpView) - key binding overlay
//! - [`PromptView`](prompt::PromptView) - numeric prompt overlay

pub mod help;
pub mod main_view;
pub mod prompt;

use ratatui::layout::Rect;

pub use help::HelpView;
pub use main_view::MainView;
pub use prompt::PromptView;

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
