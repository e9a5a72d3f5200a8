//! Sortscope colors and styles.
//!
//! All colors are constants; [`SortscopeStyle`] hands out ready-made styles.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// BAR COLORS
// ============================================================

/// Resting bar color
pub const BAR: Color = Color::Rgb(0, 200, 130); // #00C882

/// Bars touched by the latest step
pub const BAR_ACTIVE: Color = Color::Rgb(255, 200, 87); // #FFC857

/// Bars once the array is sorted
pub const BAR_DONE: Color = Color::Rgb(72, 202, 228); // #48CAE4

// ============================================================
// TEXT COLORS
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Secondary text
pub const TEXT_DIM: Color = Color::Rgb(130, 154, 177); // #829AB1

/// Background elements
pub const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

// ============================================================
// SEMANTIC COLORS
// ============================================================

/// Success messages
pub const SUCCESS: Color = Color::Rgb(0, 245, 212); // #00F5D4

/// Warnings and cancellations
pub const WARNING: Color = Color::Rgb(255, 200, 87); // #FFC857

/// Errors
pub const ERROR: Color = Color::Rgb(255, 107, 107); // #FF6B6B

/// Key hints
pub const ACCENT: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Borders
pub const BORDER: Color = Color::Rgb(27, 73, 101); // #1B4965

/// Focused borders
pub const BORDER_FOCUS: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Pre-configured styles for common elements.
pub struct SortscopeStyle;

impl SortscopeStyle {
    /// Resting bar
    #[inline]
    pub fn bar() -> Style {
        Style::default().fg(BAR)
    }

    /// Highlighted bar
    #[inline]
    pub fn bar_highlight() -> Style {
        Style::default().fg(BAR_ACTIVE)
    }

    /// Bar of a sorted array
    #[inline]
    pub fn bar_done() -> Style {
        Style::default().fg(BAR_DONE)
    }

    /// Value labels above bars
    #[inline]
    pub fn label() -> Style {
        Style::default().fg(TEXT_DIM)
    }

    /// Titles and headers
    #[inline]
    pub fn header() -> Style {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    }

    /// Key names in hints and help
    #[inline]
    pub fn key() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    /// Secondary text
    #[inline]
    pub fn dimmed() -> Style {
        Style::default().fg(TEXT_DIM)
    }

    /// Very dim text
    #[inline]
    pub fn muted() -> Style {
        Style::default().fg(TEXT_MUTED)
    }

    /// Success messages
    #[inline]
    pub fn success() -> Style {
        Style::default().fg(SUCCESS)
    }

    /// Warnings
    #[inline]
    pub fn warning() -> Style {
        Style::default().fg(WARNING)
    }

    /// Errors
    #[inline]
    pub fn error() -> Style {
        Style::default().fg(ERROR)
    }

    /// Borders
    #[inline]
    pub fn border() -> Style {
        Style::default().fg(BORDER)
    }

    /// Focused borders
    #[inline]
    pub fn border_focused() -> Style {
        Style::default().fg(BORDER_FOCUS)
    }
}
