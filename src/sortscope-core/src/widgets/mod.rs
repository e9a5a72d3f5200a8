//! Ratatui widgets for drawing arrays.
//!
//! - [`BarChart`](bars::BarChart) - one vertical bar per element

pub mod bars;

pub use bars::{BarChart, BarScale, bar_height, bar_width};
