//! Vertical bar rendering of an array snapshot.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;
use crate::style::SortscopeStyle;

/// Glyph used to fill bar cells.
const BAR_GLYPH: char = '█';

/// How values map to bar heights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarScale {
    /// One cell per unit of value; taller bars are clipped at the top edge.
    Absolute,
    /// Heights scaled so the largest value fills the canvas.
    #[default]
    Fit,
}

impl BarScale {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fit => "fit",
        }
    }
}

impl std::fmt::Display for BarScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BarScale {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" | "abs" => Ok(Self::Absolute),
            "fit" => Ok(Self::Fit),
            _ => Err(ParseNameError {
                kind: "scale",
                value: s.to_string(),
                expected: "fit, absolute",
            }),
        }
    }
}

/// Width of one bar slot: `max(1, width / len)`.
///
/// An empty array gets slots of width 1.
pub fn bar_width(width: u16, len: usize) -> u16 {
    if len == 0 {
        return 1;
    }
    let slot = usize::from(width) / len;
    slot.max(1) as u16
}

/// Height in cells of a bar for `value` on a canvas `height` cells tall.
///
/// `peak` is the value that fills the canvas under [`BarScale::Fit`].
/// Negative values and a non-positive peak give empty bars.
pub fn bar_height(value: i32, scale: BarScale, height: u16, peak: i32) -> u16 {
    if value <= 0 || height == 0 {
        return 0;
    }
    match scale {
        BarScale::Absolute => value.min(i32::from(height)) as u16,
        BarScale::Fit => {
            if peak <= 0 {
                return 0;
            }
            let value = i64::from(value.min(peak));
            let scaled = (value * i64::from(height) + i64::from(peak) / 2) / i64::from(peak);
            scaled.clamp(1, i64::from(height)) as u16
        }
    }
}

/// Draws one bar per element, bottom aligned.
///
/// Bars at most two cells wide touch; wider bars leave their last column
/// empty. Value labels are drawn above bars that are wide enough for them.
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    values: &'a [i32],
    scale: BarScale,
    peak: Option<i32>,
    highlight: [Option<usize>; 2],
    labels: bool,
    bar_style: Style,
    highlight_style: Style,
    label_style: Style,
}

impl<'a> BarChart<'a> {
    /// Creates a chart for `values`.
    pub fn new(values: &'a [i32]) -> Self {
        Self {
            values,
            scale: BarScale::default(),
            peak: None,
            highlight: [None, None],
            labels: true,
            bar_style: SortscopeStyle::bar(),
            highlight_style: SortscopeStyle::bar_highlight(),
            label_style: SortscopeStyle::label(),
        }
    }

    /// Sets the scaling mode.
    pub fn with_scale(mut self, scale: BarScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the value that fills the canvas under [`BarScale::Fit`].
    ///
    /// Defaults to the largest element.
    pub fn with_peak(mut self, peak: i32) -> Self {
        self.peak = Some(peak);
        self
    }

    /// Highlights up to two bars.
    pub fn with_highlight(mut self, first: Option<usize>, second: Option<usize>) -> Self {
        self.highlight = [first, second];
        self
    }

    /// Enables or disables value labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Overrides the bar style.
    pub fn with_bar_style(mut self, style: Style) -> Self {
        self.bar_style = style;
        self
    }

    fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.contains(&Some(index))
    }

    fn peak(&self) -> i32 {
        self.peak
            .unwrap_or_else(|| self.values.iter().copied().max().unwrap_or(0))
    }
}

impl Widget for BarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.values.is_empty() {
            return;
        }

        let slot = bar_width(area.width, self.values.len());
        let fill = if slot >= 3 { slot - 1 } else { slot };
        let label_width = self
            .values
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0);
        let labels = self.labels && usize::from(fill) >= label_width && area.height > 1;
        // Fit keeps a row free for labels; Absolute is literal and clips instead.
        let canvas = match (labels, self.scale) {
            (true, BarScale::Fit) => area.height - 1,
            _ => area.height,
        };
        let peak = self.peak();
        let bottom = area.bottom() - 1;

        for (index, &value) in self.values.iter().enumerate() {
            let offset = index * usize::from(slot);
            if offset >= usize::from(area.width) {
                break;
            }
            let x0 = area.x + offset as u16;
            let x1 = x0.saturating_add(fill).min(area.right());
            let height = bar_height(value, self.scale, canvas, peak);
            let style = if self.is_highlighted(index) {
                self.highlight_style
            } else {
                self.bar_style
            };

            for row in 0..height {
                let y = bottom - row;
                for x in x0..x1 {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(BAR_GLYPH).set_style(style);
                    }
                }
            }

            if labels && height < area.height {
                let y = bottom - height;
                let text = value.to_string();
                let pad = (x1 - x0).saturating_sub(text.len() as u16) / 2;
                buf.set_string(x0 + pad, y, &text, self.label_style);
            }
        }
    }
}
