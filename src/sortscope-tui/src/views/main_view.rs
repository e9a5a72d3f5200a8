//! Main screen: header, bar chart, status line and key hints.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use sortscope_core::{BarChart, Settings, SortscopeStyle};

use crate::app::{AppState, StatusLevel};

/// Key hints shown on the bottom row.
const HINTS: &[(&str, &str)] = &[
    ("b", "bubble"),
    ("s", "selection"),
    ("m", "merge"),
    ("x", "stop"),
    ("n", "new"),
    ("+/-", "size"),
    ("[/]", "delay"),
    ("o", "order"),
    ("?", "help"),
    ("q", "quit"),
];

/// Full-screen view of the array and its controls.
pub struct MainView<'a> {
    values: &'a [i32],
    settings: &'a Settings,
    state: &'a AppState,
    sorted: bool,
}

impl<'a> MainView<'a> {
    /// Creates the view over a snapshot of the array.
    ///
    /// The sorted flag starts off; set it when the snapshot is known to be
    /// in order.
    pub fn new(values: &'a [i32], settings: &'a Settings, state: &'a AppState) -> Self {
        Self {
            values,
            settings,
            state,
            sorted: false,
        }
    }

    /// Draws bars in the "done" color.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    fn header_line(&self) -> Line<'static> {
        let dim = SortscopeStyle::dimmed();
        let value = SortscopeStyle::header();
        let activity = match &self.state.active {
            Some(active) => Span::styled(
                format!("{} · step {}", active.algorithm.display_name(), active.steps),
                SortscopeStyle::warning(),
            ),
            None => Span::styled("idle", SortscopeStyle::muted()),
        };

        Line::from(vec![
            Span::styled(" Sortscope ", SortscopeStyle::key()),
            Span::styled("│ size ", dim),
            Span::styled(self.values.len().to_string(), value),
            Span::styled(" │ range ", dim),
            Span::styled(format!("{}..{}", self.settings.min, self.settings.max), value),
            Span::styled(" │ delay ", dim),
            Span::styled(format!("{} ms", self.settings.delay_ms), value),
            Span::styled(" │ order ", dim),
            Span::styled(self.settings.order.as_str(), value),
            Span::styled(" │ scale ", dim),
            Span::styled(self.state.scale.as_str(), value),
            Span::styled(" │ ", dim),
            activity,
        ])
    }

    fn status_line(&self) -> Line<'static> {
        match &self.state.status {
            Some(status) => {
                let style = match status.level {
                    StatusLevel::Info => SortscopeStyle::dimmed(),
                    StatusLevel::Success => SortscopeStyle::success(),
                    StatusLevel::Warning => SortscopeStyle::warning(),
                    StatusLevel::Error => SortscopeStyle::error(),
                };
                Line::from(Span::styled(format!(" {}", status.text), style))
            }
            None => Line::from(Span::styled(
                " Press b, s or m to start sorting",
                SortscopeStyle::muted(),
            )),
        }
    }

    fn hints_line() -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", SortscopeStyle::muted()));
            }
            spans.push(Span::styled(*key, SortscopeStyle::key()));
            spans.push(Span::styled(format!(" {label}"), SortscopeStyle::dimmed()));
        }
        Line::from(spans)
    }

    /// Value that fills the chart height in fit mode.
    fn peak(&self) -> i32 {
        let observed = self.values.iter().copied().max().unwrap_or(0);
        observed.max(self.settings.max)
    }
}

impl Widget for MainView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, chart, status, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(self.header_line()).render(header, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(SortscopeStyle::border())
            .title(Span::styled(" Array ", SortscopeStyle::header()));
        let inner = block.inner(chart);
        block.render(chart, buf);

        let (first, second) = self.state.highlight;
        let mut bars = BarChart::new(self.values)
            .with_scale(self.state.scale)
            .with_peak(self.peak())
            .with_highlight(first, second);
        if self.sorted {
            bars = bars.with_bar_style(SortscopeStyle::bar_done());
        }
        bars.render(inner, buf);

        Paragraph::new(self.status_line()).render(status, buf);
        Paragraph::new(Self::hints_line()).render(hints, buf);
    }
}
