//! Prompt overlay for numeric input.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use sortscope_core::SortscopeStyle;

use super::center_rect;
use crate::prompt::PromptState;

/// Modal showing the prompt fields, the focused one with a cursor.
pub struct PromptView<'a> {
    prompt: &'a PromptState,
}

impl<'a> PromptView<'a> {
    /// Creates the modal for `prompt`.
    pub fn new(prompt: &'a PromptState) -> Self {
        Self { prompt }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = self
            .prompt
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.prompt.focus();
                let marker = if focused { "▸ " } else { "  " };
                let cursor = if focused { "▏" } else { "" };
                Line::from(vec![
                    Span::styled(marker, SortscopeStyle::key()),
                    Span::styled(format!("{:<5}", field.label), SortscopeStyle::dimmed()),
                    Span::styled(format!("{}{cursor}", field.text), SortscopeStyle::header()),
                ])
            })
            .collect();

        lines.push(Line::default());
        match self.prompt.error() {
            Some(error) => lines.push(Line::from(Span::styled(
                error.to_string(),
                SortscopeStyle::error(),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Enter apply · Tab next · Esc cancel",
                SortscopeStyle::muted(),
            ))),
        }
        lines
    }
}

impl Widget for PromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let modal = center_rect(48, lines.len() as u16 + 2, area);

        Clear.render(modal, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(SortscopeStyle::border_focused())
            .title(Span::styled(
                format!(" {} ", self.prompt.kind().title()),
                SortscopeStyle::header(),
            ));
        Paragraph::new(lines).block(block).render(modal, buf);
    }
}
