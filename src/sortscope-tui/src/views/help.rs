//! Help overlay listing the key bindings.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use sortscope_core::SortscopeStyle;

use super::center_rect;
use crate::actions::ActionMapper;

/// Width of the key column.
const KEY_COLUMN: usize = 14;

/// Modal listing every global binding.
pub struct HelpView<'a> {
    mapper: &'a ActionMapper,
}

impl<'a> HelpView<'a> {
    /// Lists the bindings of `mapper`.
    pub fn new(mapper: &'a ActionMapper) -> Self {
        Self { mapper }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        self.mapper
            .help_rows()
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!(" {keys:<KEY_COLUMN$}"), SortscopeStyle::key()),
                    Span::styled(description, SortscopeStyle::dimmed()),
                ])
            })
            .collect()
    }
}

impl Widget for HelpView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let modal = center_rect(52, height, area);

        Clear.render(modal, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(SortscopeStyle::border_focused())
            .title(Span::styled(" Keys ", SortscopeStyle::header()))
            .title_bottom(Span::styled(" Esc to close ", SortscopeStyle::muted()));
        Paragraph::new(lines).block(block).render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_bindings() {
        let mapper = ActionMapper::default_bindings();
        let area = Rect::new(0, 0, 80, 40);
        let mut buf = Buffer::empty(area);
        HelpView::new(&mapper).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Bubble sort"));
        assert!(text.contains("Enter size (1-1000)"));
        assert!(text.contains("Keys"));
    }
}
