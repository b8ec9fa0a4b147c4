use super::line::LineHistoryWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use tessera_core::RuleTable;
use tessera_data::Neighborhood;

/// The 27 rule entries as `lcr: v`, keeping the selected row in view.
pub struct RuleTableWidget<'a> {
    pub rules: &'a RuleTable,
    pub selected: usize,
    pub editable: bool,
}

impl<'a> RuleTableWidget<'a> {
    /// First row to draw so that `selected` stays visible in `height` rows.
    pub fn scroll_offset(selected: usize, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        let selected = selected.min(Neighborhood::COUNT - 1);
        let max_offset = Neighborhood::COUNT.saturating_sub(height);
        selected.saturating_sub(height - 1).min(max_offset)
    }
}

impl<'a> Widget for RuleTableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.editable {
            format!(" Rules #{} ", self.rules.rule_number())
        } else {
            format!(" Rules #{} (locked) ", self.rules.rule_number())
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let height = block.inner(area).height as usize;
        let offset = Self::scroll_offset(self.selected, height);

        let lines = self
            .rules
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(row, (neighborhood, output))| {
                let marker = if row == self.selected { "> " } else { "  " };
                let line = Line::from(vec![
                    Span::raw(format!("{marker}{neighborhood}: ")),
                    Span::styled(
                        output.to_string(),
                        Style::default().fg(LineHistoryWidget::color_for_symbol(output)),
                    ),
                ]);
                if row == self.selected {
                    line.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    line
                }
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_selection_visible() {
        assert_eq!(RuleTableWidget::scroll_offset(0, 10), 0);
        assert_eq!(RuleTableWidget::scroll_offset(9, 10), 0);
        assert_eq!(RuleTableWidget::scroll_offset(10, 10), 1);
        assert_eq!(RuleTableWidget::scroll_offset(26, 10), 17);
        assert_eq!(RuleTableWidget::scroll_offset(26, 40), 0);
        assert_eq!(RuleTableWidget::scroll_offset(5, 0), 0);
    }
}
