use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};
use tessera_core::history::History;
use tessera_core::Line;
use tessera_data::Symbol;

/// Recent generations, oldest at the top, one cell per column.
pub struct LineHistoryWidget<'a> {
    history: &'a History<Line>,
}

impl<'a> LineHistoryWidget<'a> {
    pub fn new(history: &'a History<Line>) -> Self {
        Self { history }
    }

    pub fn color_for_symbol(symbol: Symbol) -> Color {
        match symbol {
            Symbol::Zero => Color::Red,
            Symbol::One => Color::Green,
            Symbol::Two => Color::Blue,
        }
    }
}

impl<'a> Widget for LineHistoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Simulation ");
        let inner = block.inner(area);
        block.render(area, buf);

        // Newest rows win when the window is taller than the area.
        let skip = self.history.len().saturating_sub(inner.height as usize);
        for (row, line) in self.history.iter().skip(skip).enumerate() {
            let y = inner.y + row as u16;
            for (col, symbol) in line.iter().take(inner.width as usize).enumerate() {
                let cell = &mut buf[(inner.x + col as u16, y)];
                cell.set_symbol("●");
                cell.set_fg(Self::color_for_symbol(*symbol));
            }
        }
    }
}
