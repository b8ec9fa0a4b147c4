use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};
use tessera_core::Grid;
use tessera_data::GridCell;

const PARTICLE_COLOR: Color = Color::Rgb(115, 70, 228);
const EMPTY_COLOR: Color = Color::Rgb(90, 82, 122);

/// Lattice view: obstacles as blocks, occupied sites as dots.
///
/// Grids larger than the area are clipped at the right and bottom.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    title: String,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, title: impl Into<String>) -> Self {
        Self {
            grid,
            title: title.into(),
        }
    }

    pub fn glyph(cell: &GridCell) -> (&'static str, Color) {
        if cell.obstacle {
            ("█", Color::Gray)
        } else if cell.is_occupied() {
            ("•", PARTICLE_COLOR)
        } else {
            ("·", EMPTY_COLOR)
        }
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let size = self.grid.size();
        let cols = size.min(inner.width as usize);
        let rows = size.min(inner.height as usize);
        for y in 0..rows {
            for x in 0..cols {
                let (symbol, color) = Self::glyph(self.grid.get(x, y));
                let cell = &mut buf[(inner.x + x as u16, inner.y + y as u16)];
                cell.set_symbol(symbol);
                cell.set_fg(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_data::Direction;

    #[test]
    fn test_glyphs() {
        assert_eq!(GridWidget::glyph(&GridCell::OBSTACLE).0, "█");
        assert_eq!(GridWidget::glyph(&GridCell::EMPTY).0, "·");
        let occupied = GridCell::EMPTY.with(Direction::Left, true);
        assert_eq!(GridWidget::glyph(&occupied), ("•", PARTICLE_COLOR));
    }
}
