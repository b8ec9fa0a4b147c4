use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Sparkline, Widget};
use tessera_data::{Distribution, PressureSample};

const SYMBOL_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

/// Share of each symbol per generation, in percent.
pub struct DistributionChart<'a> {
    pub samples: &'a [Distribution],
}

impl<'a> DistributionChart<'a> {
    /// One `(generation, percent)` series per symbol.
    pub fn series(&self) -> [Vec<(f64, f64)>; 3] {
        let mut series: [Vec<(f64, f64)>; 3] = Default::default();
        for (generation, sample) in self.samples.iter().enumerate() {
            for (points, share) in series.iter_mut().zip(sample.as_array()) {
                points.push((generation as f64, share * 100.0));
            }
        }
        series
    }
}

impl<'a> Widget for DistributionChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let series = self.series();
        let datasets = series
            .iter()
            .zip(SYMBOL_COLORS)
            .enumerate()
            .map(|(digit, (points, color))| {
                Dataset::default()
                    .name(format!("{digit}"))
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color))
                    .data(points)
            })
            .collect::<Vec<_>>();

        let last = self.samples.len().saturating_sub(1).max(1) as f64;
        Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(" Distribution "))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, last])
                    .labels(["0".to_string(), format!("{last:.0}")]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, 100.0])
                    .labels(["0%", "50%", "100%"]),
            )
            .render(area, buf);
    }
}

/// Upper and lower wall pressure, newest samples on the right.
pub struct PressureSparklines<'a> {
    pub samples: &'a [PressureSample],
}

impl<'a> PressureSparklines<'a> {
    fn percent(values: impl Iterator<Item = f64>) -> Vec<u64> {
        values.map(|v| (v * 100.0).round().max(0.0) as u64).collect()
    }
}

impl<'a> Widget for PressureSparklines<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        // Sparklines draw from the left, so keep only what fits.
        let width = area.width.saturating_sub(2) as usize;
        let start = self.samples.len().saturating_sub(width);
        let window = &self.samples[start..];

        let upper = Self::percent(window.iter().map(|s| s.upper));
        let lower = Self::percent(window.iter().map(|s| s.lower));
        let latest = window.last().copied().unwrap_or_default();

        Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Upper {:.1}% ", latest.upper * 100.0)),
            )
            .data(&upper[..])
            .max(100)
            .style(Style::default().fg(Color::Yellow))
            .render(layout[0], buf);

        Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Lower {:.1}% ", latest.lower * 100.0)),
            )
            .data(&lower[..])
            .max(100)
            .style(Style::default().fg(Color::Cyan))
            .render(layout[1], buf);
    }
}
