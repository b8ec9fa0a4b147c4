use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use tessera_data::RunState;

pub struct StatusWidget<'a> {
    pub mode: &'a str,
    pub state: RunState,
    pub tick: u64,
    pub step_micros: u64,
    /// Mode-specific facts, e.g. speed and wall geometry.
    pub details: String,
    pub message: Option<&'a str>,
    pub legend: &'a str,
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (state_label, state_color) = match self.state {
            RunState::Running => ("Running", Color::Green),
            RunState::Idle => ("Idle", Color::Yellow),
        };

        let header = vec![
            Span::styled(
                format!(" {} ", self.mode),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            Span::styled(state_label, Style::default().fg(state_color)),
            Span::raw(format!(
                " | Tick: {} | Step: {}µs | {}",
                self.tick, self.step_micros, self.details
            )),
        ];
        Paragraph::new(Line::from(header)).render(rows[0], buf);

        if let Some(message) = self.message {
            Paragraph::new(format!(" {message}"))
                .style(Style::default().fg(Color::Red))
                .render(rows[1], buf);
        }

        Paragraph::new(self.legend)
            .style(Style::default().fg(Color::DarkGray))
            .render(rows[2], buf);
    }
}
