use crate::app::state::{ActiveSimulation, App};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use tessera_core::{LatticeSimulation, LineSimulation};
use tessera_tui::views::{
    DistributionChart, GridWidget, LineHistoryWidget, PressureSparklines, RuleTableWidget,
    StatusWidget,
};

const LINE_LEGEND: &str =
    " [Space] Start/Stop | [n] Step | [r] Reset | [↑↓] Select rule | [0-2 ←→] Edit rule | [q] Quit ";
const LATTICE_LEGEND: &str = concat!(
    " [Space] Start/Stop | [n] Step | [r] Reset | [R] Restart | [+/-] Speed |",
    " [g/G] Grid | [w/W] Wall | [s/S] Gap | [d/D] Density | [q] Quit ",
);

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(0),    // Simulation
            ])
            .split(f.area());

        let (details, legend) = match &self.sim {
            ActiveSimulation::Line(sim) => (
                format!(
                    "Cells: {} | Rule #{}",
                    sim.current().len(),
                    sim.rules().rule_number()
                ),
                LINE_LEGEND,
            ),
            ActiveSimulation::Lattice(sim) => {
                let wall = sim.wall();
                (
                    format!(
                        "Speed: {} | Grid: {} | Wall: y={} gap={} | Particles: {}",
                        sim.speed(),
                        wall.grid_size,
                        wall.wall_position,
                        wall.wall_size,
                        sim.grid().particle_count()
                    ),
                    LATTICE_LEGEND,
                )
            }
        };

        f.render_widget(
            StatusWidget {
                mode: self.mode().label(),
                state: self.sim.state(),
                tick: self.sim.tick_count(),
                step_micros: self.sim.metrics().last_step().as_micros() as u64,
                details,
                message: self.message.as_deref(),
                legend,
            },
            layout[0],
        );

        match &self.sim {
            ActiveSimulation::Line(sim) => self.draw_line(f, sim, layout[1]),
            ActiveSimulation::Lattice(sim) => draw_lattice(f, sim, layout[1]),
        }
    }

    fn draw_line(&self, f: &mut Frame, sim: &LineSimulation, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(18), Constraint::Min(0)])
            .split(area);

        f.render_widget(
            RuleTableWidget {
                rules: sim.rules(),
                selected: self.selected_rule,
                editable: !sim.is_running(),
            },
            columns[0],
        );

        let rows = sim.history().capacity().max(sim.history().len());
        let history_height = bordered_length(rows, area.height);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(history_height), Constraint::Min(0)])
            .split(columns[1]);

        f.render_widget(LineHistoryWidget::new(sim.history()), right[0]);
        f.render_widget(
            DistributionChart {
                samples: sim.series().as_slice(),
            },
            right[1],
        );
    }
}

fn draw_lattice(f: &mut Frame, sim: &LatticeSimulation, area: Rect) {
    let grid_width = bordered_length(sim.grid().size(), area.width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(grid_width), Constraint::Min(0)])
        .split(area);

    f.render_widget(GridWidget::new(sim.grid(), " Lattice "), columns[0]);
    f.render_widget(
        PressureSparklines {
            samples: sim.series().as_slice(),
        },
        columns[1],
    );
}

/// Content length plus a one-cell border on each side, capped at `available`.
fn bordered_length(content: usize, available: u16) -> u16 {
    let inner = u16::try_from(content).unwrap_or(u16::MAX);
    inner.saturating_add(2).min(available)
}

#[cfg(test)]
mod tests {
    use super::bordered_length;

    #[test]
    fn test_bordered_length_adds_border() {
        assert_eq!(bordered_length(10, 40), 12);
        assert_eq!(bordered_length(0, 40), 2);
    }

    #[test]
    fn test_bordered_length_caps_at_area() {
        assert_eq!(bordered_length(100, 30), 30);
        assert_eq!(bordered_length(70_000, u16::MAX), u16::MAX);
        assert_eq!(bordered_length(5, 0), 0);
    }
}
