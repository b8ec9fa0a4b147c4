use crate::app::state::{ActiveSimulation, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tessera_core::config::{LatticeConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
use tessera_data::{Neighborhood, Symbol};

const GRID_STEP: usize = 5;
const GAP_STEP: usize = 2;
const DENSITY_STEP: f64 = 0.05;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        let result = match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                Ok(())
            }
            KeyCode::Char(' ') => {
                self.sim.toggle();
                Ok(())
            }
            KeyCode::Char('r') => self.sim.reset(),
            KeyCode::Char('n') => self.sim.step_once().map(|_| ()),
            KeyCode::Char('R') => match &mut self.sim {
                ActiveSimulation::Lattice(sim) => sim.restart(),
                ActiveSimulation::Line(_) => Ok(()),
            },
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(-1),
            KeyCode::Up => {
                self.selected_rule = self.selected_rule.saturating_sub(1);
                Ok(())
            }
            KeyCode::Down => {
                self.selected_rule = (self.selected_rule + 1).min(Neighborhood::COUNT - 1);
                Ok(())
            }
            KeyCode::Left | KeyCode::Right => self.cycle_selected_rule(),
            KeyCode::Char('g') => self.adjust_lattice(|cfg| {
                cfg.grid_size = cfg.grid_size.saturating_sub(GRID_STEP).max(MIN_GRID_SIZE)
            }),
            KeyCode::Char('G') => self.adjust_lattice(|cfg| {
                cfg.grid_size = (cfg.grid_size + GRID_STEP).min(MAX_GRID_SIZE)
            }),
            KeyCode::Char('w') => self.adjust_lattice(|cfg| {
                cfg.wall_position = cfg.wall_position.saturating_sub(1)
            }),
            KeyCode::Char('W') => self.adjust_lattice(|cfg| {
                cfg.wall_position = (cfg.wall_position + 1).min(cfg.grid_size)
            }),
            KeyCode::Char('s') => self.adjust_lattice(|cfg| {
                cfg.wall_size = cfg.wall_size.saturating_sub(GAP_STEP).max(1)
            }),
            KeyCode::Char('S') => self.adjust_lattice(|cfg| {
                cfg.wall_size = (cfg.wall_size + GAP_STEP).min(cfg.grid_size)
            }),
            KeyCode::Char('d') => {
                self.adjust_lattice(|cfg| cfg.density = step_density(cfg.density, -1.0))
            }
            KeyCode::Char('D') => {
                self.adjust_lattice(|cfg| cfg.density = step_density(cfg.density, 1.0))
            }
            KeyCode::Char(c @ '0'..='2') => match Symbol::from_digit(c as u8 - b'0') {
                Some(symbol) => self.set_selected_rule(symbol),
                None => Ok(()),
            },
            _ => Ok(()),
        };

        if let Err(err) = result {
            self.report(err);
        }
    }

    fn change_speed(&mut self, delta: i32) -> tessera_core::Result<()> {
        let ActiveSimulation::Lattice(sim) = &mut self.sim else {
            return Ok(());
        };
        let next = sim.speed() as i32 + delta;
        if !(1..=tessera_core::config::MAX_SPEED as i32).contains(&next) {
            return Ok(());
        }
        sim.set_speed(next as u32)
    }

    /// Edits the lattice settings and reconfigures; rejected while running.
    fn adjust_lattice(
        &mut self,
        edit: impl FnOnce(&mut LatticeConfig),
    ) -> tessera_core::Result<()> {
        let ActiveSimulation::Lattice(sim) = &mut self.sim else {
            return Ok(());
        };
        let wall = *sim.wall();
        let mut cfg = LatticeConfig {
            wall_position: wall.wall_position,
            wall_size: wall.wall_size,
            ..sim.config().clone()
        };
        edit(&mut cfg);
        if cfg == *sim.config() {
            return Ok(());
        }
        sim.reconfigure(cfg)
    }

    fn set_selected_rule(&mut self, symbol: Symbol) -> tessera_core::Result<()> {
        let Some(neighborhood) = self.selected_neighborhood() else {
            return Ok(());
        };
        match &mut self.sim {
            ActiveSimulation::Line(sim) => sim.set_rule(neighborhood, symbol),
            ActiveSimulation::Lattice(_) => Ok(()),
        }
    }

    fn cycle_selected_rule(&mut self) -> tessera_core::Result<()> {
        let Some(neighborhood) = self.selected_neighborhood() else {
            return Ok(());
        };
        match &mut self.sim {
            ActiveSimulation::Line(sim) => {
                let next = sim.rules().get(neighborhood).cycle();
                sim.set_rule(neighborhood, next)
            }
            ActiveSimulation::Lattice(_) => Ok(()),
        }
    }
}

fn step_density(density: f64, sign: f64) -> f64 {
    let percent = ((density + sign * DENSITY_STEP) * 100.0).round();
    (percent / 100.0).clamp(0.0, 1.0)
}
