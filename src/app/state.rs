use anyhow::Result;
use serde::Serialize;
use std::time::Duration;

use tessera_core::{AppConfig, AutomatonError, LatticeSimulation, LineSimulation, Metrics};
use tessera_data::{Neighborhood, RunState};

/// Which automaton the application drives.
#[derive(clap::ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Line,
    Lattice,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Line => "line",
            Mode::Lattice => "lattice",
        }
    }
}

pub enum ActiveSimulation {
    Line(LineSimulation),
    Lattice(LatticeSimulation),
}

impl ActiveSimulation {
    pub fn build(mode: Mode, config: &AppConfig) -> Result<Self> {
        Ok(match mode {
            Mode::Line => Self::Line(LineSimulation::new(config.line.clone())?),
            Mode::Lattice => Self::Lattice(LatticeSimulation::new(config.lattice.clone())?),
        })
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Line(_) => Mode::Line,
            Self::Lattice(_) => Mode::Lattice,
        }
    }

    pub fn state(&self) -> RunState {
        match self {
            Self::Line(sim) => sim.state(),
            Self::Lattice(sim) => sim.state(),
        }
    }

    pub fn tick_count(&self) -> u64 {
        match self {
            Self::Line(sim) => sim.driver().tick_count(),
            Self::Lattice(sim) => sim.driver().tick_count(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        match self {
            Self::Line(sim) => sim.driver().metrics(),
            Self::Lattice(sim) => sim.driver().metrics(),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Line(sim) => sim.tick_interval(),
            Self::Lattice(sim) => sim.tick_interval(),
        }
    }

    pub fn toggle(&mut self) {
        match self {
            Self::Line(sim) => sim.toggle(),
            Self::Lattice(sim) => sim.toggle(),
        }
    }

    pub fn tick(&mut self) -> tessera_core::Result<Option<u64>> {
        match self {
            Self::Line(sim) => sim.tick(),
            Self::Lattice(sim) => sim.tick(),
        }
    }

    pub fn step_once(&mut self) -> tessera_core::Result<u64> {
        match self {
            Self::Line(sim) => sim.step_once(),
            Self::Lattice(sim) => sim.step_once(),
        }
    }

    pub fn reset(&mut self) -> tessera_core::Result<()> {
        match self {
            Self::Line(sim) => sim.reset(),
            Self::Lattice(sim) => sim.reset(),
        }
    }
}

pub struct App {
    pub running: bool,
    pub sim: ActiveSimulation,
    /// Cursor in the rule editor, a neighborhood ordinal.
    pub selected_rule: usize,
    /// Last rejected action, shown in the status bar until the next key.
    pub message: Option<String>,
}

impl App {
    pub fn new(mode: Mode, config: &AppConfig) -> Result<Self> {
        let sim = ActiveSimulation::build(mode, config)?;
        tracing::info!(mode = mode.label(), fingerprint = %config.fingerprint(), "App started");
        Ok(Self {
            running: true,
            sim,
            selected_rule: 0,
            message: None,
        })
    }

    pub fn mode(&self) -> Mode {
        self.sim.mode()
    }

    pub fn selected_neighborhood(&self) -> Option<Neighborhood> {
        Neighborhood::from_ordinal(self.selected_rule)
    }

    /// Advances the simulation if it is running.
    pub fn on_tick(&mut self) {
        if let Err(err) = self.sim.tick() {
            self.report(err);
        }
    }

    pub fn report(&mut self, err: AutomatonError) {
        tracing::warn!(error = %err, "Action rejected");
        self.message = Some(err.to_string());
    }
}
