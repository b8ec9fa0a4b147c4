use super::seeded_rng;
use crate::config::{LatticeConfig, MAX_SPEED};
use crate::driver::Driver;
use crate::error::{AutomatonError, Result};
use crate::history::TimeSeries;
use crate::lattice::init::{validate_density, validate_wall};
use crate::lattice::{initialize, Grid, LatticeEngine};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tessera_data::{PressureSample, RunState, WallConfig};

/// The lattice-gas simulator: walled grid, seeded particles and a pressure
/// series sampled after every tick.
pub struct LatticeSimulation {
    driver: Driver<LatticeEngine>,
    config: LatticeConfig,
    rng: ChaCha8Rng,
}

fn validate_speed(speed: u32) -> Result<()> {
    if !(1..=MAX_SPEED).contains(&speed) {
        return Err(AutomatonError::invalid_config(format!(
            "speed {speed} outside [1, {MAX_SPEED}]"
        )));
    }
    Ok(())
}

impl LatticeSimulation {
    pub fn new(config: LatticeConfig) -> Result<Self> {
        validate_speed(config.speed)?;
        let wall = config.wall();
        let mut rng = seeded_rng(config.seed, "lattice");
        let grid = initialize(&wall, config.density, &mut rng)?;
        let driver = Driver::new(LatticeEngine::new(wall), grid, 1, false);
        Ok(Self {
            driver,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    pub fn wall(&self) -> &WallConfig {
        &self.driver.engine().wall
    }

    pub fn grid(&self) -> &Grid {
        self.driver.current()
    }

    pub fn series(&self) -> &TimeSeries<PressureSample> {
        self.driver.series()
    }

    pub fn driver(&self) -> &Driver<LatticeEngine> {
        &self.driver
    }

    pub fn state(&self) -> RunState {
        self.driver.state()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn toggle(&mut self) {
        self.driver.toggle();
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn tick(&mut self) -> Result<Option<u64>> {
        self.driver.tick()
    }

    pub fn step_once(&mut self) -> Result<u64> {
        self.driver.step_once()
    }

    pub fn speed(&self) -> u32 {
        self.config.speed
    }

    /// Allowed while running; takes effect on the next scheduled tick.
    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        validate_speed(speed)?;
        self.config.speed = speed;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Stops and reseeds the grid; clears the pressure series.
    pub fn reset(&mut self) -> Result<()> {
        let wall = self.driver.engine().wall;
        let grid = initialize(&wall, self.config.density, &mut self.rng)?;
        self.driver.reset(grid, false);
        tracing::info!(
            grid_size = wall.grid_size,
            wall_position = wall.wall_position,
            wall_size = wall.wall_size,
            density = self.config.density,
            "Lattice simulation reset"
        );
        Ok(())
    }

    /// Reset followed by start.
    pub fn restart(&mut self) -> Result<()> {
        self.reset()?;
        self.driver.start();
        Ok(())
    }

    /// Applies new geometry, density and speed, then resets. Only allowed while idle.
    ///
    /// The configuration is validated before anything changes.
    pub fn reconfigure(&mut self, config: LatticeConfig) -> Result<()> {
        if self.is_running() {
            tracing::warn!("Rejected reconfigure while running");
            return Err(AutomatonError::run_in_progress("reconfigure"));
        }
        validate_speed(config.speed)?;
        validate_density(config.density)?;
        let wall = config.wall();
        validate_wall(&wall)?;

        self.driver.engine_mut().wall = wall;
        self.config = LatticeConfig {
            seed: self.config.seed,
            ..config
        };
        self.reset()
    }
}
