use super::seeded_rng;
use crate::config::LineConfig;
use crate::driver::Driver;
use crate::error::{AutomatonError, Result};
use crate::history::{History, TimeSeries};
use crate::line::{Line, LineEngine, MIN_LINE_LEN};
use crate::rules::RuleTable;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tessera_data::{Distribution, Neighborhood, RunState, Symbol};

/// The one-dimensional simulator: random initial line, editable rules,
/// bounded generation history and a distribution series.
pub struct LineSimulation {
    driver: Driver<LineEngine>,
    config: LineConfig,
    rng: ChaCha8Rng,
}

impl LineSimulation {
    pub fn new(config: LineConfig) -> Result<Self> {
        if config.size < MIN_LINE_LEN {
            return Err(AutomatonError::invalid_config(format!(
                "line size {} is shorter than {MIN_LINE_LEN}",
                config.size
            )));
        }
        let rules = match config.rule {
            Some(number) => RuleTable::from_rule_number(number)?,
            None => RuleTable::default(),
        };
        let mut rng = seeded_rng(config.seed, "line");
        let line = Line::random(config.size, &mut rng);
        let driver = Driver::new(LineEngine::new(rules), line, config.history, true);
        Ok(Self { driver, config, rng })
    }

    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.driver.engine().rules
    }

    pub fn current(&self) -> &Line {
        self.driver.current()
    }

    pub fn history(&self) -> &History<Line> {
        self.driver.history()
    }

    pub fn series(&self) -> &TimeSeries<Distribution> {
        self.driver.series()
    }

    pub fn driver(&self) -> &Driver<LineEngine> {
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

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    fn ensure_idle(&self, action: &str) -> Result<()> {
        if self.is_running() {
            tracing::warn!(action, "Rejected edit while running");
            return Err(AutomatonError::run_in_progress(action.to_string()));
        }
        Ok(())
    }

    /// Changes one rule output. Only allowed while idle.
    pub fn set_rule(&mut self, neighborhood: Neighborhood, output: Symbol) -> Result<()> {
        self.ensure_idle("set rule")?;
        self.driver.engine_mut().rules.set(neighborhood, output);
        Ok(())
    }

    /// New random line, all rules back to zero, history and series cleared.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_idle("reset")?;
        self.driver.engine_mut().rules.reset();
        let line = Line::random(self.config.size, &mut self.rng);
        self.driver.reset(line, true);
        tracing::info!(size = self.config.size, "Line simulation reset");
        Ok(())
    }
}
