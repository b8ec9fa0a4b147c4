//! Snapshot-owning driver shared by both engines.
//!
//! An [`Automaton`] is a pure step function plus an aggregator. The
//! [`Driver`] holds the only mutable reference to the current snapshot and
//! swaps it after each successful step, pushing the new snapshot into the
//! history window and its aggregate into the time series.

use crate::error::Result;
use crate::history::{History, TimeSeries};
use crate::metrics::Metrics;
use std::time::Instant;
use tessera_data::RunState;

/// A pure, immutable-snapshot step function and the aggregate derived from it.
pub trait Automaton {
    type Snapshot: Clone;
    type Sample: Clone;

    /// Short name used in log lines.
    const LABEL: &'static str;

    fn advance(&self, current: &Self::Snapshot) -> Result<Self::Snapshot>;

    fn observe(&self, snapshot: &Self::Snapshot) -> Self::Sample;
}

pub struct Driver<A: Automaton> {
    engine: A,
    current: A::Snapshot,
    history: History<A::Snapshot>,
    series: TimeSeries<A::Sample>,
    state: RunState,
    tick: u64,
    metrics: Metrics,
}

impl<A: Automaton> Driver<A> {
    /// Starts idle with `initial` as the current snapshot.
    ///
    /// When `record_initial` is set the aggregate of `initial` opens the series.
    pub fn new(
        engine: A,
        initial: A::Snapshot,
        history_capacity: usize,
        record_initial: bool,
    ) -> Self {
        let mut driver = Self {
            engine,
            current: initial.clone(),
            history: History::new(history_capacity),
            series: TimeSeries::new(),
            state: RunState::Idle,
            tick: 0,
            metrics: Metrics::new(),
        };
        driver.reset(initial, record_initial);
        driver
    }

    pub fn engine(&self) -> &A {
        &self.engine
    }

    /// Mutable engine access for configuration edits between runs.
    pub fn engine_mut(&mut self) -> &mut A {
        &mut self.engine
    }

    pub fn current(&self) -> &A::Snapshot {
        &self.current
    }

    pub fn history(&self) -> &History<A::Snapshot> {
        &self.history
    }

    pub fn series(&self) -> &TimeSeries<A::Sample> {
        &self.series
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Number of steps since the last reset.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn start(&mut self) {
        if !self.is_running() {
            tracing::info!(automaton = A::LABEL, tick = self.tick, "Simulation started");
        }
        self.state = RunState::Running;
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            tracing::info!(automaton = A::LABEL, tick = self.tick, "Simulation stopped");
        }
        self.state = RunState::Idle;
    }

    pub fn toggle(&mut self) {
        match self.state {
            RunState::Idle => self.start(),
            RunState::Running => self.stop(),
        }
    }

    /// Scheduled tick: steps only while running.
    ///
    /// Returns the new tick number, or `None` when idle.
    pub fn tick(&mut self) -> Result<Option<u64>> {
        if !self.is_running() {
            return Ok(None);
        }
        self.step_once().map(Some)
    }

    /// Advances exactly once regardless of the run state.
    ///
    /// On error the snapshot, history and series are left untouched.
    pub fn step_once(&mut self) -> Result<u64> {
        let started = Instant::now();
        let next = match self.engine.advance(&self.current) {
            Ok(next) => next,
            Err(e) => {
                self.metrics.increment_counter("step_failed");
                tracing::warn!(automaton = A::LABEL, tick = self.tick, error = %e, "Step failed");
                return Err(e);
            }
        };
        let sample = self.engine.observe(&next);
        self.history.push(next.clone());
        self.current = next;
        self.series.push(sample);
        self.tick += 1;
        self.metrics.record_tick(A::LABEL, started.elapsed());
        Ok(self.tick)
    }

    /// Stops, discards history and series, and installs `snapshot`.
    pub fn reset(&mut self, snapshot: A::Snapshot, record_initial: bool) {
        self.state = RunState::Idle;
        self.history.clear();
        self.series.clear();
        self.tick = 0;
        if record_initial {
            self.series.push(self.engine.observe(&snapshot));
        }
        self.history.push(snapshot.clone());
        self.current = snapshot;
        self.metrics.increment_counter("reset");
        tracing::debug!(automaton = A::LABEL, "Driver reset");
    }
}
