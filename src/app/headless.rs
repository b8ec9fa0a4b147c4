//! Runs a simulation without a terminal and reports its time series as JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::app::state::{ActiveSimulation, Mode};
use tessera_core::AppConfig;
use tessera_data::{Distribution, PressureSample};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Line {
        rule_number: u64,
        final_distribution: Distribution,
        series: Vec<Distribution>,
    },
    Lattice {
        particles: usize,
        final_pressure: Option<PressureSample>,
        series: Vec<PressureSample>,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub mode: Mode,
    pub fingerprint: String,
    pub steps: u64,
    pub outcome: Outcome,
}

/// Builds the selected simulation and advances it `steps` times.
pub fn run_headless(mode: Mode, config: &AppConfig, steps: u64) -> Result<HeadlessReport> {
    let mut sim = ActiveSimulation::build(mode, config)?;
    let progress_every = (steps / 10).max(1);

    tracing::info!(mode = mode.label(), steps, "Headless run started");
    for i in 1..=steps {
        sim.step_once()
            .with_context(|| format!("step {i} of {steps} failed"))?;
        if i % progress_every == 0 {
            tracing::info!(step = i, steps, "Headless progress");
        }
    }

    let outcome = match &sim {
        ActiveSimulation::Line(sim) => Outcome::Line {
            rule_number: sim.rules().rule_number(),
            final_distribution: tessera_core::line::distribution(sim.current()),
            series: sim.series().as_slice().to_vec(),
        },
        ActiveSimulation::Lattice(sim) => Outcome::Lattice {
            particles: sim.grid().particle_count(),
            final_pressure: sim.series().latest().copied(),
            series: sim.series().as_slice().to_vec(),
        },
    };

    Ok(HeadlessReport {
        mode,
        fingerprint: config.fingerprint(),
        steps,
        outcome,
    })
}

/// Writes the report to `output`, or to stdout when absent.
pub fn write_report(report: &HeadlessReport, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
