//! Configuration for both simulators.
//!
//! Maps to `config.toml`. Every section and field is optional in the file;
//! anything left out takes the value from the `Default` impl.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [line]
//! size = 120
//! tick_ms = 1000
//! history = 10
//! rule = 0
//!
//! [lattice]
//! grid_size = 50
//! wall_position = 25
//! wall_size = 25
//! density = 0.5
//! speed = 5
//! base_tick_ms = 500
//! seed = 42
//! ```

use crate::line::MIN_LINE_LEN;
use crate::rules::RULE_SPACE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tessera_data::WallConfig;

pub const MIN_GRID_SIZE: usize = 20;
pub const MAX_GRID_SIZE: usize = 150;
pub const MAX_SPEED: u32 = 5;

/// One-dimensional automaton settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LineConfig {
    /// Number of cells per generation.
    pub size: usize,
    pub tick_ms: u64,
    /// Generations kept for display; `0` keeps all.
    pub history: usize,
    pub seed: Option<u64>,
    /// Initial rule number; all-zero when absent.
    pub rule: Option<u64>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            size: 120,
            tick_ms: 1000,
            history: 10,
            seed: None,
            rule: None,
        }
    }
}

impl LineConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Lattice-gas settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    pub grid_size: usize,
    pub wall_position: usize,
    pub wall_size: usize,
    /// Per-direction seeding probability on the upper side.
    pub density: f64,
    /// Tick divisor, 1 (slowest) to 5.
    pub speed: u32,
    pub base_tick_ms: u64,
    pub seed: Option<u64>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            wall_position: 25,
            wall_size: 25,
            density: 0.5,
            speed: 5,
            base_tick_ms: 500,
            seed: None,
        }
    }
}

impl LatticeConfig {
    /// Wall geometry after settings-panel coercion.
    pub fn wall(&self) -> WallConfig {
        WallConfig::coerced(self.grid_size, self.wall_position, self.wall_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.base_tick_ms / u64::from(self.speed.max(1)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub line: LineConfig,
    pub lattice: LatticeConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Line validation
        anyhow::ensure!(
            self.line.size >= MIN_LINE_LEN,
            "Line size must be at least {MIN_LINE_LEN}"
        );
        anyhow::ensure!(self.line.tick_ms > 0, "Line tick must be positive");
        if let Some(rule) = self.line.rule {
            anyhow::ensure!(rule < RULE_SPACE, "Rule number must be below {RULE_SPACE}");
        }

        // Lattice validation
        anyhow::ensure!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.lattice.grid_size),
            "Grid size must be in [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}]"
        );
        anyhow::ensure!(
            self.lattice.wall_position <= self.lattice.grid_size,
            "Wall position must not exceed grid size"
        );
        anyhow::ensure!(
            (1..=self.lattice.grid_size).contains(&self.lattice.wall_size),
            "Wall size must be in [1, grid size]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.lattice.density),
            "Particle density must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (1..=MAX_SPEED).contains(&self.lattice.speed),
            "Speed must be in [1, {MAX_SPEED}]"
        );
        anyhow::ensure!(
            self.lattice.base_tick_ms > 0,
            "Base tick must be positive"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))?;
        tracing::info!(path = %path.display(), fingerprint = %config.fingerprint(), "Config loaded");
        Ok(config)
    }

    /// Overrides both seeds.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.line.seed = Some(seed);
        self.lattice.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_string(self).unwrap_or_default().as_bytes());
        hex::encode(hasher.finalize())
    }
}
