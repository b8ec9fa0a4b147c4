//! # Tessera Core
//!
//! Deterministic step engines for two discrete-time automata:
//! - a one-dimensional, three-state cellular automaton driven by a 27-entry
//!   rule table with wrap-around boundaries
//! - an HPP lattice gas in a walled square grid with a permeable gap
//!
//! ## Architecture
//!
//! Every engine is a pure function from one immutable snapshot to the next,
//! wrapped in an [`Automaton`] so a generic [`Driver`] can own the current
//! snapshot, the run state, a bounded history and the aggregate time series
//! (symbol distribution or wall pressure).
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tessera_core::lattice;
//! use tessera_core::pressure::pressure;
//! use tessera_data::WallConfig;
//!
//! let wall = WallConfig::coerced(50, 25, 24);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let grid = lattice::initialize(&wall, 0.5, &mut rng).unwrap();
//! let next = lattice::step(&grid);
//! let sample = pressure(&next, &wall);
//! assert!(sample.upper > 0.0);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Automaton trait and the snapshot-owning driver
pub mod driver;
/// Error types and result alias
pub mod error;
/// Snapshot window and time series
pub mod history;
/// Lattice-gas grid, initializer and step
pub mod lattice;
/// One-dimensional line automaton and symbol distribution
pub mod line;
/// Step timing metrics and logging setup
pub mod metrics;
/// Wall pressure aggregation
pub mod pressure;
/// Rule table of the line automaton
pub mod rules;
/// Simulations with settings-panel controls
pub mod simulation;

pub use config::{AppConfig, LatticeConfig, LineConfig};
pub use driver::{Automaton, Driver};
pub use error::{AutomatonError, Result};
pub use lattice::Grid;
pub use line::Line;
pub use metrics::{init_file_logging, init_logging, Metrics};
pub use rules::RuleTable;
pub use simulation::{LatticeSimulation, LineSimulation};
