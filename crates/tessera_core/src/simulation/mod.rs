//! User-facing simulations: a [`Driver`](crate::driver::Driver) plus the
//! controls of the settings panel (rule edits, reset, restart, speed).

pub mod lattice;
pub mod line;

pub use lattice::LatticeSimulation;
pub use line::LineSimulation;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded generator; an absent seed is drawn at random and logged so the run
/// can be reproduced.
pub fn seeded_rng(seed: Option<u64>, label: &'static str) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(automaton = label, seed, "Random source seeded");
    ChaCha8Rng::seed_from_u64(seed)
}
