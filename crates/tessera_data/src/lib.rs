//! Plain data shared by the Tessera engines, front-end and tests.

pub mod data;

pub use data::lattice::{Direction, GridCell, MaxOccupancy, WallConfig};
pub use data::line::{Neighborhood, Symbol};
pub use data::stats::{Distribution, PressureSample, RunState};
