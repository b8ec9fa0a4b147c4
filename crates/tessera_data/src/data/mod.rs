//! Core data structures for the Tessera simulations.

pub mod lattice;
pub mod line;
pub mod stats;
