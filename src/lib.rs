//! Terminal application and headless runner for the line automaton and the
//! lattice gas.

pub mod app;
