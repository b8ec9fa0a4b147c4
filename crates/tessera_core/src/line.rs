//! One-dimensional three-state automaton with toroidal boundaries.

use crate::driver::Automaton;
use crate::error::{AutomatonError, Result};
use crate::rules::RuleTable;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tessera_data::{Distribution, Neighborhood, Symbol};

/// Shortest line the wrap-around neighborhood is defined for.
pub const MIN_LINE_LEN: usize = 3;

/// One generation of the line automaton.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(Vec<Symbol>);

impl Line {
    pub fn new(cells: Vec<Symbol>) -> Self {
        Self(cells)
    }

    pub fn uniform(len: usize, symbol: Symbol) -> Self {
        Self(vec![symbol; len])
    }

    /// Each cell drawn uniformly from {0, 1, 2}.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self(
            (0..len)
                .map(|_| Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())])
                .collect(),
        )
    }

    /// Parses a digit string such as `"0120"`.
    pub fn from_digits(digits: &str) -> Result<Self> {
        digits
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| Symbol::from_digit(d as u8))
                    .ok_or_else(|| AutomatonError::invalid_input(format!("bad cell digit '{c}'")))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    /// Neighborhood at `index`, wrapping at both ends.
    pub fn neighborhood(&self, index: usize) -> Neighborhood {
        let len = self.0.len();
        Neighborhood::new(
            self.0[(index + len - 1) % len],
            self.0[index],
            self.0[(index + 1) % len],
        )
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

impl Index<usize> for Line {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.0[index]
    }
}

impl From<Vec<Symbol>> for Line {
    fn from(cells: Vec<Symbol>) -> Self {
        Self(cells)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Computes the next generation of `current` under `rules`.
pub fn step(current: &Line, rules: &RuleTable) -> Result<Line> {
    if current.len() < MIN_LINE_LEN {
        return Err(AutomatonError::invalid_input(format!(
            "line of length {} is shorter than {MIN_LINE_LEN}",
            current.len()
        )));
    }
    Ok(Line(
        (0..current.len())
            .map(|i| rules.lookup(current.neighborhood(i)))
            .collect(),
    ))
}

/// Fraction of cells holding each symbol. An empty line yields all zeros.
pub fn distribution(line: &Line) -> Distribution {
    if line.is_empty() {
        return Distribution::default();
    }
    let mut counts = [0usize; 3];
    for symbol in line.iter() {
        counts[symbol.digit() as usize] += 1;
    }
    let len = line.len() as f64;
    Distribution {
        zero: counts[0] as f64 / len,
        one: counts[1] as f64 / len,
        two: counts[2] as f64 / len,
    }
}

/// [`Automaton`] adapter binding a rule table to the line step.
#[derive(Debug, Clone, Default)]
pub struct LineEngine {
    pub rules: RuleTable,
}

impl LineEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }
}

impl Automaton for LineEngine {
    type Snapshot = Line;
    type Sample = Distribution;
    const LABEL: &'static str = "line";

    fn advance(&self, current: &Line) -> Result<Line> {
        step(current, &self.rules)
    }

    fn observe(&self, snapshot: &Line) -> Distribution {
        distribution(snapshot)
    }
}
