//! Transition table of the one-dimensional three-state automaton.
//!
//! A [`RuleTable`] is total by construction: it stores one output symbol for
//! each of the 27 neighborhoods and starts with every output set to `0`.
//! Constructors that accept partial input reject it with
//! [`AutomatonError::IncompleteRuleTable`] instead of guessing.

use crate::error::{AutomatonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tessera_data::{Neighborhood, Symbol};

/// Number of distinct rule tables, `3^27`.
pub const RULE_SPACE: u64 = 7_625_597_484_987;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RuleTable {
    outputs: [Symbol; Neighborhood::COUNT],
}

impl RuleTable {
    /// All-zero table.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lookup(&self, neighborhood: Neighborhood) -> Symbol {
        self.outputs[neighborhood.ordinal()]
    }

    pub fn get(&self, neighborhood: Neighborhood) -> Symbol {
        self.lookup(neighborhood)
    }

    pub fn set(&mut self, neighborhood: Neighborhood, output: Symbol) {
        self.outputs[neighborhood.ordinal()] = output;
    }

    /// Builds a table from outputs listed in canonical neighborhood order.
    pub fn from_values(values: &[Symbol]) -> Result<Self> {
        if values.len() > Neighborhood::COUNT {
            return Err(AutomatonError::invalid_input(format!(
                "rule table takes {} outputs, got {}",
                Neighborhood::COUNT,
                values.len()
            )));
        }
        let mut table = Self::new();
        for neighborhood in Neighborhood::all() {
            let output = values.get(neighborhood.ordinal()).copied().ok_or(
                AutomatonError::IncompleteRuleTable {
                    missing: neighborhood,
                },
            )?;
            table.set(neighborhood, output);
        }
        Ok(table)
    }

    /// Parses 27 digits in canonical order, e.g. `"0120..."`.
    pub fn from_digits(digits: &str) -> Result<Self> {
        let values = digits
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| Symbol::from_digit(d as u8))
                    .ok_or_else(|| AutomatonError::invalid_input(format!("bad rule digit '{c}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_values(&values)
    }

    /// Builds a table from `label -> output` pairs; every label must be present.
    pub fn from_labels<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Symbol)>,
    {
        let mut seen: HashMap<Neighborhood, Symbol> = HashMap::with_capacity(Neighborhood::COUNT);
        for (label, output) in entries {
            let neighborhood = Neighborhood::from_label(label).ok_or_else(|| {
                AutomatonError::invalid_input(format!("bad neighborhood label '{label}'"))
            })?;
            seen.insert(neighborhood, output);
        }
        let mut table = Self::new();
        for neighborhood in Neighborhood::all() {
            let output = seen
                .get(&neighborhood)
                .copied()
                .ok_or(AutomatonError::IncompleteRuleTable {
                    missing: neighborhood,
                })?;
            table.set(neighborhood, output);
        }
        Ok(table)
    }

    /// Decodes a base-3 rule number; the `"222"` output is the most significant trit.
    pub fn from_rule_number(number: u64) -> Result<Self> {
        if number >= RULE_SPACE {
            return Err(AutomatonError::invalid_input(format!(
                "rule number {number} out of range (max {})",
                RULE_SPACE - 1
            )));
        }
        let mut table = Self::new();
        let mut rest = number;
        for slot in table.outputs.iter_mut() {
            *slot = Symbol::ALL[(rest % 3) as usize];
            rest /= 3;
        }
        Ok(table)
    }

    pub fn rule_number(&self) -> u64 {
        self.outputs
            .iter()
            .rev()
            .fold(0u64, |acc, s| acc * 3 + s.digit() as u64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Neighborhood, Symbol)> + '_ {
        Neighborhood::all().map(move |n| (n, self.lookup(n)))
    }

    pub fn reset(&mut self) {
        self.outputs = [Symbol::Zero; Neighborhood::COUNT];
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for output in &self.outputs {
            write!(f, "{output}")?;
        }
        Ok(())
    }
}

impl From<RuleTable> for String {
    fn from(table: RuleTable) -> Self {
        table.to_string()
    }
}

impl TryFrom<String> for RuleTable {
    type Error = AutomatonError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_digits(&value)
    }
}
