//! Error types for the automaton engines.
//!
//! Every error is local to a single step, initialization or edit call.
//! A call that fails never leaves a partially updated snapshot behind.

use tessera_data::Neighborhood;
use thiserror::Error;

/// Main error type for tessera_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutomatonError {
    /// Wall geometry, density or speed outside the accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed input snapshot or value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A rule table built from partial input
    #[error("Incomplete rule table: no rule for neighborhood {missing}")]
    IncompleteRuleTable { missing: Neighborhood },

    /// Configuration edit attempted while the driver is running
    #[error("Simulation is running: {0}")]
    RunInProgress(String),
}

/// Result type alias for tessera_core operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;

impl AutomatonError {
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    #[must_use]
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    #[must_use]
    pub fn run_in_progress<S: Into<String>>(action: S) -> Self {
        Self::RunInProgress(action.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_data::Symbol;

    #[test]
    fn test_error_display() {
        let err = AutomatonError::invalid_input("line too short");
        assert_eq!(err.to_string(), "Invalid input: line too short");
    }

    #[test]
    fn test_incomplete_rule_table_names_neighborhood() {
        let err = AutomatonError::IncompleteRuleTable {
            missing: Neighborhood::new(Symbol::One, Symbol::Two, Symbol::Zero),
        };
        assert!(err.to_string().contains("120"));
    }
}
