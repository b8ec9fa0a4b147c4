use serde::{Deserialize, Serialize};

/// Fraction of cells holding each symbol in one line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl Distribution {
    pub fn as_array(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }

    pub fn total(&self) -> f64 {
        self.zero + self.one + self.two
    }
}

/// Normalized occupancy on each side of the wall at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PressureSample {
    pub lower: f64,
    pub upper: f64,
}

/// External state of a simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        }
    }
}
