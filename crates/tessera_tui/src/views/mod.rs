pub mod charts;
pub mod lattice;
pub mod line;
pub mod rules;
pub mod status;

pub use charts::{DistributionChart, PressureSparklines};
pub use lattice::GridWidget;
pub use line::LineHistoryWidget;
pub use rules::RuleTableWidget;
pub use status::StatusWidget;
