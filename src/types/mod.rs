//! Public types for the evaluation results payload.

mod ordered;
mod report;
mod results;

pub use ordered::OrderedMap;
pub use report::{ClassMetrics, Report, ReportEntry};
pub use results::{ModelResults, RangeViolation, ResultsByModel};
