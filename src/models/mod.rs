pub mod config;
pub mod report;

pub use config::{ComparisonRequest, ReportFormat, RunConfig};
pub use report::{CandidateReport, ComparisonReport};
