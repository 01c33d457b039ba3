use std::path::PathBuf;

use hdr_metrics::MaxDiff;
use serde::Serialize;

/// Result for one candidate image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    /// Console label, `Image1`, `Image2`, ...
    pub label: String,
    pub path: PathBuf,
    /// Luminance RMSE against the reference
    pub rmse: f64,
    /// Worst pixel, present in diff mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_diff: Option<MaxDiff>,
    /// Written diff image, present in diff mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_path: Option<PathBuf>,
}

/// Everything one comparison run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub reference: PathBuf,
    pub width: usize,
    pub height: usize,
    pub candidates: Vec<CandidateReport>,
}
