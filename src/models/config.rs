use std::path::{Path, PathBuf};

use crate::report::ReportStyle;

/// How the comparison report is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `Image1 RMSE: ...` lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// One reference image and the candidates compared against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    /// Image every candidate is compared with
    pub reference: PathBuf,

    /// Candidates, reported in this order
    pub candidates: Vec<PathBuf>,

    /// Directory for `diff{n}.exr` files; `None` disables diff output
    pub diff_dir: Option<PathBuf>,
}

impl ComparisonRequest {
    pub fn new(reference: impl Into<PathBuf>, candidates: Vec<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            candidates,
            diff_dir: None,
        }
    }

    /// Enable diff output into `dir`.
    pub fn with_diff_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.diff_dir = Some(dir.into());
        self
    }

    /// Every input path, reference first.
    pub fn inputs(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.reference.as_path()).chain(self.candidates.iter().map(PathBuf::as_path))
    }

    /// Where the diff image for 1-based candidate `number` goes.
    pub fn diff_path(&self, number: usize) -> Option<PathBuf> {
        self.diff_dir
            .as_ref()
            .map(|dir| dir.join(format!("diff{number}.exr")))
    }
}

/// Fully resolved settings for one run of the tool.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub request: ComparisonRequest,
    pub format: ReportFormat,
    pub style: ReportStyle,
}

impl RunConfig {
    /// Settings for the classic `<candidate1> <candidate2> <reference>` call.
    pub fn from_args(
        candidates: Vec<PathBuf>,
        reference: PathBuf,
        diff: bool,
        output_dir: Option<PathBuf>,
        json: bool,
    ) -> Self {
        let mut request = ComparisonRequest::new(reference, candidates);
        if diff {
            request = request.with_diff_dir(output_dir.unwrap_or_else(|| PathBuf::from(".")));
        }

        Self {
            request,
            format: if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            },
            style: ReportStyle::default(),
        }
    }
}
