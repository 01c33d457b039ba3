use std::path::PathBuf;

use hdr_metrics::MetricError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unsupported format: {} (expected .hdr or .exr)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Decode error in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Encode error in {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported pixel format in {}: {color} (expected 32-bit float RGB or RGBA)", path.display())]
    UnsupportedPixelFormat { path: PathBuf, color: String },

    #[error("Invalid pixel buffer from {}: {source}", path.display())]
    Buffer {
        path: PathBuf,
        #[source]
        source: MetricError,
    },
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("{}: {source}", path.display())]
    Metric {
        path: PathBuf,
        #[source]
        source: MetricError,
    },

    #[error(
        "Dimension mismatch: {} is {}x{}, reference is {}x{}",
        path.display(), actual.0, actual.1, expected.0, expected.1
    )]
    DimensionMismatch {
        path: PathBuf,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("No candidate images to compare")]
    NoCandidates,
}

impl CompareError {
    /// Whether the run stopped before any file was decoded.
    pub fn is_pre_decode(&self) -> bool {
        matches!(
            self,
            CompareError::Codec(CodecError::UnsupportedFormat { .. }) | CompareError::NoCandidates
        )
    }
}
