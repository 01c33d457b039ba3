//! Error type for the metric pipeline.

use thiserror::Error;

/// Errors raised while extracting luminance or comparing luminance fields.
///
/// Every variant is fatal for the comparison that produced it: a single bad
/// sample or shape mismatch invalidates any aggregate statistic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    /// Component count is neither RGB (3) nor RGBA (4)
    #[error("unsupported pixel format: {components} components per pixel (expected 3 or 4)")]
    UnsupportedPixelFormat {
        /// Number of components that was supplied
        components: usize,
    },

    /// A colour component is infinite or NaN
    #[error("invalid sample at ({x}, {y}) channel {channel}: {value}")]
    InvalidSample {
        /// Column of the offending pixel
        x: usize,
        /// Row of the offending pixel (logical, top-to-bottom)
        y: usize,
        /// Component index (0 = R, 1 = G, 2 = B)
        channel: usize,
        /// The non-finite value
        value: f32,
    },

    /// The two fields being compared have different lengths
    #[error("length mismatch: {left} vs {right} samples")]
    LengthMismatch {
        /// Length of the first field
        left: usize,
        /// Length of the second field
        right: usize,
    },

    /// `width * height` does not match the number of samples
    #[error("dimension mismatch: {width}x{height} does not hold {len} samples")]
    DimensionMismatch {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Number of samples available
        len: usize,
    },

    /// A difference cannot be stored as a finite `f32`
    #[error("difference out of range at index {index}: {value} exceeds the f32 range")]
    OutOfRange {
        /// Row-major pixel index
        index: usize,
        /// The offending difference
        value: f64,
    },

    /// At least one field has no samples
    #[error("empty input: metrics over zero samples are undefined")]
    EmptyInput,

    /// Sample storage cannot hold `height` rows at the declared stride
    #[error("buffer too small: need {required} samples, got {actual}")]
    BufferTooSmall {
        /// Minimum number of `f32` elements required
        required: usize,
        /// Number of elements provided
        actual: usize,
    },
}
