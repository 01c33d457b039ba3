//! Luminance extraction from linear RGB(A) pixel buffers.
//!
//! Uses the ITU-R BT.709 derived weights. Only the first three components of
//! each pixel contribute; alpha is neither read nor validated.

use crate::buffer::PixelBuffer;
use crate::error::MetricError;
use crate::metrics::{max_diff, rmse, MaxDiff};

/// Red, green and blue weights applied by [`luminance`].
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.212671, 0.715160, 0.072169];

/// Perceptual luminance of a linear RGB triple.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f64 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b)
}

/// Row-major luminance values for one image, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceField {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl LuminanceField {
    /// Wrap precomputed values.
    ///
    /// Fails with [`MetricError::DimensionMismatch`] if `values` does not hold
    /// exactly `width * height` entries.
    pub fn from_values(values: Vec<f64>, width: usize, height: usize) -> Result<Self, MetricError> {
        if values.len() != width * height {
            return Err(MetricError::DimensionMismatch {
                width,
                height,
                len: values.len(),
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// RMSE between this field and `reference`.
    pub fn rmse_against(&self, reference: &LuminanceField) -> Result<f64, MetricError> {
        rmse(&self.values, &reference.values)
    }

    /// Worst-matching pixel between this field and `reference`.
    pub fn max_diff_against(&self, reference: &LuminanceField) -> Result<MaxDiff, MetricError> {
        max_diff(&self.values, &reference.values)
    }
}

/// Convert a pixel buffer into its luminance field.
///
/// Pixels are visited in logical top-to-bottom, left-to-right order through
/// the buffer's stride-aware accessors. Any non-finite R, G or B component
/// aborts the extraction with [`MetricError::InvalidSample`].
pub fn extract_luminance(buffer: &PixelBuffer) -> Result<LuminanceField, MetricError> {
    let mut values = Vec::with_capacity(buffer.pixel_count());

    for (x, y, px) in buffer.pixels() {
        for (channel, &value) in px[..3].iter().enumerate() {
            if !value.is_finite() {
                return Err(MetricError::InvalidSample {
                    x,
                    y,
                    channel,
                    value,
                });
            }
        }
        values.push(luminance(px[0], px[1], px[2]));
    }

    LuminanceField::from_values(values, buffer.width(), buffer.height())
}
