//! Per-pixel absolute difference images.
//!
//! [`DiffImage`] holds `|a[i] - b[i]|` for two luminance fields together with
//! the image dimensions, and expands to a linear RGBA float buffer
//! (R = G = B = difference, A = 1.0) for export. Rows are always emitted top
//! to bottom, matching [`Orientation::TopDown`](crate::Orientation::TopDown).

use crate::error::MetricError;
use crate::metrics::check_pair;

/// Absolute per-sample differences `|a[i] - b[i]|`.
pub fn diff_field(a: &[f64], b: &[f64]) -> Result<Vec<f64>, MetricError> {
    check_pair(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).collect())
}

/// Build a [`DiffImage`] of the given dimensions from two fields.
pub fn build_diff_image(
    a: &[f64],
    b: &[f64],
    width: usize,
    height: usize,
) -> Result<DiffImage, MetricError> {
    let values = diff_field(a, b)?;
    DiffImage::new(values, width, height)
}

/// A luminance difference field with its dimensions, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffImage {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl DiffImage {
    /// Wrap a difference field.
    ///
    /// Every value must fit in an `f32` so that [`DiffImage::to_rgba`] stores
    /// it without turning into infinity; anything else is
    /// [`MetricError::OutOfRange`].
    pub fn new(values: Vec<f64>, width: usize, height: usize) -> Result<Self, MetricError> {
        if width * height != values.len() {
            return Err(MetricError::DimensionMismatch {
                width,
                height,
                len: values.len(),
            });
        }
        let limit = f64::from(f32::MAX);
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || v.abs() > limit)
        {
            return Err(MetricError::OutOfRange { index, value });
        }
        Ok(Self {
            values,
            width,
            height,
        })
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
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Flat `[R, G, B, A, ...]` buffer of length `width * height * 4`.
    pub fn to_rgba(&self) -> Vec<f32> {
        let mut rgba = Vec::with_capacity(self.values.len() * 4);
        for &d in &self.values {
            let d = d as f32;
            rgba.extend_from_slice(&[d, d, d, 1.0]);
        }
        rgba
    }
}
