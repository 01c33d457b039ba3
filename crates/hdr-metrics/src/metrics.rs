//! RMSE and maximum absolute difference between luminance fields.

use serde::Serialize;

use crate::error::MetricError;

/// The single worst-matching sample between two fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaxDiff {
    /// Flat row-major index of the sample
    pub index: usize,
    /// Absolute difference at that index
    pub value: f64,
}

/// Shape checks shared by every pairwise operation.
pub(crate) fn check_pair(a: &[f64], b: &[f64]) -> Result<(), MetricError> {
    if a.len() != b.len() {
        return Err(MetricError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(MetricError::EmptyInput);
    }
    Ok(())
}

/// Root-mean-square error: `sqrt((1/n) * sum((a[i] - b[i])^2))`.
pub fn rmse(a: &[f64], b: &[f64]) -> Result<f64, MetricError> {
    check_pair(a, b)?;

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();

    Ok((sum / a.len() as f64).sqrt())
}

/// Index and magnitude of `max |a[i] - b[i]|`.
///
/// Scans in ascending index order and only replaces the running maximum on a
/// strictly larger value, so ties resolve to the earliest index.
pub fn max_diff(a: &[f64], b: &[f64]) -> Result<MaxDiff, MetricError> {
    check_pair(a, b)?;

    let mut best = MaxDiff {
        index: 0,
        value: (a[0] - b[0]).abs(),
    };
    for (index, (x, y)) in a.iter().zip(b).enumerate().skip(1) {
        let value = (x - y).abs();
        if value > best.value {
            best = MaxDiff { index, value };
        }
    }
    Ok(best)
}
