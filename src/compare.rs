//! Runs a full comparison: decode, extract, validate, measure, export.
//!
//! Work proceeds in phases so that a bad input never leaves a partial result
//! behind: every extension is checked before the first decode, every image is
//! decoded and its dimensions checked before the first metric, and diff
//! images are only written once every metric has succeeded.

use std::path::{Path, PathBuf};

use hdr_metrics::{build_diff_image, extract_luminance, LuminanceField, MetricError};

use crate::codec::CodecRegistry;
use crate::error::CompareError;
use crate::models::{CandidateReport, ComparisonReport, ComparisonRequest};

/// Compare every candidate of `request` against its reference.
pub fn compare(
    codecs: &CodecRegistry,
    request: &ComparisonRequest,
) -> Result<ComparisonReport, CompareError> {
    if request.candidates.is_empty() {
        return Err(CompareError::NoCandidates);
    }

    for path in request.inputs() {
        codecs.resolve(path)?;
    }

    let reference = load_luminance(codecs, &request.reference)?;
    let candidates = request
        .candidates
        .iter()
        .map(|path| load_luminance(codecs, path).map(|field| (path, field)))
        .collect::<Result<Vec<_>, _>>()?;

    for (path, field) in &candidates {
        check_dimensions(path, field, &reference)?;
    }

    let mut reports = Vec::with_capacity(candidates.len());
    let mut diffs = Vec::new();

    for (i, (path, field)) in candidates.iter().enumerate() {
        let number = i + 1;
        let rmse = field
            .rmse_against(&reference)
            .map_err(|source| metric_error(path, source))?;
        tracing::debug!(path = %path.display(), rmse, "Computed RMSE");

        let mut report = CandidateReport {
            label: format!("Image{number}"),
            path: path.to_path_buf(),
            rmse,
            max_diff: None,
            diff_path: None,
        };

        if let Some(out) = request.diff_path(number) {
            let max_diff = field
                .max_diff_against(&reference)
                .map_err(|source| metric_error(path, source))?;
            let image = build_diff_image(
                field.values(),
                reference.values(),
                reference.width(),
                reference.height(),
            )
            .map_err(|source| metric_error(path, source))?;
            tracing::debug!(
                path = %path.display(),
                index = max_diff.index,
                value = max_diff.value,
                "Located max difference"
            );

            report.max_diff = Some(max_diff);
            report.diff_path = Some(out.clone());
            diffs.push((out, image));
        }

        reports.push(report);
    }

    for (out, image) in &diffs {
        codecs.encode(image, out)?;
        tracing::info!(path = %out.display(), "Wrote diff image");
    }

    Ok(ComparisonReport {
        reference: request.reference.clone(),
        width: reference.width(),
        height: reference.height(),
        candidates: reports,
    })
}

/// RMSE between two image files, with the same validation as [`compare`].
pub fn rmse_between(codecs: &CodecRegistry, image: &Path, reference: &Path) -> Result<f64, CompareError> {
    codecs.resolve(image)?;
    codecs.resolve(reference)?;

    let reference_field = load_luminance(codecs, reference)?;
    let field = load_luminance(codecs, image)?;
    check_dimensions(image, &field, &reference_field)?;

    field
        .rmse_against(&reference_field)
        .map_err(|source| metric_error(image, source))
}

fn load_luminance(codecs: &CodecRegistry, path: &Path) -> Result<LuminanceField, CompareError> {
    let buffer = codecs.decode(path)?;
    tracing::info!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        layout = ?buffer.layout(),
        row_stride = buffer.row_stride(),
        "Decoded image"
    );

    extract_luminance(&buffer).map_err(|source| metric_error(path, source))
}

fn check_dimensions(
    path: &Path,
    field: &LuminanceField,
    reference: &LuminanceField,
) -> Result<(), CompareError> {
    let expected = (reference.width(), reference.height());
    let actual = (field.width(), field.height());
    if expected != actual {
        return Err(CompareError::DimensionMismatch {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn metric_error(path: &Path, source: MetricError) -> CompareError {
    CompareError::Metric {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::HdrDecoder;
    use crate::error::CodecError;
    use hdr_metrics::{ComponentLayout, PixelBuffer};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Decoder that counts calls and returns a constant-luminance image
    /// whose size is encoded in the file stem (`2x3_*.fake`).
    struct FakeDecoder {
        calls: Rc<Cell<usize>>,
        value: f32,
    }

    impl HdrDecoder for FakeDecoder {
        fn decode(&self, path: &Path) -> Result<PixelBuffer, CodecError> {
            self.calls.set(self.calls.get() + 1);
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("1x1");
            let size = stem.split('_').next().unwrap_or("1x1");
            let (w, h) = size.split_once('x').unwrap_or(("1", "1"));
            let (w, h): (usize, usize) = (w.parse().unwrap_or(1), h.parse().unwrap_or(1));
            let value = if stem.ends_with("ref") { 0.0 } else { self.value };
            Ok(PixelBuffer::packed(vec![value; w * h * 3], w, h, ComponentLayout::Rgb)
                .expect("fake buffer"))
        }
    }

    fn registry(value: f32) -> (CodecRegistry, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let mut codecs = CodecRegistry::with_defaults();
        codecs.register(
            "fake",
            Box::new(FakeDecoder {
                calls: calls.clone(),
                value,
            }),
        );
        (codecs, calls)
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_constant_offset_rmse() {
        let (codecs, _) = registry(1.0);
        let request = ComparisonRequest::new("2x2_ref.fake", paths(&["2x2_a.fake", "2x2_b.fake"]));

        let report = compare(&codecs, &request).unwrap();

        assert_eq!(report.candidates.len(), 2);
        assert_eq!(report.candidates[0].label, "Image1");
        assert_eq!(report.candidates[1].label, "Image2");
        for c in &report.candidates {
            assert!((c.rmse - 1.0).abs() < 1e-6, "rmse {}", c.rmse);
            assert_eq!(c.max_diff, None);
        }
    }

    #[test]
    fn test_unsupported_extension_stops_before_decode() {
        let (codecs, calls) = registry(1.0);
        let request = ComparisonRequest::new("2x2_ref.fake", paths(&["2x2_a.fake", "b.png"]));

        let err = compare(&codecs, &request).unwrap_err();

        assert!(err.is_pre_decode());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_dimension_mismatch_before_metrics() {
        let (codecs, calls) = registry(1.0);
        let request = ComparisonRequest::new("2x2_ref.fake", paths(&["2x2_a.fake", "3x2_b.fake"]));

        match compare(&codecs, &request).unwrap_err() {
            CompareError::DimensionMismatch {
                path,
                expected,
                actual,
            } => {
                assert_eq!(path, PathBuf::from("3x2_b.fake"));
                assert_eq!(expected, (2, 2));
                assert_eq!(actual, (3, 2));
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_no_candidates() {
        let (codecs, _) = registry(1.0);
        let request = ComparisonRequest::new("2x2_ref.fake", vec![]);
        assert!(matches!(
            compare(&codecs, &request),
            Err(CompareError::NoCandidates)
        ));
    }

    #[test]
    fn test_dimension_mismatch_writes_no_diff() {
        let dir = tempfile::tempdir().unwrap();
        let (codecs, _) = registry(1.0);
        let request = ComparisonRequest::new("2x2_ref.fake", paths(&["2x2_a.fake", "1x1_b.fake"]))
            .with_diff_dir(dir.path());

        assert!(compare(&codecs, &request).is_err());
        assert!(!dir.path().join("diff1.exr").exists());
    }

    #[test]
    fn test_rmse_between_two_files() {
        let (codecs, _) = registry(2.0);
        let rmse = rmse_between(
            &codecs,
            &PathBuf::from("4x1_a.fake"),
            &PathBuf::from("4x1_ref.fake"),
        )
        .unwrap();
        assert!((rmse - 2.0).abs() < 1e-6);
    }
}
