//! Console rendering of a [`ComparisonReport`].
//!
//! Precision travels with each call in a [`ReportStyle`] value; nothing here
//! touches process-wide formatting state.

use std::io::{self, Write};

use crate::models::{ComparisonReport, ReportFormat};

/// Significant decimal digits needed to round-trip any `f64`.
pub const F64_MAX_DIGITS10: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    /// Significant digits for every printed metric
    pub precision: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            precision: F64_MAX_DIGITS10,
        }
    }
}

/// Write `report` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    format: ReportFormat,
    style: ReportStyle,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text(out, report, style),
        ReportFormat::Json => write_json(out, report),
    }
}

/// RMSE lines for every candidate, then maxDiff lines if any were computed.
pub fn write_text<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    style: ReportStyle,
) -> io::Result<()> {
    for candidate in &report.candidates {
        writeln!(
            out,
            "{} RMSE: {}",
            candidate.label,
            format_significant(candidate.rmse, style.precision)
        )?;
    }

    for candidate in &report.candidates {
        if let Some(max_diff) = candidate.max_diff {
            writeln!(
                out,
                "{} maxDiff at: {} value: {}",
                candidate.label,
                max_diff.index,
                format_significant(max_diff.value, style.precision)
            )?;
        }
    }

    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Format like C's `%.{digits}g`: fixed notation for moderate exponents,
/// scientific otherwise, trailing zeros removed.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateReport;
    use hdr_metrics::MaxDiff;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn candidate(n: usize, rmse: f64, max_diff: Option<MaxDiff>) -> CandidateReport {
        CandidateReport {
            label: format!("Image{n}"),
            path: PathBuf::from(format!("c{n}.exr")),
            rmse,
            max_diff,
            diff_path: None,
        }
    }

    fn render(report: &ComparisonReport) -> String {
        let mut out = Vec::new();
        write_text(&mut out, report, ReportStyle::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_significant_fixed() {
        assert_eq!(format_significant(0.1, 17), "0.10000000000000001");
        assert_eq!(format_significant(0.5, 17), "0.5");
        assert_eq!(format_significant(1.0, 17), "1");
        assert_eq!(format_significant(1234.5, 17), "1234.5");
    }

    #[test]
    fn test_format_significant_scientific() {
        assert_eq!(format_significant(2.5e20, 17), "2.5e+20");
        assert_eq!(format_significant(1.5e-5, 3), "1.5e-05");
    }

    #[test]
    fn test_format_significant_zero_and_low_precision() {
        assert_eq!(format_significant(0.0, 17), "0");
        assert_eq!(format_significant(2.0 / 3.0, 3), "0.667");
    }

    #[test]
    fn test_text_report_order() {
        let report = ComparisonReport {
            reference: PathBuf::from("ref.exr"),
            width: 2,
            height: 2,
            candidates: vec![
                candidate(1, 0.25, Some(MaxDiff { index: 3, value: 0.5 })),
                candidate(2, 0.0, Some(MaxDiff { index: 0, value: 0.0 })),
            ],
        };

        assert_eq!(
            render(&report),
            "Image1 RMSE: 0.25\n\
             Image2 RMSE: 0\n\
             Image1 maxDiff at: 3 value: 0.5\n\
             Image2 maxDiff at: 0 value: 0\n"
        );
    }

    #[test]
    fn test_text_report_without_diff() {
        let report = ComparisonReport {
            reference: PathBuf::from("ref.exr"),
            width: 1,
            height: 1,
            candidates: vec![candidate(1, 0.1, None)],
        };
        assert_eq!(render(&report), "Image1 RMSE: 0.10000000000000001\n");
    }

    #[test]
    fn test_json_report_round_trips_values() {
        let report = ComparisonReport {
            reference: PathBuf::from("ref.exr"),
            width: 1,
            height: 1,
            candidates: vec![candidate(1, 0.1, None)],
        };
        let mut out = Vec::new();
        write_report(&mut out, &report, ReportFormat::Json, ReportStyle::default()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["candidates"][0]["rmse"].as_f64(), Some(0.1));
        assert_eq!(json["candidates"][0]["label"], "Image1");
        assert!(json["candidates"][0].get("max_diff").is_none());
    }
}
