//! hdr-metrics: luminance RMSE between linear floating-point HDR images
//!
//! This crate holds the numerical core of the `hdr-rmse` tool. It never
//! touches the filesystem: decoders hand it a [`PixelBuffer`], and it hands
//! back luminance fields, scalar metrics and difference images.
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (f32 RGB/RGBA, strided, top-down or bottom-up)
//!     |
//!     v  extract_luminance()     0.212671 R + 0.715160 G + 0.072169 B
//! LuminanceField (f64, row-major, top row first)
//!     |
//!     +--> rmse()                 sqrt(mean((a - b)^2))
//!     +--> max_diff()             first index of max |a - b|
//!     +--> build_diff_image()     |a - b| as RGBA (A = 1.0)
//! ```
//!
//! # Example
//!
//! ```
//! use hdr_metrics::{extract_luminance, rmse, ComponentLayout, PixelBuffer};
//!
//! let white = PixelBuffer::packed(vec![1.0; 12], 2, 2, ComponentLayout::Rgb).unwrap();
//! let black = PixelBuffer::packed(vec![0.0; 12], 2, 2, ComponentLayout::Rgb).unwrap();
//!
//! let a = extract_luminance(&white).unwrap();
//! let b = extract_luminance(&black).unwrap();
//!
//! let error = rmse(a.values(), b.values()).unwrap();
//! assert!((error - 1.0).abs() < 1e-6);
//! ```
//!
//! # Failure policy
//!
//! Every operation returns [`MetricError`] instead of guessing: non-finite
//! samples, length or dimension mismatches and empty inputs all stop the
//! comparison. Alpha components are ignored and never validated.

pub mod buffer;
pub mod diff;
pub mod error;
pub mod luminance;
pub mod metrics;


pub use buffer::{ComponentLayout, Orientation, PixelBuffer};
pub use diff::{build_diff_image, diff_field, DiffImage};
pub use error::MetricError;
pub use luminance::{extract_luminance, luminance, LuminanceField, LUMINANCE_WEIGHTS};
pub use metrics::{max_diff, rmse, MaxDiff};
