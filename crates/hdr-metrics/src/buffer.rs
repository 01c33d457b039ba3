//! Owned floating-point pixel storage with explicit stride and orientation.
//!
//! [`PixelBuffer`] is the normalized form every decoder produces. Samples are
//! stored row by row; consecutive stored rows start `row_stride` elements
//! apart, which may be more than `width * components` when a decoder pads its
//! scanlines. Stored row 0 is either the top or the bottom of the image,
//! recorded as an [`Orientation`]. All accessors take *logical* coordinates
//! where `y = 0` is the top row.

use crate::error::MetricError;

/// Component layout of a floating-point pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentLayout {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl ComponentLayout {
    /// Number of `f32` components per pixel.
    #[inline]
    pub fn components(self) -> usize {
        match self {
            ComponentLayout::Rgb => 3,
            ComponentLayout::Rgba => 4,
        }
    }

    /// Layout for a component count, if it is one we support.
    pub fn from_components(components: usize) -> Result<Self, MetricError> {
        match components {
            3 => Ok(ComponentLayout::Rgb),
            4 => Ok(ComponentLayout::Rgba),
            _ => Err(MetricError::UnsupportedPixelFormat { components }),
        }
    }
}

/// Which image row the first stored scanline holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Stored row 0 is the top of the image
    #[default]
    TopDown,
    /// Stored row 0 is the bottom of the image
    BottomUp,
}

/// A decoded width x height grid of linear `f32` RGB(A) samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    samples: Vec<f32>,
    width: usize,
    height: usize,
    layout: ComponentLayout,
    row_stride: usize,
    orientation: Orientation,
}

impl PixelBuffer {
    /// Create a buffer over strided sample storage.
    ///
    /// `row_stride` is measured in `f32` elements and must be at least
    /// `width * layout.components()`. The final row does not need trailing
    /// padding.
    pub fn new(
        samples: Vec<f32>,
        width: usize,
        height: usize,
        layout: ComponentLayout,
        row_stride: usize,
        orientation: Orientation,
    ) -> Result<Self, MetricError> {
        let overflow = MetricError::BufferTooSmall {
            required: usize::MAX,
            actual: samples.len(),
        };
        let row_len = width
            .checked_mul(layout.components())
            .ok_or_else(|| overflow.clone())?;
        if row_stride < row_len {
            return Err(MetricError::BufferTooSmall {
                required: row_len,
                actual: row_stride,
            });
        }
        let required = if height == 0 {
            0
        } else {
            row_stride
                .checked_mul(height - 1)
                .and_then(|n| n.checked_add(row_len))
                .ok_or(overflow)?
        };
        if samples.len() < required {
            return Err(MetricError::BufferTooSmall {
                required,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
            layout,
            row_stride,
            orientation,
        })
    }

    /// Create a tightly packed, top-down buffer.
    pub fn packed(
        samples: Vec<f32>,
        width: usize,
        height: usize,
        layout: ComponentLayout,
    ) -> Result<Self, MetricError> {
        let stride = width.checked_mul(layout.components()).ok_or(
            MetricError::BufferTooSmall {
                required: usize::MAX,
                actual: samples.len(),
            },
        )?;
        Self::new(samples, width, height, layout, stride, Orientation::TopDown)
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
    pub fn layout(&self) -> ComponentLayout {
        self.layout
    }

    /// Distance in `f32` elements between the starts of stored rows.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// The samples of logical row `y` (top = 0), without stride padding.
    pub fn row(&self, y: usize) -> Option<&[f32]> {
        if y >= self.height {
            return None;
        }
        let stored = match self.orientation {
            Orientation::TopDown => y,
            Orientation::BottomUp => self.height - 1 - y,
        };
        let start = stored * self.row_stride;
        self.samples
            .get(start..start + self.width * self.layout.components())
    }

    /// The components of the pixel at logical `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[f32]> {
        if x >= self.width {
            return None;
        }
        let components = self.layout.components();
        let row = self.row(y)?;
        row.get(x * components..(x + 1) * components)
    }

    /// Iterate pixels in logical row-major order as `(x, y, components)`.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, &[f32])> + '_ {
        let components = self.layout.components();
        (0..self.height).flat_map(move |y| {
            self.row(y)
                .unwrap_or(&[])
                .chunks_exact(components)
                .enumerate()
                .map(move |(x, px)| (x, y, px))
        })
    }
}
