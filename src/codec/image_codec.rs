use std::path::Path;

use hdr_metrics::{ComponentLayout, DiffImage, MetricError, PixelBuffer};
use image::{DynamicImage, GenericImageView, ImageError, ImageReader, Rgba32FImage};

use super::{HdrDecoder, HdrEncoder, HdrFormat};
use crate::error::CodecError;

/// Decoder/encoder backed by the `image` crate for one HDR container.
///
/// Decoded buffers are tightly packed and top-down, which is the scanline
/// order `image` produces for both Radiance and OpenEXR files.
#[derive(Debug, Clone, Copy)]
pub struct ImageCodec {
    format: HdrFormat,
}

impl ImageCodec {
    pub fn new(format: HdrFormat) -> Self {
        Self { format }
    }
}

impl HdrDecoder for ImageCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, CodecError> {
        let decode_err = |source: ImageError| CodecError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ImageReader::open(path).map_err(|e| decode_err(ImageError::IoError(e)))?;
        // Trust the extension the registry matched, not content sniffing
        reader.set_format(self.format.image_format());
        let image = reader.decode().map_err(decode_err)?;

        to_pixel_buffer(image, path)
    }
}

impl HdrEncoder for ImageCodec {
    fn encode(&self, image: &DiffImage, path: &Path) -> Result<(), CodecError> {
        let (width, height) = (image.width(), image.height());
        let buffer = Rgba32FImage::from_raw(width as u32, height as u32, image.to_rgba())
            .ok_or_else(|| CodecError::Buffer {
                path: path.to_path_buf(),
                source: MetricError::DimensionMismatch {
                    width,
                    height,
                    len: image.values().len(),
                },
            })?;

        buffer
            .save_with_format(path, self.format.image_format())
            .map_err(|source| CodecError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Normalize a decoded image into a [`PixelBuffer`].
///
/// The layout follows the image's channel count, so grey images fail with the
/// core's [`MetricError::UnsupportedPixelFormat`]. Only 32-bit float samples
/// are accepted; integer and half-float variants are rejected rather than
/// converted.
pub fn to_pixel_buffer(image: DynamicImage, path: &Path) -> Result<PixelBuffer, CodecError> {
    let buffer_err = |source: MetricError| CodecError::Buffer {
        path: path.to_path_buf(),
        source,
    };

    let color = image.color();
    let (width, height) = image.dimensions();
    let layout =
        ComponentLayout::from_components(usize::from(color.channel_count())).map_err(buffer_err)?;

    let samples = match image {
        DynamicImage::ImageRgb32F(buf) => buf.into_raw(),
        DynamicImage::ImageRgba32F(buf) => buf.into_raw(),
        _ => {
            return Err(CodecError::UnsupportedPixelFormat {
                path: path.to_path_buf(),
                color: format!("{:?}", color),
            })
        }
    };

    PixelBuffer::packed(samples, width as usize, height as usize, layout).map_err(buffer_err)
}
