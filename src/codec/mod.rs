//! Format selection and image I/O.
//!
//! Decoders are looked up by lowercase file extension in a [`CodecRegistry`].
//! Every decoder returns a normalized [`PixelBuffer`], so adding a format means
//! registering one more decoder; extraction and metrics stay untouched.

mod format;
mod image_codec;

use std::collections::HashMap;
use std::path::Path;

use hdr_metrics::{DiffImage, PixelBuffer};

use crate::error::CodecError;

pub use format::{normalized_extension, HdrFormat};
pub use image_codec::{to_pixel_buffer, ImageCodec};

/// Reads one file into a [`PixelBuffer`].
pub trait HdrDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, CodecError>;
}

/// Writes a difference image to disk.
pub trait HdrEncoder {
    fn encode(&self, image: &DiffImage, path: &Path) -> Result<(), CodecError>;
}

/// Decoders keyed by extension plus the encoder used for diff output.
pub struct CodecRegistry {
    decoders: HashMap<String, Box<dyn HdrDecoder>>,
    encoder: Box<dyn HdrEncoder>,
}

impl CodecRegistry {
    /// Empty registry that writes diffs with `encoder`.
    pub fn new(encoder: Box<dyn HdrEncoder>) -> Self {
        Self {
            decoders: HashMap::new(),
            encoder,
        }
    }

    /// `.hdr` and `.exr` decoding, OpenEXR diff output.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new(Box::new(ImageCodec::new(HdrFormat::Exr)));
        for format in [HdrFormat::Hdr, HdrFormat::Exr] {
            registry.register(format.extension(), Box::new(ImageCodec::new(format)));
        }
        registry
    }

    /// Register (or replace) the decoder for an extension.
    pub fn register(&mut self, extension: &str, decoder: Box<dyn HdrDecoder>) {
        self.decoders
            .insert(extension.trim_start_matches('.').to_ascii_lowercase(), decoder);
    }

    /// The decoder for `path`, or [`CodecError::UnsupportedFormat`].
    ///
    /// Never touches the file itself.
    pub fn resolve(&self, path: &Path) -> Result<&dyn HdrDecoder, CodecError> {
        normalized_extension(path)
            .and_then(|ext| self.decoders.get(&ext))
            .map(|decoder| &**decoder)
            .ok_or_else(|| CodecError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    pub fn decode(&self, path: &Path) -> Result<PixelBuffer, CodecError> {
        self.resolve(path)?.decode(path)
    }

    pub fn encode(&self, image: &DiffImage, path: &Path) -> Result<(), CodecError> {
        self.encoder.encode(image, path)
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
