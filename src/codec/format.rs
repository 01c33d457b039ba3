use std::path::Path;

use image::ImageFormat;

/// HDR container formats the tool accepts, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdrFormat {
    /// Radiance RGBE (`.hdr`)
    Hdr,
    /// OpenEXR (`.exr`)
    Exr,
}

impl HdrFormat {
    /// Canonical lowercase extension.
    pub fn extension(self) -> &'static str {
        match self {
            HdrFormat::Hdr => "hdr",
            HdrFormat::Exr => "exr",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            HdrFormat::Hdr => ImageFormat::Hdr,
            HdrFormat::Exr => ImageFormat::OpenExr,
        }
    }
}

/// Lowercased extension of `path`, if it has a UTF-8 one.
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
