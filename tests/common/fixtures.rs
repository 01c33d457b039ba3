//! Image fixtures written with the `image` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::hdr::HdrEncoder;
use image::{ImageFormat, Rgb, Rgb32FImage, Rgba32FImage};

/// Write a linear RGBA OpenEXR file where every pixel is produced by `f(x, y)`.
pub fn write_exr_rgba(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> [f32; 4],
) -> PathBuf {
    let path = dir.join(name);
    Rgba32FImage::from_fn(width, height, |x, y| image::Rgba(f(x, y)))
        .save_with_format(&path, ImageFormat::OpenExr)
        .expect("write exr fixture");
    path
}

/// Write a linear RGB OpenEXR file.
pub fn write_exr_rgb(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> [f32; 3],
) -> PathBuf {
    let path = dir.join(name);
    Rgb32FImage::from_fn(width, height, |x, y| Rgb(f(x, y)))
        .save_with_format(&path, ImageFormat::OpenExr)
        .expect("write exr fixture");
    path
}

/// Write a Radiance HDR file. Use values that RGBE represents exactly
/// (powers of two and small multiples) when asserting exact metrics.
pub fn write_hdr(
    dir: &Path,
    name: &str,
    width: usize,
    height: usize,
    f: impl Fn(usize, usize) -> [f32; 3],
) -> PathBuf {
    let path = dir.join(name);
    let pixels: Vec<Rgb<f32>> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| Rgb(f(x, y)))
        .collect();
    let file = BufWriter::new(File::create(&path).expect("create hdr fixture"));
    HdrEncoder::new(file)
        .encode(&pixels, width, height)
        .expect("write hdr fixture");
    path
}

/// Solid black RGBA EXR.
pub fn black_exr(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    write_exr_rgba(dir, name, width, height, |_, _| [0.0, 0.0, 0.0, 1.0])
}

/// Read an EXR back as flat RGBA floats.
pub fn read_rgba(path: &Path) -> (u32, u32, Vec<f32>) {
    let image = image::open(path).expect("read image").into_rgba32f();
    let (w, h) = image.dimensions();
    (w, h, image.into_raw())
}
