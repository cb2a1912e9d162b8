// SPDX-License-Identifier: MPL-2.0
//! Image decoding from encoded bytes (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia;

/// A fully decoded image as raw RGBA pixels.
///
/// This is the working representation inside the thumbnail pipeline; it
/// never touches the GPU or the widget tree.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wraps raw RGBA pixels.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the buffer length does not match the
    /// dimensions.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Longer side of the image, in pixels.
    #[must_use]
    pub fn max_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Returns the pixels as an `image` crate buffer for resampling.
    #[must_use]
    pub fn into_rgba_image(self) -> image_rs::RgbaImage {
        image_rs::RgbaImage::from_raw(self.width, self.height, self.pixels)
            .expect("pixel buffer length validated at construction")
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// A decoded image ready for display by the iced renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA bytes, shared so cache entries clone cheaply.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the decoded RGBA bytes.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Decoded size in bytes (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn byte_size(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

impl From<DecodedImage> for ImageData {
    fn from(decoded: DecodedImage) -> Self {
        Self::from_rgba(decoded.width, decoded.height, decoded.pixels)
    }
}

/// Decodes encoded image bytes into RGBA pixels.
///
/// `source` is only consulted for its extension: SVG sources go through
/// the usvg rasterizer at their intrinsic size, everything else through
/// the `image` crate's format sniffing.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a decodable image and
/// [`Error::Svg`] when SVG parsing, sizing, or rasterization fails.
pub fn decode_image(bytes: &[u8], source: &Path) -> Result<DecodedImage> {
    let is_svg = source
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        decode_svg(bytes)
    } else {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();
        Ok(DecodedImage::from_rgba(width, height, pixels))
    }
}

/// Rasterizes an SVG at its intrinsic size.
fn decode_svg(bytes: &[u8]) -> Result<DecodedImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(DecodedImage::from_rgba(width, height, pixmap.data().to_vec()))
}

/// Reads and decodes a file's full-resolution pixels off the UI thread.
///
/// Used by the viewer and the neighbor preloader. The join error of the
/// blocking task is folded into the result so callers see one error
/// channel.
pub async fn load_full_image(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || {
        let bytes = std::fs::read(&path).map_err(|e| Error::Io(e.to_string()))?;
        decode_image(&bytes, &path).map(ImageData::from)
    })
    .await
    .unwrap_or_else(|e| Err(Error::Io(format!("Image load task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(width, height, Rgba([30, 60, 90, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_png_bytes_returns_expected_dimensions() {
        let decoded =
            decode_image(&png_bytes(6, 4), Path::new("sample.png")).expect("png should decode");

        assert_eq!((decoded.width, decoded.height), (6, 4));
        assert_eq!(decoded.max_edge(), 6);
        assert_eq!(decoded.pixels().len(), 6 * 4 * 4);
    }

    #[test]
    fn decode_svg_rasterizes_at_intrinsic_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
            <rect width="6" height="3" fill="blue" />
        </svg>"#;

        let decoded =
            decode_image(svg.as_bytes(), Path::new("sample.svg")).expect("svg should decode");
        assert_eq!(decoded.width, 6);
        assert_eq!(decoded.height, 3);
    }

    #[test]
    fn decode_invalid_bytes_returns_decode_error() {
        match decode_image(b"not an image", Path::new("broken.png")) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected a decode error, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_svg_returns_svg_error() {
        match decode_image(b"<svg>oops", Path::new("broken.svg")) {
            Err(Error::Svg(_)) => {}
            other => panic!("expected an SVG error, got {other:?}"),
        }
    }

    #[test]
    fn decode_svg_with_zero_dimension_errors() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="8"></svg>"#;
        match decode_image(svg.as_bytes(), Path::new("zero.svg")) {
            Err(Error::Svg(_)) => {}
            other => panic!("expected an SVG error, got {other:?}"),
        }
    }

    #[test]
    fn image_data_reports_byte_size() {
        let data = ImageData::from_rgba(8, 4, vec![0u8; 8 * 4 * 4]);
        assert_eq!(data.byte_size(), 128);
        assert_eq!(data.rgba_bytes().len(), 128);
    }

    #[tokio::test]
    async fn load_full_image_reads_from_disk() {
        let temp_dir = tempdir().expect("temp dir");
        let image_path = temp_dir.path().join("disk.png");
        std::fs::write(&image_path, png_bytes(5, 7)).expect("write sample png");

        let data = load_full_image(image_path).await.expect("load from disk");
        assert_eq!((data.width, data.height), (5, 7));
    }

    #[tokio::test]
    async fn load_full_image_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("temp dir");
        let missing = temp_dir.path().join("nope.png");

        match load_full_image(missing).await {
            Err(Error::Io(_)) => {}
            other => panic!("expected an i/o error, got {other:?}"),
        }
    }
}
