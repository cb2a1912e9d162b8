// SPDX-License-Identifier: MPL-2.0
//! Media handling: format detection, decoding, thumbnail generation,
//! the import pipeline, and the full-resolution preload cache.

pub mod decode;
pub mod import;
pub mod preload;
pub mod thumbnail;

use image_rs::ImageFormat;
use std::path::Path;

pub use decode::{decode_image, load_full_image, DecodedImage, ImageData};
pub use import::ImportEvent;
pub use preload::{PreloadCache, PreloadConfig};
pub use thumbnail::{FullImage, RasterPool, Thumbnail};

/// File extensions the folder scanner accepts.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tiff", "tif", "svg",
];

/// Returns the lowercase extension of `path`, if any.
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Whether `path` points at a file the gallery can import, judged by
/// extension alone (content is validated later, at decode time).
#[must_use]
pub fn is_image_file<P: AsRef<Path>>(path: P) -> bool {
    extension_of(path.as_ref()).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Media type string for a supported image path (e.g. `image/jpeg`).
///
/// Returns `None` for unsupported extensions. SVG is special-cased since
/// the `image` crate has no format entry for it.
#[must_use]
pub fn media_type_for_path<P: AsRef<Path>>(path: P) -> Option<&'static str> {
    let ext = extension_of(path.as_ref())?;
    if ext == "svg" {
        return Some("image/svg+xml");
    }
    ImageFormat::from_extension(&ext).map(|format| format.to_mime_type())
}

/// Encoded format to use for a thumbnail of the given source path.
///
/// Mirrors the source's own format where the `image` crate can encode it;
/// sources without a raster format (SVG) fall back to PNG here, and
/// formats whose encoder rejects the raster (e.g. ICO beyond 256 px) fall
/// back at encode time.
#[must_use]
pub fn thumbnail_format_for_path<P: AsRef<Path>>(path: P) -> ImageFormat {
    extension_of(path.as_ref())
        .and_then(|ext| ImageFormat::from_extension(&ext))
        .filter(ImageFormat::can_write)
        .unwrap_or(ImageFormat::Png)
}
