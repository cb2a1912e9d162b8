// SPDX-License-Identifier: MPL-2.0
//! Thumbnail generation: decode, resample to a bounded preview, encode.
//!
//! Each source image is decoded off the UI thread, resampled so its
//! longer side matches [`THUMBNAIL_MAX_EDGE`], and re-encoded in the
//! source's own format (PNG fallback). The [`RasterPool`] bounds how many
//! rasters are in flight at once; every task owns its raster privately,
//! so concurrent generation never shares a mutable surface.

use crate::config::defaults::{
    DEFAULT_DECODE_PERMITS, MAX_DECODE_PERMITS, MIN_DECODE_PERMITS, THUMBNAIL_MAX_EDGE,
};
use crate::error::{Error, Result};
use crate::media::{self, decode};
use iced::widget::image;
use image_rs::{imageops::FilterType, DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Encoded, immediately renderable preview of one source image.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Handle built from the resampled raster; the grid renders this
    /// without ever re-decoding the encoded payload.
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    bytes: Arc<Vec<u8>>,
    media_type: &'static str,
}

impl Thumbnail {
    /// Encoded preview payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Media type of the encoded payload (e.g. `image/jpeg`).
    #[must_use]
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    /// Width over height; the masonry layout sizes cells with this.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // thumbnail edges are <= 300ish
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Addressable handle to a source image's original bytes.
///
/// Stays undecoded until the viewer or the preload cache asks for
/// pixels; the byte buffer is shared and lives as long as the record.
#[derive(Debug, Clone)]
pub struct FullImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    bytes: Arc<Vec<u8>>,
    media_type: &'static str,
}

impl FullImage {
    /// Original encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Media type of the source file.
    #[must_use]
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    /// File name of the source, for captions.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Uniform scale factor normalizing the longer side to the target edge.
///
/// Not clamped to 1.0: sources smaller than the target edge scale up.
#[must_use]
#[allow(clippy::cast_precision_loss)] // image dimensions fit f32 comfortably
pub fn scale_for(width: u32, height: u32) -> f32 {
    debug_assert!(width > 0 && height > 0);
    THUMBNAIL_MAX_EDGE as f32 / width.max(height) as f32
}

/// Thumbnail dimensions for a source image, never below 1×1.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)] // scale and dimensions are positive
pub fn scaled_dimensions(width: u32, height: u32) -> (u32, u32) {
    let scale = scale_for(width, height);
    let w = (width as f32 * scale).round() as u32;
    let h = (height as f32 * scale).round() as u32;
    (w.max(1), h.max(1))
}

/// Generates a thumbnail and full-resolution handle for one source file.
///
/// Blocking: call from `spawn_blocking` (or through [`RasterPool`]).
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Decode`]
/// or [`Error::Svg`] when the contents do not decode, and
/// [`Error::Decode`] when no encoder accepts the raster.
pub fn generate(path: &Path) -> Result<(Thumbnail, FullImage)> {
    let bytes = std::fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    generate_from_bytes(path, bytes)
}

/// Same as [`generate`], for callers that already hold the file bytes.
pub fn generate_from_bytes(path: &Path, bytes: Vec<u8>) -> Result<(Thumbnail, FullImage)> {
    let decoded = decode::decode_image(&bytes, path)?;
    let (source_width, source_height) = (decoded.width, decoded.height);
    let (thumb_width, thumb_height) = scaled_dimensions(source_width, source_height);

    let raster = DynamicImage::ImageRgba8(decoded.into_rgba_image())
        .resize_exact(thumb_width, thumb_height, FilterType::Lanczos3)
        .into_rgba8();

    let format = media::thumbnail_format_for_path(path);
    let (encoded, media_type) = encode_raster(&raster, format)?;

    let thumbnail = Thumbnail {
        handle: image::Handle::from_rgba(thumb_width, thumb_height, raster.into_raw()),
        width: thumb_width,
        height: thumb_height,
        bytes: Arc::new(encoded),
        media_type,
    };

    let full = FullImage {
        path: path.to_path_buf(),
        width: source_width,
        height: source_height,
        bytes: Arc::new(bytes),
        media_type: media::media_type_for_path(path).unwrap_or("application/octet-stream"),
    };

    Ok((thumbnail, full))
}

/// Encodes the raster in `format`, falling back to PNG when that format's
/// encoder rejects it (ICO's 256 px ceiling, for example).
fn encode_raster(raster: &RgbaImage, format: ImageFormat) -> Result<(Vec<u8>, &'static str)> {
    match try_encode(raster, format) {
        Ok(bytes) => Ok((bytes, format.to_mime_type())),
        Err(_) if format != ImageFormat::Png => {
            let bytes = try_encode(raster, ImageFormat::Png)?;
            Ok((bytes, ImageFormat::Png.to_mime_type()))
        }
        Err(err) => Err(err),
    }
}

fn try_encode(raster: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());

    if format == ImageFormat::Jpeg {
        // The JPEG encoder rejects alpha channels
        let rgb = DynamicImage::ImageRgba8(raster.clone()).into_rgb8();
        rgb.write_to(&mut cursor, format)?;
    } else {
        raster.write_to(&mut cursor, format)?;
    }

    Ok(cursor.into_inner())
}

/// Bounds concurrent thumbnail rasterization.
///
/// Each generation task acquires a permit before decoding, owns its
/// raster for the duration, and releases the permit on completion. This
/// caps peak pixel memory without serializing unrelated work.
#[derive(Debug, Clone)]
pub struct RasterPool {
    permits: Arc<Semaphore>,
    max_in_flight: usize,
}

impl Default for RasterPool {
    fn default() -> Self {
        Self::new(DEFAULT_DECODE_PERMITS)
    }
}

impl RasterPool {
    /// Creates a pool allowing `max_in_flight` concurrent rasters,
    /// clamped to the supported range.
    #[must_use]
    pub fn new(max_in_flight: usize) -> Self {
        let max_in_flight = max_in_flight.clamp(MIN_DECODE_PERMITS, MAX_DECODE_PERMITS);
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight)),
            max_in_flight,
        }
    }

    /// Number of rasters the pool allows in flight.
    #[must_use]
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Runs one generation task under a pool permit, on the blocking
    /// thread pool.
    ///
    /// # Errors
    ///
    /// Propagates [`generate`] errors; a crashed worker surfaces as
    /// [`Error::Io`].
    pub async fn generate(&self, path: PathBuf) -> Result<(Thumbnail, FullImage)> {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| Error::Io(format!("Raster pool closed: {e}")))?;

        let result = tokio::task::spawn_blocking(move || generate(&path))
            .await
            .unwrap_or_else(|e| Err(Error::Io(format!("Thumbnail task failed: {e}"))));

        drop(permit);
        result
    }
}
