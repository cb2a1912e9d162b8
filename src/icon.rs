// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//!
//! Rasterizes the bundled SVG mark at runtime so packaging never has to ship
//! a separate bitmap asset. Returns `None` when parsing or rendering fails;
//! the window then falls back to the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
const ICON_EDGE: u32 = 128;

/// Rasterize the embedded SVG mark into an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_mosaic.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_EDGE as f32 / source_size.width(),
        ICON_EDGE as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_EDGE, ICON_EDGE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_EDGE, ICON_EDGE).ok()
}
