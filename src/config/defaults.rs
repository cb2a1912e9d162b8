// SPDX-License-Identifier: MPL-2.0
//! Gallery tunables with compile-time sanity checks.
//!
//! Everything here feeds the import pipeline (thumbnail sizing, decode
//! concurrency), the gallery view (column policy, reveal margin), or the
//! UI tick. Values are validated against each other in a `const` block
//! so a bad edit fails the build instead of the runtime.

/// Target size of a thumbnail's longer side, in pixels.
///
/// The scale factor applied to a source image is
/// `THUMBNAIL_MAX_EDGE / max(width, height)`; it is deliberately not
/// clamped to 1.0, so sources smaller than this edge are upscaled.
pub const THUMBNAIL_MAX_EDGE: u32 = 300;

/// Vertical margin added above and below the visible scroll band when
/// deciding which grid cells to reveal. Cells start rendering slightly
/// before they scroll into view.
pub const REVEAL_MARGIN: f32 = 200.0;

/// Column count used when the window is wider than every breakpoint.
pub const DEFAULT_COLUMN_COUNT: usize = 6;

/// Responsive column policy: `(max_width, columns)` pairs, ascending.
/// The narrowest breakpoint whose width bound contains the window wins;
/// windows wider than all bounds use [`DEFAULT_COLUMN_COUNT`].
pub const COLUMN_BREAKPOINTS: [(f32, usize); 5] = [
    (640.0, 1),
    (768.0, 2),
    (1024.0, 3),
    (1280.0, 4),
    (1536.0, 5),
];

/// Gap between grid cells, horizontal and vertical, in pixels.
pub const GRID_SPACING: f32 = 12.0;

/// Outer padding around the grid, in pixels.
pub const GRID_PADDING: f32 = 16.0;

/// Default number of thumbnail rasters allowed in flight at once.
pub const DEFAULT_DECODE_PERMITS: usize = 4;

/// Minimum concurrent rasters.
pub const MIN_DECODE_PERMITS: usize = 1;

/// Maximum concurrent rasters.
pub const MAX_DECODE_PERMITS: usize = 16;

/// Cadence of the UI tick that drives the placeholder pulse and toast
/// auto-dismiss, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

const _: () = {
    assert!(THUMBNAIL_MAX_EDGE > 0);
    assert!(REVEAL_MARGIN >= 0.0);

    // Breakpoints must ascend in width and in column count
    let mut i = 1;
    while i < COLUMN_BREAKPOINTS.len() {
        assert!(COLUMN_BREAKPOINTS[i - 1].0 < COLUMN_BREAKPOINTS[i].0);
        assert!(COLUMN_BREAKPOINTS[i - 1].1 < COLUMN_BREAKPOINTS[i].1);
        i += 1;
    }
    assert!(COLUMN_BREAKPOINTS[0].1 >= 1);
    assert!(DEFAULT_COLUMN_COUNT > COLUMN_BREAKPOINTS[COLUMN_BREAKPOINTS.len() - 1].1);

    // Pipeline bounds
    assert!(MIN_DECODE_PERMITS >= 1);
    assert!(MAX_DECODE_PERMITS >= MIN_DECODE_PERMITS);
    assert!(DEFAULT_DECODE_PERMITS >= MIN_DECODE_PERMITS);
    assert!(DEFAULT_DECODE_PERMITS <= MAX_DECODE_PERMITS);

    assert!(TICK_INTERVAL_MS > 0);
};
