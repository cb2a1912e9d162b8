// SPDX-License-Identifier: MPL-2.0
//! Masonry layout for the thumbnail grid.
//!
//! Pure geometry: given the ordered records and the available width,
//! compute the column assignment and vertical placement of every cell.
//! Cells are distributed round-robin by index, so the reading order of
//! the grid matches the store order regardless of cell heights.

use crate::config::defaults::{
    COLUMN_BREAKPOINTS, DEFAULT_COLUMN_COUNT, GRID_PADDING, GRID_SPACING,
};
use crate::gallery::ImageRecord;
use crate::viewport::CellPlacement;

/// Column count for a window width, per the responsive breakpoint policy.
///
/// The narrowest breakpoint whose bound contains the width wins; wider
/// windows fall through to [`DEFAULT_COLUMN_COUNT`].
#[must_use]
pub fn column_count_for_width(width: f32) -> usize {
    for (max_width, columns) in COLUMN_BREAKPOINTS {
        if width <= max_width {
            return columns;
        }
    }
    DEFAULT_COLUMN_COUNT
}

/// Computed grid geometry for one window width and record list.
#[derive(Debug, Clone)]
pub struct MasonryLayout {
    /// Number of columns at this width.
    pub column_count: usize,
    /// Width of each column, after padding and inter-column gaps.
    pub column_width: f32,
    /// Record indices per column, top to bottom.
    pub columns: Vec<Vec<usize>>,
    /// Vertical band of every cell, in record order. Feeds the reveal
    /// check against the visible scroll band.
    pub placements: Vec<CellPlacement>,
    /// Total scrollable content height, including outer padding.
    pub content_height: f32,
}

impl MasonryLayout {
    /// Rendered height of the cell for the record at `index`.
    #[must_use]
    pub fn cell_height(&self, index: usize) -> f32 {
        let placement = &self.placements[index];
        placement.bottom - placement.top
    }
}

/// Lays out `records` into a masonry grid that fills `width`.
///
/// Each cell keeps its thumbnail's aspect ratio at the shared column
/// width; columns grow independently as cells stack.
#[must_use]
pub fn layout(records: &[ImageRecord], width: f32) -> MasonryLayout {
    let column_count = column_count_for_width(width);
    #[allow(clippy::cast_precision_loss)]
    let gaps = GRID_SPACING * (column_count - 1) as f32;
    #[allow(clippy::cast_precision_loss)]
    let column_width = ((width - 2.0 * GRID_PADDING - gaps) / column_count as f32).max(0.0);

    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); column_count];
    let mut column_y = vec![GRID_PADDING; column_count];
    let mut placements = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let column = index % column_count;
        let height = column_width / record.thumbnail.aspect_ratio();
        let top = column_y[column];
        placements.push(CellPlacement {
            id: record.id(),
            top,
            bottom: top + height,
        });
        columns[column].push(index);
        column_y[column] = top + height + GRID_SPACING;
    }

    let tallest = placements.iter().map(|p| p.bottom).fold(0.0_f32, f32::max);
    let content_height = if placements.is_empty() {
        0.0
    } else {
        tallest + GRID_PADDING
    };

    MasonryLayout {
        column_count,
        column_width,
        columns,
        placements,
        content_height,
    }
}
