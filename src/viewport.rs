// SPDX-License-Identifier: MPL-2.0
//! Lazy-render gating for grid cells.
//!
//! Thumbnails far outside the visible band render as lightweight
//! placeholders until they first scroll near view. Reveals are one-shot:
//! once a cell has rendered its thumbnail, scrolling away never demotes
//! it back to a placeholder.

use crate::config::defaults::REVEAL_MARGIN;
use crate::gallery::RecordId;
use std::collections::HashSet;

/// Vertical slice of gallery content currently visible, in content
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    pub top: f32,
    pub bottom: f32,
}

impl ViewportBand {
    /// Creates a band spanning `top..bottom`.
    #[must_use]
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// The band grown by `margin` on both sides, so cells start
    /// rendering shortly before they scroll into view.
    #[must_use]
    pub fn inflated(self, margin: f32) -> Self {
        Self {
            top: self.top - margin,
            bottom: self.bottom + margin,
        }
    }

    /// Whether a vertical extent overlaps this band. Touching edges
    /// count as overlap.
    #[must_use]
    pub fn intersects(self, top: f32, bottom: f32) -> bool {
        bottom >= self.top && top <= self.bottom
    }
}

/// Resolved vertical extent of one grid cell after masonry layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub id: RecordId,
    pub top: f32,
    pub bottom: f32,
}

/// Grow-only set of cells that have earned a real thumbnail render.
#[derive(Debug, Default)]
pub struct RenderGate {
    revealed: HashSet<RecordId>,
}

impl RenderGate {
    /// Creates a gate with nothing revealed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every placement overlapping the visible band (inflated by
    /// the reveal margin) as revealed.
    ///
    /// Returns whether any cell was newly revealed, so callers can skip
    /// follow-up work when the scroll position uncovered nothing.
    pub fn observe(&mut self, placements: &[CellPlacement], visible: ViewportBand) -> bool {
        let band = visible.inflated(REVEAL_MARGIN);
        let mut changed = false;

        for placement in placements {
            if self.revealed.contains(&placement.id) {
                continue;
            }
            if band.intersects(placement.top, placement.bottom) {
                self.revealed.insert(placement.id);
                changed = true;
            }
        }

        changed
    }

    /// Whether a cell has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: RecordId) -> bool {
        self.revealed.contains(&id)
    }

    /// Number of revealed cells.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Whether any placement is still waiting to be revealed.
    #[must_use]
    pub fn has_pending(&self, placements: &[CellPlacement]) -> bool {
        placements
            .iter()
            .any(|placement| !self.revealed.contains(&placement.id))
    }
}
