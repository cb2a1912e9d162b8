// SPDX-License-Identifier: MPL-2.0
//! Gallery records: one imported image and its generated artifacts.

use crate::media::{FullImage, Thumbnail};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of one gallery record within the session.
///
/// Ids are minted at record creation and never reused, so a held id
/// stays valid while records are appended around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u64);

impl RecordId {
    fn next() -> Self {
        Self(NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One imported image: a thumbnail for the grid and the full-resolution
/// handle for the viewer.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    id: RecordId,
    pub thumbnail: Thumbnail,
    pub full: FullImage,
}

impl ImageRecord {
    /// Creates a record, minting a fresh session-unique id.
    #[must_use]
    pub fn new(thumbnail: Thumbnail, full: FullImage) -> Self {
        Self {
            id: RecordId::next(),
            thumbnail,
            full,
        }
    }

    /// This record's session-unique id.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// File name of the source image, for captions.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.full.file_name()
    }
}
