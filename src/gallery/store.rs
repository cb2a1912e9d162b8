// SPDX-License-Identifier: MPL-2.0
//! Append-only store of gallery records plus import batch progress.

use crate::gallery::record::{ImageRecord, RecordId};

/// Progress of the in-flight import batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadProgress {
    /// Files that finished, successfully or not.
    pub processed: usize,
    /// Files in the batch.
    pub total: usize,
}

impl LoadProgress {
    /// Completion percentage rounded to the nearest integer, 0-100.
    /// An empty batch reads as complete.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // capped at 100
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            100
        } else {
            ((self.processed * 100 + self.total / 2) / self.total).min(100) as u8
        }
    }
}

/// Ordered, append-only collection of imported records.
///
/// Records keep their insertion order for the whole session; nothing is
/// removed or reordered, so an id lookup is always the authoritative
/// position even while later batches append behind it.
#[derive(Debug, Default)]
pub struct GalleryStore {
    records: Vec<ImageRecord>,
    loading: bool,
    progress: LoadProgress,
}

impl GalleryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a batch of `total` files as in flight and resets progress.
    pub fn begin_batch(&mut self, total: usize) {
        self.loading = true;
        self.progress = LoadProgress {
            processed: 0,
            total,
        };
    }

    /// Raises the processed counter to `processed`.
    ///
    /// The counter never moves backwards and never exceeds the batch
    /// total, whatever order completion reports arrive in.
    pub fn note_progress(&mut self, processed: usize) {
        self.progress.processed = self
            .progress
            .processed
            .max(processed)
            .min(self.progress.total);
    }

    /// Appends a single finished record mid-batch and counts it as
    /// processed.
    pub fn record_completed(&mut self, record: ImageRecord) {
        self.records.push(record);
        self.progress.processed = (self.progress.processed + 1).min(self.progress.total);
    }

    /// Absorbs the ordered results of a finished batch and closes it.
    ///
    /// `records` must not contain records already appended through
    /// [`Self::record_completed`]. The batch closes as fully processed
    /// even when some of its files were skipped.
    pub fn end_batch(&mut self, records: Vec<ImageRecord>) {
        self.records.extend(records);
        self.progress.processed = self.progress.total;
        self.loading = false;
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Position of a record in insertion order.
    #[must_use]
    pub fn index_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Record at a given insertion position.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether an import batch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Progress of the current batch.
    #[must_use]
    pub fn progress(&self) -> LoadProgress {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::thumbnail::generate_from_bytes;
    use std::io::Cursor;
    use std::path::Path;

    fn png_bytes() -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        image_rs::RgbaImage::from_pixel(4, 4, image_rs::Rgba([1, 2, 3, 255]))
            .write_to(&mut cursor, image_rs::ImageFormat::Png)
            .expect("failed to encode test png");
        cursor.into_inner()
    }

    fn test_record(name: &str) -> ImageRecord {
        let (thumbnail, full) =
            generate_from_bytes(Path::new(name), png_bytes()).expect("generate test record");
        ImageRecord::new(thumbnail, full)
    }

    #[test]
    fn new_store_is_empty_and_idle() {
        let store = GalleryStore::new();
        assert!(store.is_empty());
        assert!(!store.is_loading());
        assert_eq!(store.progress(), LoadProgress::default());
    }

    #[test]
    fn begin_batch_resets_progress_and_marks_loading() {
        let mut store = GalleryStore::new();
        store.begin_batch(5);

        assert!(store.is_loading());
        assert_eq!(store.progress().total, 5);
        assert_eq!(store.progress().processed, 0);
    }

    #[test]
    fn progress_is_monotonic_under_out_of_order_reports() {
        let mut store = GalleryStore::new();
        store.begin_batch(5);

        store.note_progress(3);
        store.note_progress(1);
        assert_eq!(store.progress().processed, 3);

        store.note_progress(4);
        assert_eq!(store.progress().processed, 4);
    }

    #[test]
    fn progress_never_exceeds_the_batch_total() {
        let mut store = GalleryStore::new();
        store.begin_batch(2);

        store.note_progress(10);
        assert_eq!(store.progress().processed, 2);
    }

    #[test]
    fn percent_rounds_to_nearest_and_saturates() {
        let one_third = LoadProgress {
            processed: 1,
            total: 3,
        };
        assert_eq!(one_third.percent(), 33);

        let two_thirds = LoadProgress {
            processed: 2,
            total: 3,
        };
        assert_eq!(two_thirds.percent(), 67);

        let done = LoadProgress {
            processed: 3,
            total: 3,
        };
        assert_eq!(done.percent(), 100);
    }

    #[test]
    fn empty_batch_reads_as_complete() {
        let progress = LoadProgress {
            processed: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn end_batch_appends_in_order_and_stops_loading() {
        let mut store = GalleryStore::new();
        store.begin_batch(2);

        let first = test_record("a.png");
        let second = test_record("b.png");
        let ids = [first.id(), second.id()];
        store.end_batch(vec![first, second]);

        assert!(!store.is_loading());
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id(), ids[0]);
        assert_eq!(store.records()[1].id(), ids[1]);
        assert_eq!(store.progress().percent(), 100);
    }

    #[test]
    fn later_batches_append_after_earlier_records() {
        let mut store = GalleryStore::new();

        store.begin_batch(1);
        let first = test_record("a.png");
        let first_id = first.id();
        store.end_batch(vec![first]);

        store.begin_batch(1);
        let second = test_record("b.png");
        let second_id = second.id();
        store.end_batch(vec![second]);

        // Earlier records keep their positions across batches
        assert_eq!(store.index_of(first_id), Some(0));
        assert_eq!(store.index_of(second_id), Some(1));
    }

    #[test]
    fn record_completed_appends_and_counts() {
        let mut store = GalleryStore::new();
        store.begin_batch(2);

        let record = test_record("a.png");
        let id = record.id();
        store.record_completed(record);

        assert_eq!(store.len(), 1);
        assert_eq!(store.progress().processed, 1);
        assert!(store.get(id).is_some());
        assert!(store.is_loading());
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        let mut store = GalleryStore::new();
        store.begin_batch(1);
        let stray = test_record("elsewhere.png");
        store.end_batch(vec![test_record("a.png")]);

        assert!(store.get(stray.id()).is_none());
        assert!(store.index_of(stray.id()).is_none());
    }
}
