// SPDX-License-Identifier: MPL-2.0
//! Viewer navigation over the gallery's insertion order.
//!
//! The navigator holds an id, not an index: every step re-resolves the
//! id against the store's current order, so records appended since the
//! viewer opened take part in prev/next immediately.

use crate::gallery::record::RecordId;
use crate::gallery::store::GalleryStore;

/// Snapshot of the viewer position for captions and controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerPosition {
    /// 1-based position of the selection in insertion order.
    pub position: usize,
    /// Total records at snapshot time.
    pub total: usize,
}

/// Tracks which record the viewer shows, if any.
///
/// `None` means the viewer is closed and the grid has the input; an id
/// means the viewer is open on that record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryNavigator {
    selected: Option<RecordId>,
}

impl GalleryNavigator {
    /// Creates a closed navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the viewer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Currently selected record, if the viewer is open.
    #[must_use]
    pub fn selected(&self) -> Option<RecordId> {
        self.selected
    }

    /// Opens the viewer on `id`. Unknown ids are ignored.
    pub fn open(&mut self, id: RecordId, store: &GalleryStore) {
        if store.get(id).is_some() {
            self.selected = Some(id);
        }
    }

    /// Closes the viewer, forgetting the selection.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Steps to the next record in insertion order, wrapping at the end.
    ///
    /// Returns the new selection. With a single record the selection
    /// stays put; with the viewer closed, nothing happens.
    pub fn advance(&mut self, store: &GalleryStore) -> Option<RecordId> {
        let index = self.selected_index(store)?;
        self.select_at(store, (index + 1) % store.len())
    }

    /// Steps to the previous record, wrapping at the start.
    pub fn retreat(&mut self, store: &GalleryStore) -> Option<RecordId> {
        let index = self.selected_index(store)?;
        let len = store.len();
        self.select_at(store, (index + len - 1) % len)
    }

    /// Ids adjacent to the selection as `(previous, next)`, for the
    /// preload planner. With a single record both are the selection.
    #[must_use]
    pub fn neighbors(&self, store: &GalleryStore) -> Option<(RecordId, RecordId)> {
        let index = self.selected_index(store)?;
        let len = store.len();
        let previous = store.get_at((index + len - 1) % len)?.id();
        let next = store.get_at((index + 1) % len)?.id();
        Some((previous, next))
    }

    /// 1-based position snapshot for the caption.
    #[must_use]
    pub fn position(&self, store: &GalleryStore) -> Option<ViewerPosition> {
        let index = self.selected_index(store)?;
        Some(ViewerPosition {
            position: index + 1,
            total: store.len(),
        })
    }

    /// Resolves the selection to its current index, if both exist.
    fn selected_index(&self, store: &GalleryStore) -> Option<usize> {
        self.selected.and_then(|id| store.index_of(id))
    }

    fn select_at(&mut self, store: &GalleryStore, index: usize) -> Option<RecordId> {
        let id = store.get_at(index)?.id();
        self.selected = Some(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::record::ImageRecord;
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

    fn store_with(names: &[&str]) -> GalleryStore {
        let mut store = GalleryStore::new();
        store.begin_batch(names.len());
        store.end_batch(names.iter().map(|name| test_record(name)).collect());
        store
    }

    fn id_at(store: &GalleryStore, index: usize) -> RecordId {
        store.records()[index].id()
    }

    #[test]
    fn open_selects_known_records_only() {
        let store = store_with(&["a.png", "b.png"]);
        let elsewhere = test_record("elsewhere.png");

        let mut navigator = GalleryNavigator::new();
        navigator.open(elsewhere.id(), &store);
        assert!(!navigator.is_open());

        navigator.open(id_at(&store, 0), &store);
        assert_eq!(navigator.selected(), Some(id_at(&store, 0)));
    }

    #[test]
    fn close_forgets_the_selection() {
        let store = store_with(&["a.png"]);
        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 0), &store);

        navigator.close();
        assert!(!navigator.is_open());
        assert_eq!(navigator.selected(), None);
    }

    #[test]
    fn advance_walks_forward_and_wraps() {
        let store = store_with(&["a.png", "b.png", "c.png"]);
        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 0), &store);

        assert_eq!(navigator.advance(&store), Some(id_at(&store, 1)));
        assert_eq!(navigator.advance(&store), Some(id_at(&store, 2)));
        assert_eq!(navigator.advance(&store), Some(id_at(&store, 0)));
    }

    #[test]
    fn retreat_wraps_to_the_last_record() {
        let store = store_with(&["a.png", "b.png", "c.png"]);
        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 0), &store);

        assert_eq!(navigator.retreat(&store), Some(id_at(&store, 2)));
        assert_eq!(navigator.retreat(&store), Some(id_at(&store, 1)));
    }

    #[test]
    fn single_record_steps_stay_put() {
        let store = store_with(&["only.png"]);
        let only = id_at(&store, 0);
        let mut navigator = GalleryNavigator::new();
        navigator.open(only, &store);

        assert_eq!(navigator.advance(&store), Some(only));
        assert_eq!(navigator.retreat(&store), Some(only));
        assert_eq!(navigator.selected(), Some(only));
    }

    #[test]
    fn closed_viewer_ignores_steps() {
        let store = store_with(&["a.png", "b.png"]);
        let mut navigator = GalleryNavigator::new();

        assert_eq!(navigator.advance(&store), None);
        assert_eq!(navigator.retreat(&store), None);
        assert!(!navigator.is_open());
    }

    #[test]
    fn records_appended_while_open_join_the_cycle() {
        let mut store = GalleryStore::new();
        store.begin_batch(2);
        store.end_batch(vec![test_record("a.png"), test_record("b.png")]);

        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 1), &store);

        // A second import lands while the viewer is open
        store.begin_batch(1);
        store.end_batch(vec![test_record("c.png")]);

        // The step resolves against the grown list, not a stale index
        assert_eq!(navigator.advance(&store), Some(id_at(&store, 2)));
        assert_eq!(navigator.advance(&store), Some(id_at(&store, 0)));
    }

    #[test]
    fn retreat_from_first_reaches_a_newly_appended_record() {
        let mut store = GalleryStore::new();
        store.begin_batch(2);
        store.end_batch(vec![test_record("a.png"), test_record("b.png")]);

        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 0), &store);

        store.begin_batch(1);
        store.end_batch(vec![test_record("z.png")]);

        assert_eq!(navigator.retreat(&store), Some(id_at(&store, 2)));
    }

    #[test]
    fn neighbors_surround_the_selection() {
        let store = store_with(&["a.png", "b.png", "c.png"]);
        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 1), &store);

        assert_eq!(
            navigator.neighbors(&store),
            Some((id_at(&store, 0), id_at(&store, 2)))
        );
    }

    #[test]
    fn neighbors_wrap_at_the_edges() {
        let store = store_with(&["a.png", "b.png", "c.png"]);
        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 0), &store);

        assert_eq!(
            navigator.neighbors(&store),
            Some((id_at(&store, 2), id_at(&store, 1)))
        );
    }

    #[test]
    fn single_record_is_its_own_neighbor() {
        let store = store_with(&["only.png"]);
        let only = id_at(&store, 0);
        let mut navigator = GalleryNavigator::new();
        navigator.open(only, &store);

        assert_eq!(navigator.neighbors(&store), Some((only, only)));
    }

    #[test]
    fn position_is_one_based() {
        let store = store_with(&["a.png", "b.png", "c.png"]);
        let mut navigator = GalleryNavigator::new();
        navigator.open(id_at(&store, 1), &store);

        assert_eq!(
            navigator.position(&store),
            Some(ViewerPosition {
                position: 2,
                total: 3
            })
        );
    }
}
