// SPDX-License-Identifier: MPL-2.0
//! Folder import: recursive scan plus the streaming thumbnail batch.
//!
//! Scanning walks the folder tree, keeps supported image files and sorts
//! them into presentation order. The import stream then fans the sorted
//! paths out over the [`RasterPool`], reports progress as individual
//! files finish (completion order), and delivers the final results in
//! scan order regardless of which file finished first.

use crate::config::SortOrder;
use crate::media::{self, FullImage, RasterPool, Thumbnail};
use futures_util::stream::{FuturesUnordered, StreamExt};
use iced::futures::channel::mpsc;
use iced::futures::SinkExt;
use iced::stream;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Progress and completion events emitted by [`stream`].
#[derive(Debug, Clone)]
pub enum ImportEvent {
    /// Scan finished; `total` files enter the batch.
    Started { total: usize },
    /// One more file finished (successfully or not).
    Progress { processed: usize, total: usize },
    /// Batch complete. `images` is in scan order; files that failed to
    /// decode are absent and listed by name in `skipped`.
    Finished {
        images: Vec<(Thumbnail, FullImage)>,
        skipped: Vec<String>,
    },
}

/// Collects every supported image file under `root`, sorted.
///
/// Walks recursively, skipping entries it cannot read. A `root` that is
/// itself a supported image file yields that single file; anything else
/// unreadable or unsupported yields an empty list.
#[must_use]
pub fn scan_folder(root: &Path, sort_order: SortOrder) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| media::is_image_file(path))
        .collect();

    sort_files(&mut files, sort_order);
    files
}

/// Sorts scanned paths according to the configured sort order.
fn sort_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}

/// Streams one folder import: scan, generate thumbnails, report.
///
/// Progress counts completions as they happen, so the percentage moves
/// even when an early file is slow. Results are withheld until the whole
/// batch is done and then delivered at once, ordered by scan position;
/// files that fail to decode are dropped from the results and named in
/// [`ImportEvent::Finished::skipped`].
pub fn stream(
    folder: PathBuf,
    sort_order: SortOrder,
    pool: RasterPool,
) -> impl futures_util::Stream<Item = ImportEvent> {
    stream::channel(100, move |mut output: mpsc::Sender<ImportEvent>| async move {
        let paths = tokio::task::spawn_blocking(move || scan_folder(&folder, sort_order))
            .await
            .unwrap_or_default();

        let total = paths.len();
        let _ = output.send(ImportEvent::Started { total }).await;

        let mut tasks = FuturesUnordered::new();
        for (index, path) in paths.into_iter().enumerate() {
            let pool = pool.clone();
            tasks.push(async move {
                let name = display_name(&path);
                let result = pool.generate(path).await;
                (index, name, result)
            });
        }

        // Slots keep scan order; completion order only drives progress
        let mut slots: Vec<Option<(Thumbnail, FullImage)>> = Vec::new();
        slots.resize_with(total, || None);
        let mut skipped = Vec::new();
        let mut processed = 0;

        while let Some((index, name, result)) = tasks.next().await {
            processed += 1;
            match result {
                Ok(pair) => slots[index] = Some(pair),
                Err(_) => skipped.push(name),
            }
            let _ = output
                .send(ImportEvent::Progress { processed, total })
                .await;
        }

        let images = slots.into_iter().flatten().collect();
        let _ = output.send(ImportEvent::Finished { images, skipped }).await;
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn scratch_dir() -> tempfile::TempDir {
        tempdir().expect("temp dir")
    }

    fn place_png(dir: &Path, name: &str) -> PathBuf {
        let target = dir.join(name);
        // The JPEG encoder rejects alpha channels
        image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255])))
            .into_rgb8()
            .save(&target)
            .expect("write sample png");
        target
    }

    #[test]
    fn scan_keeps_only_supported_images() {
        let temp_dir = scratch_dir();
        place_png(temp_dir.path(), "a.png");
        place_png(temp_dir.path(), "b.jpg");
        fs::write(temp_dir.path().join("notes.txt"), b"text").expect("write txt");

        let files = scan_folder(temp_dir.path(), SortOrder::Alphabetical);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn scan_recurses_into_subfolders() {
        let temp_dir = scratch_dir();
        place_png(temp_dir.path(), "top.png");
        let nested = temp_dir.path().join("nested").join("deeper");
        fs::create_dir_all(&nested).expect("create nested dirs");
        place_png(&nested, "below.png");

        let files = scan_folder(temp_dir.path(), SortOrder::Alphabetical);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn scan_sorts_alphabetically_by_file_name() {
        let temp_dir = scratch_dir();
        let c = place_png(temp_dir.path(), "c.png");
        let a = place_png(temp_dir.path(), "a.png");
        let b = place_png(temp_dir.path(), "b.png");

        let files = scan_folder(temp_dir.path(), SortOrder::Alphabetical);
        assert_eq!(files, vec![a, b, c]);
    }

    #[test]
    fn scan_of_single_image_file_yields_that_file() {
        let temp_dir = scratch_dir();
        let only = place_png(temp_dir.path(), "only.png");

        let files = scan_folder(&only, SortOrder::Alphabetical);
        assert_eq!(files, vec![only]);
    }

    #[test]
    fn scan_of_missing_folder_is_empty() {
        let temp_dir = scratch_dir();
        let files = scan_folder(&temp_dir.path().join("gone"), SortOrder::Alphabetical);
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn stream_reports_progress_and_ordered_results() {
        let temp_dir = scratch_dir();
        place_png(temp_dir.path(), "b.png");
        place_png(temp_dir.path(), "a.png");
        fs::write(temp_dir.path().join("corrupt.png"), b"not an image").expect("write corrupt");
        fs::write(temp_dir.path().join("skip.txt"), b"text").expect("write txt");

        let events: Vec<ImportEvent> =
            stream(temp_dir.path().to_path_buf(), SortOrder::Alphabetical, RasterPool::new(2))
                .collect()
                .await;

        // Started, one Progress per file, Finished
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], ImportEvent::Started { total: 3 }));

        for (step, event) in events[1..4].iter().enumerate() {
            match event {
                ImportEvent::Progress { processed, total } => {
                    assert_eq!(*processed, step + 1);
                    assert_eq!(*total, 3);
                }
                other => panic!("expected Progress, got {other:?}"),
            }
        }

        match &events[4] {
            ImportEvent::Finished { images, skipped } => {
                // Scan order survives whatever order generation finished in
                let names: Vec<String> =
                    images.iter().map(|(_, full)| full.file_name()).collect();
                assert_eq!(names, vec!["a.png", "b.png"]);
                assert_eq!(skipped, &vec!["corrupt.png".to_string()]);
            }
            other => panic!("expected Finished, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stream_over_empty_folder_finishes_immediately() {
        let temp_dir = scratch_dir();

        let events: Vec<ImportEvent> =
            stream(temp_dir.path().to_path_buf(), SortOrder::Alphabetical, RasterPool::default())
                .collect()
                .await;

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ImportEvent::Started { total: 0 }));
        assert!(matches!(
            &events[1],
            ImportEvent::Finished { images, skipped } if images.is_empty() && skipped.is_empty()
        ));
    }
}
