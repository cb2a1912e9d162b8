// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks over the public crate surface: a folder on disk
//! goes through the import stream into a gallery store, gets laid out,
//! revealed, and navigated the way the application drives it.

use futures_util::StreamExt;
use iced_mosaic::gallery::{GalleryNavigator, GalleryStore, ImageRecord};
use iced_mosaic::media::{self, ImportEvent, PreloadCache, RasterPool};
use iced_mosaic::ui::masonry;
use iced_mosaic::viewport::{RenderGate, ViewportBand};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Writes a real PNG of the given size into `dir`.
fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([40, 80, 120, 255]))
        .save(&path)
        .expect("write sample png");
    path
}

#[tokio::test]
async fn folder_import_feeds_the_gallery_end_to_end() {
    let dir = tempdir().expect("temp dir");
    write_png(dir.path(), "portrait.png", 6, 8);
    write_png(dir.path(), "square.png", 8, 8);
    write_png(dir.path(), "wide.png", 8, 6);
    fs::write(dir.path().join("broken.png"), b"not a png").expect("write broken file");
    fs::write(dir.path().join("notes.txt"), b"ignored").expect("write text file");

    // 1. Drive the import stream to completion.
    let events: Vec<ImportEvent> = media::import::stream(
        dir.path().to_path_buf(),
        iced_mosaic::config::SortOrder::Alphabetical,
        RasterPool::new(2),
    )
    .collect()
    .await;

    // 2. Replay the events into a store the way the application does.
    let mut store = GalleryStore::new();
    for event in events {
        match event {
            ImportEvent::Started { total } => {
                assert_eq!(total, 4, "broken.png counts, notes.txt does not");
                store.begin_batch(total);
            }
            ImportEvent::Progress { processed, .. } => {
                store.note_progress(processed);
                assert!(store.is_loading());
                assert!(store.progress().percent() <= 100);
            }
            ImportEvent::Finished { images, skipped } => {
                assert_eq!(skipped, vec!["broken.png".to_string()]);
                let records = images
                    .into_iter()
                    .map(|(thumbnail, full)| ImageRecord::new(thumbnail, full))
                    .collect();
                store.end_batch(records);
            }
        }
    }

    assert!(!store.is_loading());
    assert_eq!(store.progress().percent(), 100);
    let names: Vec<String> = store.records().iter().map(ImageRecord::file_name).collect();
    assert_eq!(names, vec!["portrait.png", "square.png", "wide.png"]);

    // 3. Lay the records out and reveal the initial viewport band.
    let layout = masonry::layout(store.records(), 1280.0);
    assert_eq!(layout.placements.len(), 3);
    assert!(layout.content_height > 0.0);

    let mut gate = RenderGate::new();
    gate.observe(&layout.placements, ViewportBand::new(0.0, 800.0));
    assert_eq!(gate.revealed_count(), 3);
    assert!(!gate.has_pending(&layout.placements));

    // 4. Navigate a full circular lap.
    let first = store.records()[0].id();
    let second = store.records()[1].id();
    let last = store.records()[2].id();

    let mut navigator = GalleryNavigator::new();
    navigator.open(first, &store);
    assert_eq!(navigator.neighbors(&store), Some((last, second)));

    assert_eq!(navigator.advance(&store), Some(second));
    assert_eq!(navigator.advance(&store), Some(last));
    assert_eq!(navigator.advance(&store), Some(first));
    assert_eq!(navigator.retreat(&store), Some(last));

    dir.close().expect("close temp dir");
}

#[tokio::test]
async fn full_resolution_pixels_load_from_disk() {
    let dir = tempdir().expect("temp dir");
    let path = write_png(dir.path(), "photo.png", 32, 20);

    let image = media::load_full_image(path)
        .await
        .expect("load full image");
    assert_eq!((image.width, image.height), (32, 20));
    assert_eq!(image.byte_size(), 32 * 20 * 4);

    let missing = media::load_full_image(dir.path().join("gone.png")).await;
    assert!(missing.is_err());

    dir.close().expect("close temp dir");
}

#[tokio::test]
async fn neighbor_preload_fills_the_cache_for_the_viewer() {
    let dir = tempdir().expect("temp dir");
    let current = write_png(dir.path(), "current.png", 16, 16);
    let next = write_png(dir.path(), "next.png", 16, 16);

    let mut cache = PreloadCache::with_defaults();
    let candidates = vec![current.clone(), next.clone()];
    assert_eq!(cache.paths_to_preload(&candidates), candidates);

    // Preload one neighbor the way the update loop does.
    let (path, result) = media::preload::load_for_preload(next.clone()).await;
    cache.insert(path, result.expect("preload neighbor"));

    // Only the not-yet-cached path is left to fetch.
    assert_eq!(cache.paths_to_preload(&candidates), vec![current]);

    // The viewer's lookup is an instant hit with the decoded pixels.
    let hit = cache.get(&next).expect("preloaded image is cached");
    assert_eq!((hit.width, hit.height), (16, 16));

    dir.close().expect("close temp dir");
}
