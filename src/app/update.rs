// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Handlers receive an `UpdateContext` of mutable borrows so the individual
//! transitions stay testable without constructing a full `App`.

use super::Message;
use crate::config::SortOrder;
use crate::error::Error;
use crate::gallery::{GalleryNavigator, GalleryStore, ImageRecord};
use crate::media::{self, FullImage, ImageData, ImportEvent, PreloadCache, RasterPool, Thumbnail};
use crate::ui::masonry::{self, MasonryLayout};
use crate::ui::notifications::{self, Notification};
use crate::ui::{grid, viewer};
use crate::viewport::{RenderGate, ViewportBand};
use iced::{Size, Task};
use std::path::{Path, PathBuf};

/// Longest file name shown inside a notification before truncation.
const MAX_FILENAME_LEN: usize = 40;

/// Mutable view over the application state handed to the update handlers.
pub struct UpdateContext<'a> {
    pub store: &'a mut GalleryStore,
    pub navigator: &'a mut GalleryNavigator,
    pub gate: &'a mut RenderGate,
    pub layout: &'a mut MasonryLayout,
    pub preload: &'a mut PreloadCache,
    pub pool: &'a RasterPool,
    pub notifications: &'a mut notifications::Manager,
    pub full_image: &'a mut Option<ImageData>,
    pub window_size: &'a mut Size,
    pub scroll_offset: &'a mut f32,
    pub sort_order: SortOrder,
}

/// Handles gallery grid messages.
pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::OpenFolderRequested => open_folder_dialog(ctx),
        grid::Message::CellClicked(id) => {
            ctx.navigator.open(id, ctx.store);
            begin_viewing(ctx)
        }
        grid::Message::Scrolled { offset, bounds } => {
            *ctx.scroll_offset = offset.y;
            ctx.gate.observe(
                &ctx.layout.placements,
                ViewportBand::new(offset.y, offset.y + bounds.height),
            );
            Task::none()
        }
    }
}

/// Handles viewer overlay messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match message {
        viewer::Message::AdvanceRequested => {
            if ctx.navigator.advance(ctx.store).is_some() {
                begin_viewing(ctx)
            } else {
                // The selection no longer resolves; close instead of
                // pointing the viewer at nothing.
                close_viewer(ctx)
            }
        }
        viewer::Message::RetreatRequested => {
            if ctx.navigator.retreat(ctx.store).is_some() {
                begin_viewing(ctx)
            } else {
                close_viewer(ctx)
            }
        }
        viewer::Message::CloseRequested => close_viewer(ctx),
        // Clicks on the image frame are captured so they never fall through
        // to the backdrop and close the overlay.
        viewer::Message::FramePressed => Task::none(),
    }
}

fn close_viewer(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.navigator.close();
    *ctx.full_image = None;
    Task::none()
}

/// Handles the result of the folder picker dialog.
pub fn handle_folder_picked(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // Picker dismissed
        return Task::none();
    };
    start_import(ctx, path)
}

/// Handles a file or folder dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if path.is_dir() {
        return start_import(ctx, path);
    }

    if !media::is_image_file(&path) {
        ctx.notifications.push(Notification::warning(format!(
            "{} is not a supported image",
            file_name_of(&path)
        )));
        return Task::none();
    }

    let pool = ctx.pool.clone();
    Task::perform(
        async move { pool.generate(path).await },
        Message::DroppedImageReady,
    )
}

/// Kicks off a streaming folder import unless one is already running.
pub fn start_import(ctx: &mut UpdateContext<'_>, folder: PathBuf) -> Task<Message> {
    if ctx.store.is_loading() {
        ctx.notifications
            .push(Notification::info("An import is already running"));
        return Task::none();
    }

    Task::run(
        media::import::stream(folder, ctx.sort_order, ctx.pool.clone()),
        Message::Import,
    )
}

/// Handles events from a running folder import.
///
/// Records only land at the end of the batch so the gallery keeps its scan
/// order; thumbnails finish decoding in whatever order the pool schedules.
pub fn handle_import_event(ctx: &mut UpdateContext<'_>, event: ImportEvent) -> Task<Message> {
    match event {
        ImportEvent::Started { total } => {
            ctx.store.begin_batch(total);
        }
        ImportEvent::Progress { processed, .. } => {
            ctx.store.note_progress(processed);
        }
        ImportEvent::Finished { images, skipped } => {
            let imported = images.len();
            let records: Vec<ImageRecord> = images
                .into_iter()
                .map(|(thumbnail, full)| ImageRecord::new(thumbnail, full))
                .collect();
            ctx.store.end_batch(records);
            relayout(ctx);

            if !skipped.is_empty() {
                ctx.notifications.push(Notification::warning(format!(
                    "Could not load {}",
                    format_skipped_files(&skipped)
                )));
            }
            if imported > 0 {
                let noun = if imported == 1 { "image" } else { "images" };
                ctx.notifications
                    .push(Notification::success(format!("Loaded {imported} {noun}")));
            } else if skipped.is_empty() {
                ctx.notifications
                    .push(Notification::info("No images found in this folder"));
            }
        }
    }
    Task::none()
}

/// Handles the result of importing a single dropped image.
pub fn handle_dropped_image(
    ctx: &mut UpdateContext<'_>,
    result: Result<(Thumbnail, FullImage), Error>,
) -> Task<Message> {
    match result {
        Ok((thumbnail, full)) => {
            ctx.store.record_completed(ImageRecord::new(thumbnail, full));
            relayout(ctx);
        }
        Err(err) => {
            eprintln!("Failed to import dropped image: {err:?}");
            ctx.notifications
                .push(Notification::error("Could not load the dropped image"));
        }
    }
    Task::none()
}

/// Handles the full-resolution image arriving for the viewer.
///
/// Stale results are cached but not displayed: the user may have stepped to
/// another record while the decode was in flight.
pub fn handle_full_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            let current = ctx
                .navigator
                .selected()
                .and_then(|id| ctx.store.get(id))
                .map(|record| record.full.path.clone());
            ctx.preload.insert(path.clone(), image.clone());
            if current.as_deref() == Some(path.as_path()) {
                *ctx.full_image = Some(image);
            }
        }
        Err(err) => {
            eprintln!("Failed to load full image {}: {err:?}", path.display());
            ctx.notifications.push(Notification::warning(format!(
                "Could not load {}",
                file_name_of(&path)
            )));
        }
    }
    Task::none()
}

/// Handles a neighbor preload finishing. Failures are dropped silently; a
/// miss only means a slower swap if the user navigates there.
pub fn handle_neighbor_preloaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if let Ok(image) = result {
        ctx.preload.insert(path, image);
    }
    Task::none()
}

/// Handles window resizes by recomputing the masonry layout for the new width.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    relayout(ctx);
    Task::none()
}

/// Opens the native folder picker unless an import is already running.
fn open_folder_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.store.is_loading() {
        ctx.notifications
            .push(Notification::info("An import is already running"));
        return Task::none();
    }

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Choose an image folder")
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

/// Starts loading the full-resolution image for the open record and preloads
/// its circular neighbors. The grid thumbnail stands in until the swap lands.
fn begin_viewing(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(record) = ctx.navigator.selected().and_then(|id| ctx.store.get(id)) else {
        return Task::none();
    };
    let path = record.full.path.clone();

    *ctx.full_image = ctx.preload.get(&path);
    let load = if ctx.full_image.is_some() {
        Task::none()
    } else {
        Task::perform(media::preload::load_for_preload(path), |(path, result)| {
            Message::FullImageLoaded { path, result }
        })
    };

    Task::batch([load, preload_neighbors(ctx)])
}

/// Issues background loads for the records adjacent to the open one.
fn preload_neighbors(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.preload.is_enabled() {
        return Task::none();
    }
    let Some((previous, next)) = ctx.navigator.neighbors(ctx.store) else {
        return Task::none();
    };

    let candidates: Vec<PathBuf> = [previous, next]
        .into_iter()
        .filter_map(|id| ctx.store.get(id))
        .map(|record| record.full.path.clone())
        .collect();

    let loads: Vec<Task<Message>> = ctx
        .preload
        .paths_to_preload(&candidates)
        .into_iter()
        .map(|path| {
            Task::perform(media::preload::load_for_preload(path), |(path, result)| {
                Message::NeighborPreloaded { path, result }
            })
        })
        .collect();

    Task::batch(loads)
}

/// Recomputes the masonry layout, then re-observes the current viewport so
/// cells that became visible through the change reveal immediately.
fn relayout(ctx: &mut UpdateContext<'_>) {
    *ctx.layout = masonry::layout(ctx.store.records(), ctx.window_size.width);
    ctx.gate.observe(
        &ctx.layout.placements,
        ViewportBand::new(
            *ctx.scroll_offset,
            *ctx.scroll_offset + ctx.window_size.height,
        ),
    );
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("Unknown")
        .to_string()
}

fn truncate_file_name(name: &str) -> String {
    // nth is zero-based, so this probes for a character past the budget
    if name.chars().nth(MAX_FILENAME_LEN).is_none() {
        return name.to_string();
    }
    let head: String = name.chars().take(MAX_FILENAME_LEN - 1).collect();
    head + "…"
}

/// Formats the skipped-files list for a notification.
///
/// Compact format: one or two names are shown in full, longer lists collapse
/// to the first name plus a count.
pub fn format_skipped_files(skipped: &[String]) -> String {
    match skipped.len() {
        0 => String::new(),
        1 => truncate_file_name(&skipped[0]),
        2 => format!(
            "{}, {}",
            truncate_file_name(&skipped[0]),
            truncate_file_name(&skipped[1])
        ),
        n => format!("{} and {} more", truncate_file_name(&skipped[0]), n - 1),
    }
}
