// SPDX-License-Identifier: MPL-2.0
//! The application message enum and startup flags.

use crate::config::SortOrder;
use crate::error::Error;
use crate::media::{FullImage, ImageData, ImportEvent, Thumbnail};
use crate::ui::grid;
use crate::ui::notifications::NotificationMessage;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Everything `App::update` can react to.
///
/// Component messages (grid, viewer, toasts) are wrapped rather than
/// flattened, so each view keeps its own message type.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Viewer(viewer::Message),
    Notification(NotificationMessage),
    /// Result from the folder picker dialog.
    FolderPicked(Option<PathBuf>),
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
    /// Event from a running folder import.
    Import(ImportEvent),
    /// Result from importing a single dropped image outside a batch.
    DroppedImageReady(Result<(Thumbnail, FullImage), Error>),
    /// Result from loading the full-resolution image for the open viewer.
    FullImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Result from preloading a neighbor image in the background.
    NeighborPreloaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// The window was resized.
    WindowResized(iced::Size),
    Tick(Instant), // Periodic tick for placeholder pulse and notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional folder (or single image) path to import on startup.
    pub path: Option<String>,
    /// Optional sort order override for this session.
    pub sort_order: Option<SortOrder>,
}
