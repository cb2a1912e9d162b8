// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and viewer.
//!
//! The `App` struct wires together the gallery store, the masonry layout,
//! the reveal gate, and the preload cache, and translates messages into side
//! effects like folder imports or full-image loads. This module keeps policy
//! decisions (window sizing, tick cadence, startup behavior) close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, GalleryConfig, SortOrder};
use crate::gallery::{GalleryNavigator, GalleryStore};
use crate::media::preload::{DEFAULT_MAX_IMAGES, DEFAULT_PRELOAD_CACHE_BYTES};
use crate::media::{ImageData, PreloadCache, PreloadConfig, RasterPool};
use crate::ui::masonry::{self, MasonryLayout};
use crate::ui::notifications::{self, Notification};
use crate::ui::placeholder::PULSE_SPEED;
use crate::ui::theming::ThemeMode;
use crate::viewport::RenderGate;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;

/// Floor keeps the narrowest single-column breakpoint reachable.
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Title shown when no image is open.
const WINDOW_TITLE: &str = "Iced Mosaic";

/// Root application state bridging the gallery grid, the viewer overlay,
/// and the settings file.
pub struct App {
    store: GalleryStore,
    navigator: GalleryNavigator,
    /// One-shot reveal gate for lazy thumbnail rendering.
    gate: RenderGate,
    /// Masonry geometry for the current record set and window width.
    layout: MasonryLayout,
    /// LRU cache of decoded full-resolution images for instant swaps.
    preload: PreloadCache,
    /// Bounded decode pool shared by folder imports and drops.
    pool: RasterPool,
    /// Transient toasts layered over whichever view is showing.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
    /// Full-resolution image for the open record, once decoded.
    full_image: Option<ImageData>,
    window_size: Size,
    /// Vertical scroll offset of the gallery scrollable.
    scroll_offset: f32,
    /// Placeholder pulse animation phase, in radians.
    pulse_phase: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("records", &self.store.len())
            .field("viewer_open", &self.navigator.is_open())
            .field("theme_mode", &self.theme_mode)
            .field("sort_order", &self.sort_order)
            .finish_non_exhaustive()
    }
}

/// Builds the preload cache configuration from persisted settings.
fn preload_config(gallery: &GalleryConfig) -> PreloadConfig {
    if !gallery.preload_enabled.unwrap_or(true) {
        return PreloadConfig::disabled();
    }
    let max_bytes = gallery
        .preload_cache_mb
        .map_or(DEFAULT_PRELOAD_CACHE_BYTES, |mb| mb * 1024 * 1024);
    let max_images = gallery.preload_max_images.unwrap_or(DEFAULT_MAX_IMAGES);
    PreloadConfig::new(max_bytes, max_images)
}

/// Initial window geometry and icon.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Hands control to the iced runtime; `main.rs` calls this once flags are
/// parsed.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced's boot argument must be Fn, so the one-shot flags are parked in
    // a RefCell<Option<_>> and taken on the single boot call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().expect("boot runs once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            store: GalleryStore::default(),
            navigator: GalleryNavigator::default(),
            gate: RenderGate::default(),
            layout: masonry::layout(&[], WINDOW_DEFAULT_WIDTH as f32),
            preload: PreloadCache::with_defaults(),
            pool: RasterPool::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            sort_order: SortOrder::default(),
            full_image: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            scroll_offset: 0.0,
            pulse_phase: 0.0,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off an import based
    /// on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            theme_mode: config.general.theme_mode,
            sort_order: flags
                .sort_order
                .or(config.gallery.sort_order)
                .unwrap_or_default(),
            preload: PreloadCache::new(preload_config(&config.gallery)),
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        let task = match flags.path {
            Some(path) => {
                update::handle_file_dropped(&mut app.update_context(), PathBuf::from(path))
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Bundles mutable borrows of the state for the update handlers.
    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            store: &mut self.store,
            navigator: &mut self.navigator,
            gate: &mut self.gate,
            layout: &mut self.layout,
            preload: &mut self.preload,
            pool: &self.pool,
            notifications: &mut self.notifications,
            full_image: &mut self.full_image,
            window_size: &mut self.window_size,
            scroll_offset: &mut self.scroll_offset,
            sort_order: self.sort_order,
        }
    }

    fn title(&self) -> String {
        match self.navigator.selected().and_then(|id| self.store.get(id)) {
            Some(record) => format!("{} - {WINDOW_TITLE}", record.file_name()),
            None => WINDOW_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        // The pulse only needs repaints while placeholders are on screen.
        let has_placeholders =
            !self.navigator.is_open() && self.gate.has_pending(&self.layout.placements);

        Subscription::batch([
            subscription::events(self.navigator.is_open()),
            subscription::tick(
                self.store.is_loading(),
                self.notifications.has_notifications(),
                has_placeholders,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::FolderPicked(path) => update::handle_folder_picked(&mut ctx, path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Import(event) => update::handle_import_event(&mut ctx, event),
            Message::DroppedImageReady(result) => update::handle_dropped_image(&mut ctx, result),
            Message::FullImageLoaded { path, result } => {
                update::handle_full_image_loaded(&mut ctx, path, result)
            }
            Message::NeighborPreloaded { path, result } => {
                update::handle_neighbor_preloaded(&mut ctx, path, result)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.pulse_phase = (self.pulse_phase + PULSE_SPEED) % std::f32::consts::TAU;
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            store: &self.store,
            layout: &self.layout,
            gate: &self.gate,
            navigator: &self.navigator,
            notifications: &self.notifications,
            full_image: self.full_image.as_ref(),
            pulse_phase: self.pulse_phase,
            dark_mode: self.theme_mode.is_dark(),
        })
    }
}
