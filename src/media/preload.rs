// SPDX-License-Identifier: MPL-2.0
//! Neighbor preloading for the full-window viewer.
//!
//! Stepping through the gallery should never wait on a decode, so the
//! records on either side of the open one are loaded ahead of time and
//! parked here. The cache is bounded twice over, by a byte budget and by
//! an entry cap, and evicts in least-recently-used order once a limit
//! is hit.

use crate::error::Result;
use crate::media::decode::{self, ImageData};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const MIB: usize = 1024 * 1024;

/// Byte budget applied when settings carry no override (roughly four
/// 1080p decodes).
pub const DEFAULT_PRELOAD_CACHE_BYTES: usize = 32 * MIB;

/// Entry cap applied when settings carry no override.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// Byte budgets outside these bounds are pulled back in by
/// [`PreloadConfig::new`].
pub const CACHE_BYTES_BOUNDS: (usize, usize) = (8 * MIB, 128 * MIB);

/// Bounds for the entry cap.
pub const MAX_IMAGES_BOUNDS: (usize, usize) = (4, 32);

/// Limits for the preload cache, normally derived from settings.
#[derive(Debug, Clone, Copy)]
pub struct PreloadConfig {
    /// Byte budget across all cached decodes.
    pub max_bytes: usize,

    /// Cap on the number of cached decodes.
    pub max_images: usize,

    /// Whether neighbor preloading runs at all.
    pub enabled: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PRELOAD_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl PreloadConfig {
    /// Builds a configuration from settings values, clamping both limits
    /// to their supported bounds.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(CACHE_BYTES_BOUNDS.0, CACHE_BYTES_BOUNDS.1),
            max_images: max_images.clamp(MAX_IMAGES_BOUNDS.0, MAX_IMAGES_BOUNDS.1),
            enabled: true,
        }
    }

    /// A configuration that turns preloading off entirely.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Byte- and count-bounded LRU cache of full-resolution decodes.
///
/// Keys are source paths. [`ImageData`] shares its pixel buffers, so the
/// cache stores values directly and hits hand out cheap clones.
pub struct PreloadCache {
    entries: LruCache<PathBuf, ImageData>,
    held_bytes: usize,
    config: PreloadConfig,
}

impl PreloadCache {
    /// Creates a cache honoring `config`.
    ///
    /// A hand-built configuration with `max_images` of zero gets a single
    /// slot rather than panicking.
    #[must_use]
    pub fn new(config: PreloadConfig) -> Self {
        let slots = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(slots),
            held_bytes: 0,
            config,
        }
    }

    /// Creates a cache with the default limits.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PreloadConfig::default())
    }

    /// Whether neighbor preloading runs at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Adds a decoded image under its source path, evicting older entries
    /// until both limits hold. Re-inserting a path replaces its decode.
    ///
    /// Returns `false` without caching when preloading is disabled or the
    /// decode alone would take more than half the byte budget.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let incoming = image.byte_size();
        if incoming > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(replaced) = self.entries.pop(&path) {
            self.held_bytes -= replaced.byte_size();
        }
        self.evict_down_to(self.config.max_bytes - incoming);

        // push reports the entry displaced by the slot cap, keeping the
        // byte accounting exact.
        if let Some((_, displaced)) = self.entries.push(path, image) {
            self.held_bytes -= displaced.byte_size();
        }
        self.held_bytes += incoming;

        true
    }

    fn evict_down_to(&mut self, budget: usize) {
        while self.held_bytes > budget {
            match self.entries.pop_lru() {
                Some((_, evicted)) => self.held_bytes -= evicted.byte_size(),
                None => return,
            }
        }
    }

    /// Returns the cached decode for `path`, marking it recently used.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }
        self.entries.get(path).cloned()
    }

    /// Whether a decode is cached for `path`. Does not touch recency.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.config.enabled && self.entries.contains(path)
    }

    /// Narrows preload candidates down to the paths not already cached.
    #[must_use]
    pub fn paths_to_preload(&self, candidates: &[PathBuf]) -> Vec<PathBuf> {
        if !self.config.enabled {
            return Vec::new();
        }

        let mut missing = candidates.to_vec();
        missing.retain(|path| !self.entries.contains(path));
        missing
    }

    /// Number of cached decodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes accounted to cached decodes.
    #[must_use]
    pub fn held_bytes(&self) -> usize {
        self.held_bytes
    }
}

impl fmt::Debug for PreloadCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreloadCache")
            .field("enabled", &self.config.enabled)
            .field("entries", &self.entries.len())
            .field("held_bytes", &self.held_bytes)
            .finish_non_exhaustive()
    }
}

/// Decodes one image for the cache, pairing the result with its path so
/// the caller can insert it without extra bookkeeping.
pub async fn load_for_preload(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let result = decode::load_full_image(path.clone()).await;
    (path, result)
}
