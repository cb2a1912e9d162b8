// SPDX-License-Identifier: MPL-2.0
//! Gallery state: records, the append-only store and viewer navigation.

pub mod navigation;
pub mod record;
pub mod store;

pub use navigation::{GalleryNavigator, ViewerPosition};
pub use record::{ImageRecord, RecordId};
pub use store::{GalleryStore, LoadProgress};
