// SPDX-License-Identifier: MPL-2.0
//! `iced_mosaic` is a client-side image gallery viewer built with the Iced
//! GUI framework.
//!
//! Folders of images are decoded into fixed-budget thumbnails, laid out as a
//! masonry grid whose cells reveal lazily as they scroll into view, and
//! opened full-size in an overlay viewer with circular keyboard and wheel
//! navigation.

#![doc(html_root_url = "https://docs.rs/iced_mosaic/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod icon;
pub mod media;
pub mod ui;
pub mod viewport;
