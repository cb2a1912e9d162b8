// SPDX-License-Identifier: MPL-2.0
//! Everything the user sees.
//!
//! Views own their messages and styling; `app` wires them together.
//!
//! - [`grid`] renders the masonry wall of thumbnails and reveals cells as
//!   they scroll into reach.
//! - [`viewer`] is the full-window overlay with circular navigation.
//! - [`masonry`] computes the column geometry both of them rely on.
//! - [`placeholder`] fills unrevealed cells with a pulsing tile.
//! - [`notifications`] surfaces import results as transient toasts.
//! - [`design_tokens`], [`styles`], [`theming`], and [`widgets`] carry the
//!   shared chrome: constants, style functions, theme resolution, and the
//!   scroll-suspending wrapper.

pub mod design_tokens;
pub mod grid;
pub mod masonry;
pub mod notifications;
pub mod placeholder;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
