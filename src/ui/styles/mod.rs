// SPDX-License-Identifier: MPL-2.0
//! Style functions shared across views.

pub mod button;
pub mod overlay;

pub use button::{overlay as button_overlay, primary as button_primary};
