// SPDX-License-Identifier: MPL-2.0
//! Transient toast feedback: import results, skipped files, failures.
//!
//! Toasts stack in the bottom-right corner without blocking input. At
//! most three are on screen; the rest wait in arrival order. Success
//! and info toasts dismiss themselves after a few seconds, warnings
//! linger a little longer, and errors stay until clicked away.
//!
//! The update loop pushes [`Notification`]s into the [`Manager`], drives
//! expiry from the app tick, and renders [`Toast::view_overlay`] as the
//! top layer of the view stack.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
