// SPDX-License-Identifier: MPL-2.0
//! Toast queue with a bounded visibility window.
//!
//! All toasts live in one ordered list; the oldest [`MAX_VISIBLE`] are
//! on screen and the rest wait their turn. Dismissing or expiring a
//! visible toast slides the next waiting one into view automatically.

use super::notification::{Notification, NotificationId};
use std::time::Instant;

/// Toasts on screen at once.
const MAX_VISIBLE: usize = 3;

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user clicked a toast's dismiss button.
    Dismiss(NotificationId),
}

/// Owns every pending toast, in arrival order.
#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast. It shows immediately if fewer than
    /// [`MAX_VISIBLE`] are on screen, otherwise it waits in order.
    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    /// Removes a toast wherever it is, visible or waiting.
    ///
    /// Returns whether anything was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        self.entries.len() < before
    }

    /// Drops visible toasts whose deadline has passed at `now`.
    ///
    /// Waiting toasts are left alone; their deadline only matters once
    /// they reach the screen.
    pub fn dismiss_expired(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible()
            .filter(|entry| entry.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    /// Periodic driver for auto-dismissal, called from the app tick.
    pub fn tick(&mut self) {
        self.dismiss_expired(Instant::now());
    }

    /// Applies a message from the toast overlay.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// The toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    /// Number of toasts on screen.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    /// Number of toasts waiting for a free slot.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    /// Whether any toast exists, on screen or waiting.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
