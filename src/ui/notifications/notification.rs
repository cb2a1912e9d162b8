// SPDX-License-Identifier: MPL-2.0
//! Toast payloads: severity, message, and dismissal deadline.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// How long short-lived toasts stay on screen.
const LINGER_SHORT: Duration = Duration::from_secs(3);
/// How long warnings stay on screen.
const LINGER_LONG: Duration = Duration::from_secs(5);

/// Process-unique toast identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Tone of a toast. Picks the accent color and how long it lingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    /// Errors stay until the user dismisses them.
    Error,
}

impl Severity {
    /// Accent color for the toast card and its severity dot.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS,
            Self::Info => palette::INFO,
            Self::Warning => palette::WARNING,
            Self::Error => palette::ERROR,
        }
    }

    /// How long a toast of this severity lingers before dismissing
    /// itself. `None` means it waits for the user.
    #[must_use]
    pub fn linger(self) -> Option<Duration> {
        match self {
            Self::Success | Self::Info => Some(LINGER_SHORT),
            Self::Warning => Some(LINGER_LONG),
            Self::Error => None,
        }
    }
}

/// One queued or visible toast.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Point at which the toast dismisses itself, fixed at creation.
    deadline: Option<Instant>,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message: message.into(),
            deadline: severity.linger().map(|linger| Instant::now() + linger),
        }
    }

    /// A toast confirming a completed operation.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// A neutral, informational toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// A toast for degraded but non-fatal outcomes.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// A toast for failures. Never dismisses itself.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the toast's deadline has passed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }
}
