//! Notification model.
//!
//! A notification is a short message with a [`NotificationKind`] that slides
//! in from the right edge, stays for a while and slides out again. Once it has
//! left it is gone for good: ids are never reused and a dismissed
//! notification never comes back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a notification, selecting its icon and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier used in the element's class list (`notification--{kind}`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonic identifier of a notification within one page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Lifecycle of a notification element.
///
/// ```text
/// Entering ──(enter delay)──▶ Shown ──(click / Escape / lifetime)──▶ Leaving ──(exit)──▶ removed
///     └──────────────(superseded / dismissed)───────────────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted off-screen, waiting for the slide-in.
    Entering,
    /// On screen.
    Shown,
    /// Sliding out; removed from the document when the exit completes.
    Leaving,
}

/// A message displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl Notification {
    #[must_use]
    pub fn new(id: NotificationId, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Entering,
        }
    }

    /// Whether the notification is in its on-screen position.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.phase == NotificationPhase::Shown
    }

    /// Whether the notification can still be dismissed.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.phase != NotificationPhase::Leaving
    }
}
