//! Actions and deferred tasks produced by the event handler.
//!
//! [`Action`]s are imperative commands the host executes right after an
//! event is handled. Everything that can be expressed as state (menu open,
//! field errors, notification position) is not an action; the render step
//! derives it instead.
//!
//! [`Task`]s are work scheduled on the virtual clock. When a task falls due
//! the page driver feeds it back through the handler as
//! [`Event::TimerFired`](crate::app::Event::TimerFired).
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::app::Action;
//!
//! let actions = vec![Action::PreventDefault, Action::ScrollTo { top: 420.0 }];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::{ElementId, NotificationId};

/// Commands for the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cancel the browser's default handling of the current input event.
    PreventDefault,

    /// Stop the current input event from reaching outer handlers.
    StopPropagation,

    /// Smoothly scroll the viewport so its top sits at `top`.
    ScrollTo {
        /// Target scroll position in document pixels.
        top: f64,
    },

    /// Stop watching an element for viewport intersection.
    Unobserve(ElementId),

    /// Empty every contact form input.
    ResetForm,
}

/// Deferred work released by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Slide an entering notification onto the screen.
    ShowNotification(NotificationId),

    /// Dismiss a notification whose lifetime ran out.
    ExpireNotification(NotificationId),

    /// Drop a notification whose exit transition finished.
    RemoveNotification(NotificationId),

    /// Finish the simulated contact form submission.
    CompleteSubmission,

    /// Show the welcome notification.
    Welcome,
}
