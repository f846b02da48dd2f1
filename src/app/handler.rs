//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the page: user input reported by the host, and deferred tasks released by
//! the scheduler. It mutates [`AppState`] and returns whether the page must
//! be re-rendered together with the [`Action`]s the host has to perform.
//!
//! # Event Types
//!
//! - **Lifecycle**: `PageLoaded`
//! - **Navigation**: `MenuToggleClicked`, `DocumentClicked`, `AnchorClicked`, `Scrolled`, `KeyPressed`
//! - **Effects**: `Intersected`, `PointerMoved`, `PointerLeft`, `HoverEntered`, `HoverLeft`, `Pressed`, `Released`
//! - **Contact form**: `FieldBlurred`, `FieldInput`, `SubmitRequested`
//! - **Notifications**: `Notify`, `NotificationClicked`
//! - **Timers**: `TimerFired`
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::app::{handle_event, Action, AppState, Event};
//! use portfolio_ui::ui::Theme;
//! use portfolio_ui::Config;
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::MenuToggleClicked)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::StopPropagation]);
//! # Ok::<(), portfolio_ui::PortfolioError>(())
//! ```

use super::actions::{Action, Task};
use super::contact::{SubmitOutcome, FIX_ERRORS_MESSAGE};
use super::navigation::AnchorOrigin;
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::{ElementId, FieldName, NotificationId, NotificationKind, Rect, SectionBounds};

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Events reported by the host or released by the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page and its resources finished loading.
    PageLoaded,

    /// The mobile menu toggle was clicked.
    MenuToggleClicked,

    /// A click anywhere in the document that was not on the menu toggle.
    DocumentClicked {
        /// Whether the click landed inside the navigation header.
        inside_nav: bool,
    },

    KeyPressed(Key),

    /// A click on an in-page link.
    AnchorClicked {
        href: String,
        /// Document offset of the element the fragment names, if it exists.
        target_top: Option<f64>,
        origin: AnchorOrigin,
    },

    /// The viewport scrolled.
    Scrolled {
        scroll_y: f64,
        /// Bounds of every `section[id]`, in document order.
        sections: Vec<SectionBounds>,
    },

    /// The intersection watcher reported a visible fraction for an element.
    Intersected { element: ElementId, ratio: f64 },

    PointerMoved {
        element: ElementId,
        x: f64,
        y: f64,
        /// The element's client rectangle at the time of the move.
        rect: Rect,
    },

    PointerLeft { element: ElementId },

    HoverEntered(ElementId),
    HoverLeft(ElementId),
    Pressed(ElementId),
    Released(ElementId),

    /// Focus left a form field.
    FieldBlurred { field: FieldName, value: String },

    /// A form field's value changed.
    FieldInput { field: FieldName, value: String },

    /// The contact form was submitted with these raw values.
    SubmitRequested {
        name: String,
        email: String,
        message: String,
    },

    /// A notification element was clicked.
    NotificationClicked(NotificationId),

    /// Any component asked to inform the user.
    Notify { message: String, kind: NotificationKind },

    /// A scheduled task fell due.
    TimerFired(Task),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag is `true` when the page must be re-rendered.
///
/// # Errors
///
/// No event currently fails; the `Result` is kept for host-facing symmetry
/// with fallible setup code.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PageLoaded => {
            state.loaded = true;
            if state.welcome.is_some() {
                state.scheduler.schedule(state.welcome_delay_ms, Task::Welcome);
            }
            tracing::debug!(welcome = state.welcome.is_some(), "page loaded");
            Ok((true, vec![]))
        }

        Event::MenuToggleClicked => {
            state.navigation.toggle_menu();
            Ok((true, vec![Action::StopPropagation]))
        }

        Event::DocumentClicked { inside_nav } => {
            if *inside_nav {
                return Ok((false, vec![]));
            }
            Ok((state.navigation.close_menu(), vec![]))
        }

        Event::KeyPressed(Key::Escape) => {
            let closed = state.navigation.close_menu();
            let dismissed = state.notifications.dismiss_current(&mut state.scheduler);
            tracing::debug!(closed, dismissed, "escape pressed");
            Ok((closed || dismissed, vec![]))
        }
        Event::KeyPressed(Key::Other) => Ok((false, vec![])),

        Event::AnchorClicked {
            href,
            target_top,
            origin,
        } => match state.navigation.follow_anchor(href, *target_top, *origin) {
            Some(top) => {
                tracing::debug!(href = %href, top, "scrolling to anchor");
                Ok((true, vec![Action::PreventDefault, Action::ScrollTo { top }]))
            }
            None => Ok((false, vec![])),
        },

        Event::Scrolled { scroll_y, sections } => {
            let now = state.now();
            Ok((state.navigation.on_scroll(now, *scroll_y, sections), vec![]))
        }

        Event::Intersected { element, ratio } => {
            if state.reveal.on_intersection(*element, *ratio) {
                Ok((true, vec![Action::Unobserve(*element)]))
            } else {
                Ok((false, vec![]))
            }
        }

        Event::PointerMoved { element, x, y, rect } => {
            Ok((state.tilt.on_pointer_move(*element, *x, *y, *rect), vec![]))
        }
        Event::PointerLeft { element } => Ok((state.tilt.on_pointer_leave(*element), vec![])),

        Event::HoverEntered(element) => Ok((state.hover.on_enter(*element), vec![])),
        Event::HoverLeft(element) => Ok((state.hover.on_leave(*element), vec![])),
        Event::Pressed(element) => Ok((state.hover.on_press(*element), vec![])),
        Event::Released(element) => Ok((state.hover.on_release(*element), vec![])),

        Event::FieldBlurred { field, value } => {
            state.contact.on_blur(*field, value);
            Ok((true, vec![]))
        }
        Event::FieldInput { field, value } => Ok((state.contact.on_input(*field, value).is_some(), vec![])),

        Event::SubmitRequested { name, email, message } => {
            match state.contact.on_submit(name, email, message) {
                SubmitOutcome::Rejected(failures) => {
                    tracing::debug!(failures = failures.len(), "contact form has errors");
                    state.notify(FIX_ERRORS_MESSAGE, NotificationKind::Error);
                }
                SubmitOutcome::Accepted(_) => {
                    state.scheduler.schedule(state.submit_delay_ms, Task::CompleteSubmission);
                }
                SubmitOutcome::Busy => return Ok((false, vec![Action::PreventDefault])),
            }
            Ok((true, vec![Action::PreventDefault]))
        }

        Event::NotificationClicked(id) => Ok((state.notifications.dismiss(&mut state.scheduler, *id), vec![])),

        Event::Notify { message, kind } => {
            state.notify(message.clone(), *kind);
            Ok((true, vec![]))
        }

        Event::TimerFired(task) => handle_task(state, *task),
    }
}

fn handle_task(state: &mut AppState, task: Task) -> Result<(bool, Vec<Action>)> {
    tracing::trace!(?task, now = state.now(), "timer fired");

    match task {
        Task::ShowNotification(id) => Ok((state.notifications.show(id), vec![])),
        Task::ExpireNotification(id) => Ok((state.notifications.dismiss(&mut state.scheduler, id), vec![])),
        Task::RemoveNotification(id) => Ok((state.notifications.remove(&mut state.scheduler, id), vec![])),
        Task::CompleteSubmission => {
            let Some(submission) = state.contact.complete() else {
                tracing::debug!("no submission in flight");
                return Ok((false, vec![]));
            };
            state.notify(submission.confirmation(), NotificationKind::Success);
            Ok((true, vec![Action::ResetForm]))
        }
        Task::Welcome => {
            let Some(message) = state.welcome.clone() else {
                return Ok((false, vec![]));
            };
            state.notify(message, NotificationKind::Success);
            Ok((true, vec![]))
        }
    }
}
