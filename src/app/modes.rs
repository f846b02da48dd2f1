//! Tagged state enums for each page component.
//!
//! Each component keeps its state in one of these enums instead of in the
//! class list of a DOM node. The `ui` layer maps them to presentation.
//!
//! # State Machines
//!
//! ```text
//! MenuState:   Closed ⇄ Open
//! FieldState:  Untouched → Invalid ⇄ Valid        (reset → Untouched)
//! SubmitState: Idle → Sending → Idle
//! RevealState: Hidden → Revealed                  (one way)
//! TiltState:   Neutral ⇄ Tilted
//! HoverState:  Rest ⇄ Hovered ⇄ Pressed
//! ```

use crate::domain::ContactSubmission;

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Validation state of one contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Never validated since the form was rendered or reset.
    #[default]
    Untouched,
    /// Last validation failed; the error is shown and input re-validates live.
    Invalid,
    /// Last validation passed.
    Valid,
}

/// Contact form submit control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A validated submission is in flight.
    Sending(ContactSubmission),
}

/// Scroll reveal progress of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Rotation of a tilt element, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TiltState {
    #[default]
    Neutral,
    Tilted { rotate_x: f64, rotate_y: f64 },
}

/// Pointer interaction with a hover-decorated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
    Pressed,
}
