//! View model types representing renderable page state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They contain no business logic, only
//! display-ready values: class toggles, inline style strings and text.
//!
//! Element styles come in layers. The renderer applies reveal styles first,
//! then hover styles, then tilt transforms, so a later layer wins on any
//! property two layers both set.

use crate::domain::{ElementId, FieldName, NotificationId};

/// Complete page view model.
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel {
    pub nav: NavView,

    /// Whether `<body>` carries the `loaded` class.
    pub loaded: bool,

    pub reveals: Vec<StyleView>,
    pub hovers: Vec<StyleView>,
    pub tilts: Vec<StyleView>,

    pub fields: Vec<FieldView>,
    pub submit: SubmitView,

    /// Notifications in document order.
    pub notifications: Vec<NotificationView>,
}

/// Header and menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// `active` class on the toggle and the menu.
    pub menu_open: bool,
    /// `scrolled` class on the header.
    pub scrolled: bool,
    /// `href` of the link carrying the `active` class.
    pub active_link: Option<String>,
}

/// Inline styles for one element. An empty value clears the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleView {
    pub element: ElementId,
    pub styles: Vec<(&'static str, String)>,
}

/// Error display of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: FieldName,
    /// `error` class on the input.
    pub invalid: bool,
    /// Text of the field's error container; empty hides it.
    pub error_text: String,
    /// `border-color` and `box-shadow` of the input; empty while valid.
    pub border: String,
    pub glow: String,
    /// Text color of the error container.
    pub error_color: String,
}

/// Submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub label: String,
    pub disabled: bool,
    pub opacity: &'static str,
}

/// One notification element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub class: String,
    /// Icon followed by the message.
    pub text: String,
    pub background: String,
    pub color: String,
    pub shadow: String,
    /// `translateX(0)` on screen, `translateX(100%)` off to the right.
    pub transform: &'static str,
}
