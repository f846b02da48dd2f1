//! Presentation layer: view models, rendering and theming.
//!
//! State never touches the document directly. The app layer computes a
//! [`PageViewModel`] and the renderer maps it onto a [`Document`](crate::host::Document).
//!
//! ```text
//! AppState → compute_viewmodel → PageViewModel → render → Document
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready page state
//! - [`renderer`]: Writes view models into a document
//! - [`theme`]: Notification colors and glyphs

pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, FieldBinding, Surface};
pub use theme::Theme;
pub use viewmodel::{FieldView, NavView, NotificationView, PageViewModel, StyleView, SubmitView};
