//! Domain layer for the portfolio page.
//!
//! This module contains the core domain types and rules, independent of any
//! host document API or timing concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`form`]: Contact form fields and validation rules
//! - [`notification`]: Notification kinds, ids and lifecycle phases
//! - [`geometry`]: Element handles, rectangles and section bounds
//!
//! # Examples
//!
//! ```
//! use portfolio_ui::domain::{validate, FieldName};
//!
//! let result = validate(FieldName::Message, "short");
//! assert!(!result.is_valid);
//! ```

pub mod error;
pub mod form;
pub mod geometry;
pub mod notification;

pub use error::{PortfolioError, Result};
pub use form::{validate, ContactSubmission, FieldName, FormField, ValidationResult};
pub use geometry::{ElementId, Rect, SectionBounds};
pub use notification::{Notification, NotificationId, NotificationKind, NotificationPhase};
