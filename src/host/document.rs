//! Document capability.
//!
//! This module defines the [`Document`] trait, the only way the crate reads
//! or writes a page. A browser binding implements it over the real DOM;
//! [`MemoryDocument`](super::MemoryDocument) implements it over an in-memory
//! tree for tests and headless use.
//!
//! The trait is minimal and mirrors the operations the page actually uses,
//! not the DOM API. Elements are addressed by [`ElementId`] handles issued by
//! the implementation. Operations on a handle that no longer refers to an
//! attached element are silent no-ops.

use crate::app::ObserverOptions;
use crate::domain::{ElementId, Rect};

/// Abstraction over a live page document.
///
/// Selectors use the CSS subset: type, `#id`, `.class`, `[attr]` and
/// `[attr="value"]` compounds, joined by descendant combinators, in
/// comma-separated lists. Query results come back in document order.
pub trait Document {
    /// The `<body>` element.
    fn body(&self) -> ElementId;

    /// Every attached element matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// The first attached element matching `selector`.
    fn query(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    /// Descendants of `root` matching `selector`.
    fn query_within(&self, root: ElementId, selector: &str) -> Vec<ElementId>;

    /// `element` or its nearest ancestor matching `selector`.
    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId>;

    /// Whether `element` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    fn text(&self, element: ElementId) -> String;
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Sets an inline style property. An empty value removes it.
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    /// Adds (`on`) or removes a class.
    fn set_class(&mut self, element: ElementId, class: &str, on: bool);

    /// Current value of a form control.
    fn value(&self, element: ElementId) -> String;
    fn set_value(&mut self, element: ElementId, value: &str);
    fn set_disabled(&mut self, element: ElementId, disabled: bool);

    /// Offset of the element's top edge from the document top.
    fn offset_top(&self, element: ElementId) -> f64;
    fn offset_height(&self, element: ElementId) -> f64;

    /// The element's rectangle in viewport coordinates.
    fn bounding_rect(&self, element: ElementId) -> Rect;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> ElementId;
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Detaches an element. Returns `false` if it was not attached.
    fn remove(&mut self, element: ElementId) -> bool;
    fn is_attached(&self, element: ElementId) -> bool;

    /// Smoothly scrolls the viewport to `top`.
    fn scroll_to(&mut self, top: f64);

    /// Starts watching `element` for viewport intersection.
    fn observe(&mut self, element: ElementId, options: &ObserverOptions);
    fn unobserve(&mut self, element: ElementId);
}
