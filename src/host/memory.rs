//! In-memory [`Document`] implementation.
//!
//! A small element tree with classes, attributes, inline styles, text, form
//! values and fixed layout boxes. It records every scroll request and keeps
//! the set of elements under intersection observation, so tests can assert
//! on what a page did without a browser.
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::host::{Document, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! let nav = doc.append(body, "nav");
//! doc.add_class(nav, "nav");
//! let link = doc.append(nav, "a");
//! doc.add_class(link, "nav-link");
//! doc.set_attribute(link, "href", "#about");
//!
//! assert_eq!(doc.query_all(".nav .nav-link"), vec![link]);
//! assert_eq!(doc.query("a[href=\"#about\"]"), Some(link));
//! ```

use super::document::Document;
use crate::app::ObserverOptions;
use crate::domain::{ElementId, Rect};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    offset_top: f64,
    offset_height: f64,
    rect: Rect,
}

/// Element tree held in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    scroll_y: f64,
    scroll_log: Vec<f64>,
    observed: BTreeSet<ElementId>,
    observer_options: Option<ObserverOptions>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding only `<body>`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_string(),
                ..Node::default()
            }],
            scroll_y: 0.0,
            scroll_log: Vec::new(),
            observed: BTreeSet::new(),
            observer_options: None,
        }
    }

    /// Creates a `tag` element as the last child of `parent`.
    pub fn append(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    pub fn add_class(&mut self, element: ElementId, class: &str) {
        self.set_class(element, class, true);
    }

    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element).is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// Sets the document offset and height used for section tracking and anchors.
    pub fn set_layout(&mut self, element: ElementId, offset_top: f64, offset_height: f64) {
        if let Some(node) = self.node_mut(element) {
            node.offset_top = offset_top;
            node.offset_height = offset_height;
        }
    }

    /// Sets the viewport rectangle reported for pointer math.
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(node) = self.node_mut(element) {
            node.rect = rect;
        }
    }

    /// Inline style value, if set.
    #[must_use]
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.node(element)?.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn is_disabled(&self, element: ElementId) -> bool {
        self.node(element).is_some_and(|n| n.disabled)
    }

    #[must_use]
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element).map_or(&[], |n| n.children.as_slice())
    }

    /// Current scroll position, updated by [`Document::scroll_to`].
    #[must_use]
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Every scroll target requested so far.
    #[must_use]
    pub fn scroll_log(&self) -> &[f64] {
        &self.scroll_log
    }

    #[must_use]
    pub fn is_observed(&self, element: ElementId) -> bool {
        self.observed.contains(&element)
    }

    /// Options passed with the most recent [`Document::observe`] call.
    #[must_use]
    pub const fn observer_options(&self) -> Option<&ObserverOptions> {
        self.observer_options.as_ref()
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.0 as usize)
    }

    fn node_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(element.0 as usize)
    }

    fn descendants(&self, root: ElementId, out: &mut Vec<ElementId>) {
        for &child in self.children(root) {
            out.push(child);
            self.descendants(child, out);
        }
    }

    fn matches(&self, element: ElementId, selector: &SelectorList) -> bool {
        selector.chains.iter().any(|chain| self.matches_chain(element, chain))
    }

    fn matches_chain(&self, element: ElementId, chain: &[Compound]) -> bool {
        let Some((last, ancestors)) = chain.split_last() else {
            return false;
        };
        if !self.matches_compound(element, last) {
            return false;
        }

        let mut cursor = self.node(element).and_then(|n| n.parent);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = cursor else {
                    return false;
                };
                cursor = self.node(candidate).and_then(|n| n.parent);
                if self.matches_compound(candidate, compound) {
                    break;
                }
            }
        }
        true
    }

    fn matches_compound(&self, element: ElementId, compound: &Compound) -> bool {
        let Some(node) = self.node(element) else {
            return false;
        };
        compound.tag.as_ref().map_or(true, |t| node.tag.eq_ignore_ascii_case(t))
            && compound
                .id
                .as_ref()
                .map_or(true, |id| node.attributes.get("id") == Some(id))
            && compound.classes.iter().all(|c| node.classes.contains(c))
            && compound.attributes.iter().all(|(name, expected)| {
                let actual = self.attribute(element, name);
                match expected {
                    Some(value) => actual.as_deref() == Some(value.as_str()),
                    None => actual.is_some(),
                }
            })
    }
}

impl Document for MemoryDocument {
    fn body(&self) -> ElementId {
        ElementId(0)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.query_within(self.body(), selector)
    }

    fn query_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        let selector = SelectorList::parse(selector);
        let mut candidates = Vec::new();
        self.descendants(root, &mut candidates);
        candidates.retain(|&el| self.matches(el, &selector));
        candidates
    }

    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId> {
        let selector = SelectorList::parse(selector);
        let mut cursor = Some(element);
        while let Some(el) = cursor {
            if self.matches(el, &selector) {
                return Some(el);
            }
            cursor = self.node(el).and_then(|n| n.parent);
        }
        None
    }

    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut cursor = Some(element);
        while let Some(el) = cursor {
            if el == ancestor {
                return true;
            }
            cursor = self.node(el).and_then(|n| n.parent);
        }
        false
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let node = self.node(element)?;
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let Some(node) = self.node_mut(element) else {
            return;
        };
        if name == "class" {
            node.classes = value.split_whitespace().map(String::from).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, element: ElementId) -> String {
        let Some(node) = self.node(element) else {
            return String::new();
        };
        let mut text = node.text.clone();
        for &child in &node.children {
            text.push_str(&self.text(child));
        }
        text
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        let Some(node) = self.node_mut(element) else {
            return;
        };
        node.text = text.to_string();
        let children = std::mem::take(&mut node.children);
        for child in children {
            if let Some(child) = self.node_mut(child) {
                child.parent = None;
            }
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        let Some(node) = self.node_mut(element) else {
            return;
        };
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        let Some(node) = self.node_mut(element) else {
            return;
        };
        let present = node.classes.iter().any(|c| c == class);
        if on && !present {
            node.classes.push(class.to_string());
        } else if !on && present {
            node.classes.retain(|c| c != class);
        }
    }

    fn value(&self, element: ElementId) -> String {
        self.node(element).map(|n| n.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, element: ElementId, value: &str) {
        if let Some(node) = self.node_mut(element) {
            node.value = value.to_string();
        }
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        if let Some(node) = self.node_mut(element) {
            node.disabled = disabled;
        }
    }

    fn offset_top(&self, element: ElementId) -> f64 {
        self.node(element).map_or(0.0, |n| n.offset_top)
    }

    fn offset_height(&self, element: ElementId) -> f64 {
        self.node(element).map_or(0.0, |n| n.offset_height)
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.node(element).map(|n| n.rect).unwrap_or_default()
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        #[allow(clippy::cast_possible_truncation)]
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || self.node(parent).is_none() || self.contains(child, parent) {
            return;
        }
        self.remove(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn remove(&mut self, element: ElementId) -> bool {
        let Some(parent) = self.node(element).and_then(|n| n.parent) else {
            return false;
        };
        let attached = self.is_attached(element);
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&c| c != element);
        }
        if let Some(node) = self.node_mut(element) {
            node.parent = None;
        }
        attached
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.node(element).is_some() && self.contains(self.body(), element)
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_y = top.max(0.0);
        self.scroll_log.push(top);
    }

    fn observe(&mut self, element: ElementId, options: &ObserverOptions) {
        self.observed.insert(element);
        self.observer_options = Some(options.clone());
    }

    fn unobserve(&mut self, element: ElementId) {
        self.observed.remove(&element);
    }
}

/// One compound selector: `tag#id.class[attr="value"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Compound {
    fn parse(source: &str) -> Self {
        let mut compound = Self::default();
        let mut rest = source;

        while let Some(first) = rest.chars().next() {
            match first {
                '#' => {
                    let (name, tail) = split_ident(&rest[1..]);
                    compound.id = Some(name.to_string());
                    rest = tail;
                }
                '.' => {
                    let (name, tail) = split_ident(&rest[1..]);
                    compound.classes.push(name.to_string());
                    rest = tail;
                }
                '[' => {
                    let Some(end) = rest.find(']') else {
                        break;
                    };
                    let inner = &rest[1..end];
                    let attribute = match inner.split_once('=') {
                        Some((name, value)) => (
                            name.trim().to_string(),
                            Some(value.trim().trim_matches(|c| c == '"' || c == '\'').to_string()),
                        ),
                        None => (inner.trim().to_string(), None),
                    };
                    compound.attributes.push(attribute);
                    rest = &rest[end + 1..];
                }
                _ => {
                    let (name, tail) = split_ident(rest);
                    if name.is_empty() {
                        break;
                    }
                    compound.tag = Some(name.to_string());
                    rest = tail;
                }
            }
        }

        compound
    }
}

/// Comma-separated list of descendant chains.
#[derive(Debug, Clone)]
struct SelectorList {
    chains: Vec<Vec<Compound>>,
}

impl SelectorList {
    fn parse(source: &str) -> Self {
        let chains = source
            .split(',')
            .map(|chain| chain.split_whitespace().map(Compound::parse).collect::<Vec<_>>())
            .filter(|chain| !chain.is_empty())
            .collect();
        Self { chains }
    }
}

fn split_ident(source: &str) -> (&str, &str) {
    let end = source.find(['#', '.', '[']).unwrap_or(source.len());
    source.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDocument, ElementId, ElementId, ElementId) {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let form = doc.append(body, "form");
        doc.set_attribute(form, "id", "contact-form");
        let group = doc.append(form, "div");
        doc.add_class(group, "form-group");
        let input = doc.append(group, "input");
        doc.set_attribute(input, "name", "email");
        (doc, form, group, input)
    }

    #[test]
    fn compound_and_descendant_selectors() {
        let (doc, form, group, input) = sample();
        assert_eq!(doc.query("#contact-form"), Some(form));
        assert_eq!(doc.query_all("form .form-group"), vec![group]);
        assert_eq!(doc.query_all("#contact-form input[name=\"email\"]"), vec![input]);
        assert_eq!(doc.query_all("div.form-group, input"), vec![group, input]);
        assert!(doc.query_all("section input").is_empty());
        assert_eq!(doc.query_all("[name]"), vec![input]);
    }

    #[test]
    fn closest_walks_up() {
        let (doc, form, group, input) = sample();
        assert_eq!(doc.closest(input, ".form-group"), Some(group));
        assert_eq!(doc.closest(input, "form"), Some(form));
        assert_eq!(doc.closest(input, ".nav"), None);
    }

    #[test]
    fn removal_detaches_subtree() {
        let (mut doc, _, group, input) = sample();
        assert!(doc.remove(group));
        assert!(!doc.is_attached(input));
        assert!(!doc.remove(group));
        assert!(doc.query_all("input").is_empty());
    }

    #[test]
    fn empty_style_clears_property() {
        let (mut doc, form, ..) = sample();
        doc.set_style(form, "opacity", "0.7");
        assert_eq!(doc.style(form, "opacity"), Some("0.7"));
        doc.set_style(form, "opacity", "");
        assert_eq!(doc.style(form, "opacity"), None);
    }

    #[test]
    fn class_attribute_round_trips() {
        let (mut doc, form, ..) = sample();
        doc.set_attribute(form, "class", "a  b");
        doc.set_class(form, "b", false);
        assert_eq!(doc.attribute(form, "class").as_deref(), Some("a"));
    }

    #[test]
    fn text_includes_descendants() {
        let (mut doc, form, group, _) = sample();
        doc.set_text(group, "Email");
        assert_eq!(doc.text(form), "Email");
    }
}
