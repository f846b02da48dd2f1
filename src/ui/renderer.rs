//! Top-level rendering coordinator.
//!
//! The renderer writes a [`PageViewModel`] into a [`Document`]. Class
//! toggles and form control state are written on every render. Inline
//! styles are layered (reveal, then hover, then tilt) and only written when
//! the final value of a property changes.
//!
//! Notification elements are created the first time their id appears in the
//! view model and removed once it disappears. Removal only happens while the
//! element is still attached, so a host that already dropped the node is
//! left alone.

use super::viewmodel::PageViewModel;
use crate::domain::{ElementId, FieldName, NotificationId};
use crate::host::Document;
use std::collections::{BTreeMap, HashMap};

/// Fixed inline styles of a notification element.
const NOTIFICATION_STYLES: [(&str, &str); 11] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "16px 20px"),
    ("border-radius", "8px"),
    ("font-weight", "500"),
    ("font-size", "14px"),
    ("z-index", "10000"),
    ("max-width", "400px"),
    ("transition", "transform 0.3s ease"),
    ("cursor", "pointer"),
];

/// Fixed inline styles of a field error container.
const FIELD_ERROR_STYLES: [(&str, &str); 2] = [("font-size", "0.875rem"), ("margin-top", "0.5rem")];

/// A contact form input and the container its error is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    pub name: FieldName,
    pub input: ElementId,
    pub error: Option<ElementId>,
}

/// Elements the renderer writes to, resolved once at mount.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub nav: Option<ElementId>,
    pub toggle: Option<ElementId>,
    pub menu: Option<ElementId>,
    /// Navigation links and their `href`.
    pub nav_links: Vec<(ElementId, String)>,
    pub fields: Vec<FieldBinding>,
    pub submit: Option<ElementId>,

    mounted: BTreeMap<NotificationId, ElementId>,
    applied: HashMap<(ElementId, &'static str), String>,
}

impl Surface {
    /// Header bindings resolved at mount. Form bindings are added afterwards.
    #[must_use]
    pub fn new(
        nav: Option<ElementId>,
        toggle: Option<ElementId>,
        menu: Option<ElementId>,
        nav_links: Vec<(ElementId, String)>,
    ) -> Self {
        Self {
            nav,
            toggle,
            menu,
            nav_links,
            ..Self::default()
        }
    }

    /// The input bound to `element`, if it is a contact form field.
    #[must_use]
    pub fn field(&self, element: ElementId) -> Option<&FieldBinding> {
        self.fields.iter().find(|f| f.input == element)
    }

    #[must_use]
    pub fn field_input(&self, name: FieldName) -> Option<ElementId> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.input)
    }

    /// Element currently displaying notification `id`.
    #[must_use]
    pub fn notification_element(&self, id: NotificationId) -> Option<ElementId> {
        self.mounted.get(&id).copied()
    }

    /// Notification displayed by `element` or one of its ancestors.
    pub fn notification_at<D: Document>(&self, doc: &D, element: ElementId) -> Option<NotificationId> {
        self.mounted
            .iter()
            .find(|(_, el)| doc.contains(**el, element))
            .map(|(&id, _)| id)
    }
}

/// Writes `vm` into `doc`.
pub fn render<D: Document>(doc: &mut D, surface: &mut Surface, vm: &PageViewModel) {
    let _span = tracing::trace_span!("render").entered();

    render_nav(doc, surface, vm);
    let body = doc.body();
    doc.set_class(body, "loaded", vm.loaded);
    render_styles(doc, surface, vm);
    render_form(doc, surface, vm);
    render_notifications(doc, surface, vm);
}

fn render_nav<D: Document>(doc: &mut D, surface: &Surface, vm: &PageViewModel) {
    for el in [surface.toggle, surface.menu].into_iter().flatten() {
        doc.set_class(el, "active", vm.nav.menu_open);
    }
    if let Some(nav) = surface.nav {
        doc.set_class(nav, "scrolled", vm.nav.scrolled);
    }
    for (link, href) in &surface.nav_links {
        doc.set_class(*link, "active", vm.nav.active_link.as_deref() == Some(href.as_str()));
    }
}

fn render_styles<D: Document>(doc: &mut D, surface: &mut Surface, vm: &PageViewModel) {
    let mut desired: BTreeMap<(ElementId, &'static str), &str> = BTreeMap::new();
    for layer in [&vm.reveals, &vm.hovers, &vm.tilts] {
        for view in layer {
            for (property, value) in &view.styles {
                desired.insert((view.element, *property), value.as_str());
            }
        }
    }

    for (key, value) in desired {
        if surface.applied.get(&key).map(String::as_str) == Some(value) {
            continue;
        }
        doc.set_style(key.0, key.1, value);
        surface.applied.insert(key, value.to_string());
    }
}

fn render_form<D: Document>(doc: &mut D, surface: &Surface, vm: &PageViewModel) {
    for view in &vm.fields {
        let Some(binding) = surface.fields.iter().find(|f| f.name == view.name) else {
            continue;
        };
        doc.set_class(binding.input, "error", view.invalid);
        doc.set_style(binding.input, "border-color", &view.border);
        doc.set_style(binding.input, "box-shadow", &view.glow);
        if let Some(error) = binding.error {
            doc.set_text(error, &view.error_text);
            for (property, value) in FIELD_ERROR_STYLES {
                doc.set_style(error, property, value);
            }
            doc.set_style(error, "color", &view.error_color);
            doc.set_style(error, "display", if view.error_text.is_empty() { "none" } else { "block" });
        }
    }

    if let Some(submit) = surface.submit {
        doc.set_text(submit, &vm.submit.label);
        doc.set_disabled(submit, vm.submit.disabled);
        doc.set_style(submit, "opacity", vm.submit.opacity);
    }
}

fn render_notifications<D: Document>(doc: &mut D, surface: &mut Surface, vm: &PageViewModel) {
    let stale: Vec<NotificationId> = surface
        .mounted
        .keys()
        .filter(|id| !vm.notifications.iter().any(|n| n.id == **id))
        .copied()
        .collect();
    for id in stale {
        if let Some(el) = surface.mounted.remove(&id) {
            if doc.is_attached(el) {
                doc.remove(el);
            }
            tracing::trace!(id = %id, element = %el, "notification element removed");
        }
    }

    for view in &vm.notifications {
        let el = match surface.mounted.get(&view.id) {
            Some(&el) => el,
            None => {
                let el = doc.create_element("div");
                doc.set_attribute(el, "class", &view.class);
                doc.set_text(el, &view.text);
                for (property, value) in NOTIFICATION_STYLES {
                    doc.set_style(el, property, value);
                }
                doc.set_style(el, "background", &view.background);
                doc.set_style(el, "color", &view.color);
                doc.set_style(el, "box-shadow", &view.shadow);
                let body = doc.body();
                doc.append_child(body, el);
                surface.mounted.insert(view.id, el);
                tracing::trace!(id = %view.id, element = %el, "notification element created");
                el
            }
        };
        doc.set_style(el, "transform", view.transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryDocument;
    use crate::ui::viewmodel::{NavView, NotificationView, StyleView, SubmitView};

    fn empty_vm() -> PageViewModel {
        PageViewModel {
            nav: NavView {
                menu_open: false,
                scrolled: false,
                active_link: None,
            },
            loaded: false,
            reveals: vec![],
            hovers: vec![],
            tilts: vec![],
            fields: vec![],
            submit: SubmitView {
                label: "Send".into(),
                disabled: false,
                opacity: "1",
            },
            notifications: vec![],
        }
    }

    fn notification(id: u64) -> NotificationView {
        NotificationView {
            id: NotificationId(id),
            class: "notification notification--info".into(),
            text: "ℹ hi".into(),
            background: "blue".into(),
            color: "white".into(),
            shadow: "none".into(),
            transform: "translateX(100%)",
        }
    }

    #[test]
    fn later_style_layers_win() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let card = doc.append(body, "div");
        let mut surface = Surface::default();
        let mut vm = empty_vm();
        vm.reveals.push(StyleView {
            element: card,
            styles: vec![("transform", "translateY(0)".into()), ("opacity", "1".into())],
        });
        vm.tilts.push(StyleView {
            element: card,
            styles: vec![("transform", "rotateX(2deg)".into())],
        });

        render(&mut doc, &mut surface, &vm);
        assert_eq!(doc.style(card, "transform"), Some("rotateX(2deg)"));
        assert_eq!(doc.style(card, "opacity"), Some("1"));
    }

    #[test]
    fn header_bindings_follow_nav_state() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let nav = doc.append(body, "nav");
        let toggle = doc.append(nav, "button");
        let menu = doc.append(nav, "ul");
        let home = doc.append(menu, "a");
        let about = doc.append(menu, "a");
        let mut surface = Surface::new(
            Some(nav),
            Some(toggle),
            Some(menu),
            vec![(home, "#home".into()), (about, "#about".into())],
        );
        let mut vm = empty_vm();
        vm.nav = NavView {
            menu_open: true,
            scrolled: true,
            active_link: Some("#about".into()),
        };

        render(&mut doc, &mut surface, &vm);
        assert!(doc.has_class(toggle, "active") && doc.has_class(menu, "active"));
        assert!(doc.has_class(nav, "scrolled"));
        assert!(doc.has_class(about, "active"));
        assert!(!doc.has_class(home, "active"));
        assert!(surface.fields.is_empty());
    }

    #[test]
    fn notifications_mount_and_unmount() {
        let mut doc = MemoryDocument::new();
        let mut surface = Surface::default();
        let mut vm = empty_vm();
        vm.notifications.push(notification(1));

        render(&mut doc, &mut surface, &vm);
        let el = surface.notification_element(NotificationId(1)).unwrap();
        assert!(doc.is_attached(el));
        assert_eq!(doc.text(el), "ℹ hi");
        assert!(doc.has_class(el, "notification--info"));
        assert_eq!(surface.notification_at(&doc, el), Some(NotificationId(1)));

        vm.notifications.clear();
        render(&mut doc, &mut surface, &vm);
        assert!(!doc.is_attached(el));
        assert_eq!(surface.notification_element(NotificationId(1)), None);
    }

    #[test]
    fn detached_notification_is_left_alone() {
        let mut doc = MemoryDocument::new();
        let mut surface = Surface::default();
        let mut vm = empty_vm();
        vm.notifications.push(notification(1));
        render(&mut doc, &mut surface, &vm);

        let el = surface.notification_element(NotificationId(1)).unwrap();
        doc.remove(el);
        vm.notifications.clear();
        render(&mut doc, &mut surface, &vm);
        assert_eq!(doc.query_all(".notification").len(), 0);
    }
}
