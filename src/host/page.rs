//! Page driver.
//!
//! [`Page`] is the host-facing surface of the crate. It owns the document,
//! the application state and the renderer bindings. Host glue calls one
//! method per DOM input (`click`, `scroll`, `blur`, ...) and advances the
//! virtual clock as real time passes; the page translates each input into
//! an [`Event`], runs the handler, performs the returned actions and
//! re-renders.
//!
//! # Lifecycle
//!
//! 1. **Mount**: Resolve bindings, create missing error containers, register
//!    reveal, tilt and hover elements, render once
//! 2. **Load**: Mark the body loaded and schedule the welcome notification
//! 3. **Input**: Map host input to events, handle, execute actions, render
//! 4. **Advance**: Release due timers one at a time, rendering after each
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::host::{Document, MemoryDocument, Page};
//! use portfolio_ui::Config;
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! let nav = doc.append(body, "nav");
//! doc.add_class(nav, "nav");
//! let toggle = doc.append(nav, "button");
//! doc.set_attribute(toggle, "id", "nav-toggle");
//!
//! let mut page = Page::mount(doc, &Config::default());
//! page.click(toggle);
//! assert!(page.document().has_class(toggle, "active"));
//! ```

use super::document::Document;
use crate::app::{handle_event, Action, AnchorOrigin, AppState, Event, HoverGroup, Key};
use crate::domain::{ElementId, FieldName, NotificationKind, SectionBounds};
use crate::ui::{self, FieldBinding, Surface};
use crate::{initialize, Config};

/// Host-side effects collected while dispatching one event.
#[derive(Debug, Clone, Copy, Default)]
struct Dispatch {
    prevented: bool,
    stopped: bool,
}

/// A mounted portfolio page.
#[derive(Debug)]
pub struct Page<D: Document> {
    doc: D,
    state: AppState,
    surface: Surface,
    hero_buttons: Vec<(ElementId, String)>,
}

impl<D: Document> Page<D> {
    /// Binds to `doc` and renders the initial state.
    pub fn mount(mut doc: D, config: &Config) -> Self {
        let span = tracing::debug_span!("page_mount");
        let _guard = span.entered();

        let mut state = initialize(config);

        let mut surface = Surface::new(
            doc.query(".nav"),
            doc.query("#nav-toggle"),
            doc.query("#nav-menu"),
            anchors(&doc, ".nav-link"),
        );
        let hero_buttons = anchors(&doc, ".hero-actions .btn");

        if let Some(form) = doc.query("#contact-form") {
            bind_form(&mut doc, &mut state, &mut surface, form);
        }

        let options = state.reveal.observer_options();
        for selector in &config.reveal.selectors {
            for (index, element) in doc.query_all(selector).into_iter().enumerate() {
                state.reveal.register(element, index);
                doc.observe(element, &options);
            }
        }

        for element in doc.query_all(&config.tilt.selector) {
            state.tilt.register(element);
        }

        for group in HoverGroup::ALL {
            for selector in group.selectors() {
                for element in doc.query_all(selector) {
                    state.hover.register(element, group);
                }
            }
        }

        tracing::debug!(
            nav_links = surface.nav_links.len(),
            hero_buttons = hero_buttons.len(),
            fields = surface.fields.len(),
            reveal_targets = state.reveal.targets().count(),
            "page mounted"
        );

        let mut page = Self {
            doc,
            state,
            surface,
            hero_buttons,
        };
        page.render();
        page
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.state.now()
    }

    /// The window `load` event.
    pub fn load(&mut self) {
        self.dispatch(&Event::PageLoaded);
    }

    /// A click on `target`. Returns `true` if the default action was cancelled.
    ///
    /// Handlers run in bubbling order: the menu toggle, then anchors and
    /// notifications, then the document-wide outside-click check. The toggle
    /// stops propagation, so clicking it never counts as an outside click.
    pub fn click(&mut self, target: ElementId) -> bool {
        let mut outcome = Dispatch::default();

        if self.surface.toggle.is_some_and(|t| self.doc.contains(t, target)) {
            outcome = self.dispatch(&Event::MenuToggleClicked);
        } else if let Some((href, origin)) = self.anchor_at(target) {
            let target_top = self.resolve_fragment(&href);
            outcome = self.dispatch(&Event::AnchorClicked {
                href,
                target_top,
                origin,
            });
        } else if let Some(id) = self.surface.notification_at(&self.doc, target) {
            outcome = self.dispatch(&Event::NotificationClicked(id));
        }

        if !outcome.stopped {
            let inside_nav = self.surface.nav.map_or(true, |nav| self.doc.contains(nav, target));
            self.dispatch(&Event::DocumentClicked { inside_nav });
        }

        outcome.prevented
    }

    /// A `keydown` with `KeyboardEvent.key` equal to `key`.
    pub fn key_down(&mut self, key: &str) {
        self.dispatch(&Event::KeyPressed(Key::from_key_name(key)));
    }

    /// The viewport scrolled to `scroll_y`.
    pub fn scroll(&mut self, scroll_y: f64) {
        let sections = self
            .doc
            .query_all("section")
            .into_iter()
            .filter_map(|el| {
                let id = self.doc.attribute(el, "id")?;
                Some(SectionBounds::new(id, self.doc.offset_top(el), self.doc.offset_height(el)))
            })
            .collect();
        self.dispatch(&Event::Scrolled { scroll_y, sections });
    }

    /// The intersection watcher saw `ratio` of `element`.
    pub fn intersect(&mut self, element: ElementId, ratio: f64) {
        self.dispatch(&Event::Intersected { element, ratio });
    }

    /// The pointer moved to viewport position `(x, y)` over `element`.
    pub fn pointer_move(&mut self, element: ElementId, x: f64, y: f64) {
        let rect = self.doc.bounding_rect(element);
        self.dispatch(&Event::PointerMoved { element, x, y, rect });
    }

    pub fn pointer_leave(&mut self, element: ElementId) {
        self.dispatch(&Event::PointerLeft { element });
    }

    pub fn mouse_enter(&mut self, element: ElementId) {
        self.dispatch(&Event::HoverEntered(element));
    }

    pub fn mouse_leave(&mut self, element: ElementId) {
        self.dispatch(&Event::HoverLeft(element));
    }

    pub fn mouse_down(&mut self, element: ElementId) {
        self.dispatch(&Event::Pressed(element));
    }

    pub fn mouse_up(&mut self, element: ElementId) {
        self.dispatch(&Event::Released(element));
    }

    /// Focus left `element`. Ignored unless it is a contact form field.
    pub fn blur(&mut self, element: ElementId) {
        if let Some(binding) = self.surface.field(element).copied() {
            let value = self.doc.value(binding.input);
            self.dispatch(&Event::FieldBlurred {
                field: binding.name,
                value,
            });
        }
    }

    /// The value of `element` changed. Ignored unless it is a contact form field.
    pub fn input(&mut self, element: ElementId) {
        if let Some(binding) = self.surface.field(element).copied() {
            let value = self.doc.value(binding.input);
            self.dispatch(&Event::FieldInput {
                field: binding.name,
                value,
            });
        }
    }

    /// The contact form was submitted. Returns `true` if the default action was cancelled.
    /// Without a bound form nothing is dispatched.
    pub fn submit(&mut self) -> bool {
        if self.surface.fields.is_empty() {
            tracing::debug!("no contact form bound, submit ignored");
            return false;
        }
        let value = |name| {
            self.surface
                .field_input(name)
                .map(|el| self.doc.value(el))
                .unwrap_or_default()
        };
        let event = Event::SubmitRequested {
            name: value(FieldName::Name),
            email: value(FieldName::Email),
            message: value(FieldName::Message),
        };
        self.dispatch(&event).prevented
    }

    /// Shows a notification.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.dispatch(&Event::Notify {
            message: message.into(),
            kind,
        });
    }

    /// Moves the clock to `now_ms`, firing every timer that falls due.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some(task) = self.state.scheduler.pop_due(now_ms) {
            self.dispatch(&Event::TimerFired(task));
        }
        self.state.scheduler.set_now(now_ms);
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance_by(&mut self, delta_ms: u64) {
        self.advance_to(self.now().saturating_add(delta_ms));
    }

    fn dispatch(&mut self, event: &Event) -> Dispatch {
        let mut outcome = Dispatch::default();

        match handle_event(&mut self.state, event) {
            Ok((should_render, actions)) => {
                tracing::trace!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action, &mut outcome);
                }
                if should_render {
                    self.render();
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
            }
        }

        outcome
    }

    fn execute_action(&mut self, action: &Action, outcome: &mut Dispatch) {
        match action {
            Action::PreventDefault => outcome.prevented = true,
            Action::StopPropagation => outcome.stopped = true,
            Action::ScrollTo { top } => {
                tracing::debug!(top, "scrolling");
                self.doc.scroll_to(*top);
            }
            Action::Unobserve(element) => self.doc.unobserve(*element),
            Action::ResetForm => {
                for binding in &self.surface.fields {
                    self.doc.set_value(binding.input, "");
                }
            }
        }
    }

    fn render(&mut self) {
        let viewmodel = self.state.compute_viewmodel();
        ui::render(&mut self.doc, &mut self.surface, &viewmodel);
    }

    fn anchor_at(&self, target: ElementId) -> Option<(String, AnchorOrigin)> {
        let links = self.surface.nav_links.iter().map(|l| (l, AnchorOrigin::NavLink));
        let buttons = self.hero_buttons.iter().map(|b| (b, AnchorOrigin::HeroButton));
        links
            .chain(buttons)
            .find(|((el, _), _)| self.doc.contains(*el, target))
            .map(|((_, href), origin)| (href.clone(), origin))
    }

    /// Document offset of the element a `#id` href names.
    fn resolve_fragment(&self, href: &str) -> Option<f64> {
        let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let element = self
            .doc
            .query_all("[id]")
            .into_iter()
            .find(|&el| self.doc.attribute(el, "id").as_deref() == Some(id))?;
        Some(self.doc.offset_top(element))
    }
}

fn anchors<D: Document>(doc: &D, selector: &str) -> Vec<(ElementId, String)> {
    doc.query_all(selector)
        .into_iter()
        .map(|el| (el, doc.attribute(el, "href").unwrap_or_default()))
        .collect()
}

fn bind_form<D: Document>(doc: &mut D, state: &mut AppState, surface: &mut Surface, form: ElementId) {
    for group in doc.query_within(form, ".form-group") {
        if doc.query_within(group, ".field-error").is_empty() {
            let error = doc.create_element("div");
            doc.set_attribute(error, "class", "field-error");
            doc.set_style(error, "display", "none");
            doc.append_child(group, error);
        }
    }

    for input in doc.query_within(form, "input, textarea") {
        let Some(name) = doc.attribute(input, "name").as_deref().and_then(FieldName::parse) else {
            continue;
        };
        let error = doc
            .closest(input, ".form-group")
            .and_then(|group| doc.query_within(group, ".field-error").into_iter().next());
        surface.fields.push(FieldBinding { name, input, error });
    }

    surface.submit = doc.query_within(form, "button[type=\"submit\"]").into_iter().next();
    if let Some(submit) = surface.submit {
        let label = doc.text(submit);
        if !label.trim().is_empty() {
            state.contact.set_submit_label(label.trim());
        }
    }
}
