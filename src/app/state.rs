//! Application state management and view model computation.
//!
//! [`AppState`] owns one controller per page component plus the scheduler
//! their deferred work runs on. It is the single source of truth for the
//! page: the document is only ever written by rendering a view model
//! computed from it.
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::app::AppState;
//! use portfolio_ui::ui::Theme;
//! use portfolio_ui::Config;
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! assert!(!viewmodel.nav.menu_open);
//! assert_eq!(viewmodel.submit.opacity, "1");
//! ```

use super::actions::Task;
use super::contact::ContactForm;
use super::hover::HoverController;
use super::modes::{MenuState, RevealState};
use super::navigation::NavigationController;
use super::notifier::NotificationManager;
use super::reveal::RevealController;
use super::tilt::{number, TiltController};
use crate::domain::{NotificationId, NotificationKind, NotificationPhase};
use crate::timing::Scheduler;
use crate::ui::viewmodel::{FieldView, NavView, NotificationView, PageViewModel, StyleView, SubmitView};
use crate::ui::Theme;
use crate::Config;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Notification look, resolved once at startup.
    pub theme: Theme,

    /// Deferred work: notification transitions, the simulated submission
    /// and the welcome message.
    pub scheduler: Scheduler<Task>,

    pub navigation: NavigationController,
    pub reveal: RevealController,
    pub tilt: TiltController,
    pub hover: HoverController,
    pub contact: ContactForm,
    pub notifications: NotificationManager,

    /// Set once the page has finished loading.
    pub loaded: bool,

    /// Welcome text, `None` when disabled.
    pub welcome: Option<String>,
    pub welcome_delay_ms: u64,
    pub submit_delay_ms: u64,
}

impl AppState {
    /// Creates the state of a freshly mounted page.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            theme,
            scheduler: Scheduler::new(),
            navigation: NavigationController::new(config),
            reveal: RevealController::new(&config.reveal),
            tilt: TiltController::new(&config.tilt),
            hover: HoverController::new(),
            contact: ContactForm::default(),
            notifications: NotificationManager::new(config.notification.clone()),
            loaded: false,
            welcome: config.welcome().map(str::to_string),
            welcome_delay_ms: config.welcome_delay_ms,
            submit_delay_ms: config.submit_delay_ms,
        }
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Shows a notification, evicting the current one.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.notifications.notify(&mut self.scheduler, message, kind)
    }

    /// Derives everything the page displays from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        let nav = NavView {
            menu_open: self.navigation.menu == MenuState::Open,
            scrolled: self.navigation.scrolled,
            active_link: self.navigation.active_link.clone(),
        };

        let duration = number(self.reveal.duration_secs());
        let reveals = self
            .reveal
            .targets()
            .map(|target| {
                let delay = number(self.reveal.delay_secs(target.index));
                let (opacity, transform) = match target.state {
                    RevealState::Hidden => ("0", format!("translateY({}px)", number(self.reveal.offset_px()))),
                    RevealState::Revealed => ("1", "translateY(0)".to_string()),
                };
                StyleView {
                    element: target.element,
                    styles: vec![
                        ("opacity", opacity.to_string()),
                        ("transform", transform),
                        (
                            "transition",
                            format!("opacity {duration}s ease {delay}s, transform {duration}s ease {delay}s"),
                        ),
                    ],
                }
            })
            .collect();

        // Reveal targets keep their staggered transition.
        let eased = self
            .hover
            .registered()
            .filter(|&(element, _)| !self.reveal.is_target(element))
            .map(|(element, _)| StyleView {
                element,
                styles: vec![("transition", self.theme.hover_transition.clone())],
            });
        let hovers = eased
            .chain(self.hover.touched().map(|(element, group, state)| StyleView {
                element,
                styles: group
                    .styles(state)
                    .iter()
                    .map(|&(property, value)| (property, value.to_string()))
                    .collect(),
            }))
            .collect();

        let tilts = self
            .tilt
            .touched()
            .map(|(element, state)| StyleView {
                element,
                styles: vec![("transform", self.tilt.transform(state))],
            })
            .collect();

        let fields = self
            .contact
            .slots()
            .map(|slot| {
                let invalid = slot.field.error_message.is_some();
                let when_invalid = |value: &str| if invalid { value.to_string() } else { String::new() };
                FieldView {
                    name: slot.field.name,
                    invalid,
                    error_text: slot.field.error_message.clone().unwrap_or_default(),
                    border: when_invalid(self.theme.colors.error_border.as_str()),
                    glow: when_invalid(self.theme.colors.error_glow.as_str()),
                    error_color: self.theme.colors.error_text.clone(),
                }
            })
            .collect();

        let sending = self.contact.is_sending();
        let submit = SubmitView {
            label: self.contact.submit_label().to_string(),
            disabled: sending,
            opacity: if sending { "0.7" } else { "1" },
        };

        let notifications = self
            .notifications
            .entries()
            .iter()
            .map(|n| NotificationView {
                id: n.id,
                class: format!("notification notification--{}", n.kind),
                text: format!("{} {}", self.theme.icon(n.kind), n.message),
                background: self.theme.background(n.kind).to_string(),
                color: self.theme.colors.text.clone(),
                shadow: self.theme.colors.shadow.clone(),
                transform: match n.phase {
                    NotificationPhase::Shown => "translateX(0)",
                    NotificationPhase::Entering | NotificationPhase::Leaving => "translateX(100%)",
                },
            })
            .collect();

        PageViewModel {
            nav,
            loaded: self.loaded,
            reveals,
            hovers,
            tilts,
            fields,
            submit,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ElementId, FieldName};

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    #[test]
    fn hidden_reveal_styles_carry_stagger() {
        let mut state = state();
        state.reveal.register(ElementId(4), 2);

        let vm = state.compute_viewmodel();
        let styles = &vm.reveals[0].styles;
        assert!(styles.contains(&("opacity", "0".to_string())));
        assert!(styles.contains(&("transform", "translateY(30px)".to_string())));
        assert!(styles.contains(&(
            "transition",
            "opacity 0.6s ease 0.2s, transform 0.6s ease 0.2s".to_string()
        )));
    }

    #[test]
    fn sending_dims_and_disables_submit() {
        let mut state = state();
        state
            .contact
            .on_submit("Ada", "ada@example.com", "Hello, this is a test message.");

        let vm = state.compute_viewmodel();
        assert_eq!(vm.submit.label, "Sending...");
        assert!(vm.submit.disabled);
        assert_eq!(vm.submit.opacity, "0.7");
    }

    #[test]
    fn field_errors_are_displayed() {
        let mut state = state();
        state.contact.on_blur(FieldName::Email, "nope");

        let vm = state.compute_viewmodel();
        let email = vm.fields.iter().find(|f| f.name == FieldName::Email).unwrap();
        assert!(email.invalid);
        assert_eq!(email.error_text, "Please enter a valid email address");
        assert_eq!(email.border, "#ef4444");
        assert_eq!(email.glow, "0 0 0 3px rgba(239, 68, 68, 0.1)");

        let name = vm.fields.iter().find(|f| f.name == FieldName::Name).unwrap();
        assert!(name.border.is_empty() && name.glow.is_empty());
        assert_eq!(name.error_color, "#ef4444");
    }

    #[test]
    fn notification_view_uses_theme() {
        let mut state = state();
        state.notify("Saved", NotificationKind::Success);

        let vm = state.compute_viewmodel();
        let view = &vm.notifications[0];
        assert_eq!(view.class, "notification notification--success");
        assert_eq!(view.text, "✓ Saved");
        assert_eq!(view.transform, "translateX(100%)");
    }

    #[test]
    fn disabled_welcome_is_none() {
        let config = Config {
            welcome_message: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(AppState::new(&config, Theme::default()).welcome, None);
    }
}
