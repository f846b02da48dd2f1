//! Portfolio UI: interactive behavior for a single-page personal portfolio.
//!
//! The crate drives everything a portfolio page does in response to the user:
//! - Mobile menu toggling, smooth-scroll anchor navigation and active-link tracking
//! - Scroll-triggered, one-shot reveal animations with per-group stagger
//! - Pointer-following 3-D tilt and decorative hover effects
//! - A contact form with inline validation and a simulated submission
//! - Transient, dismissible notifications, one on screen at a time

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host glue (browser bindings, outside this crate)   │  ← Real DOM
//! └─────────────────────────────────────────────────────┘
//!                        │  Document trait
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Layer (host/)                                 │  ← Page driver
//! │  - Maps input events to app events                  │
//! │  - Executes actions, fires due timers               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - One controller per page component                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Timing Layer  │   │ Domain Layer  │
//! │ (ui/)         │   │ (timing/)     │   │ (domain/)     │
//! │ - View models │   │ - Timers      │   │ - Validation  │
//! │ - Rendering   │   │ - Throttle    │   │ - Errors      │
//! │ - Theming     │   │               │   │ - Geometry    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing into an in-memory buffer   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (form fields, notifications, errors)
//! - [`timing`]: Virtual-clock scheduler and throttle
//! - [`host`]: The `Document` capability, an in-memory document and the `Page` driver
//! - [`ui`]: View models, rendering and theming
//! - [`observability`]: OpenTelemetry tracing setup
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
//!
//! let mut page = Page::mount(doc, &Config::default());
//! page.load();
//! page.advance_by(1_000);
//! assert_eq!(page.state().notifications.entries().len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod host;
pub mod observability;
pub mod timing;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Task};
pub use domain::{PortfolioError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Welcome copy shown shortly after the page finishes loading.
pub const DEFAULT_WELCOME: &str =
    "Welcome to my portfolio! Navigate using the menu above and feel free to get in touch.";

/// Page configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// header_offset = 64
/// welcome_message = ""      # empty disables the welcome notification
///
/// [reveal]
/// threshold = 0.15
/// root_margin = "0px"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed header height subtracted from anchor targets when scrolling.
    pub header_offset: f64,

    /// Distance below the viewport top used to decide the current section.
    pub active_section_offset: f64,

    /// Throttle window for active-link tracking.
    pub active_section_throttle_ms: u64,

    /// Throttle window for the scrolled-header check.
    pub nav_scroll_throttle_ms: u64,

    /// Scroll position past which the header carries the `scrolled` class.
    pub nav_scrolled_threshold: f64,

    /// Simulated network latency of a contact form submission.
    pub submit_delay_ms: u64,

    /// Text of the welcome notification. `None` or empty disables it.
    pub welcome_message: Option<String>,

    /// Delay between page load and the welcome notification.
    pub welcome_delay_ms: u64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    pub reveal: RevealConfig,
    pub tilt: TiltConfig,
    pub notification: NotificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            active_section_offset: 150.0,
            active_section_throttle_ms: 100,
            nav_scroll_throttle_ms: 16,
            nav_scrolled_threshold: 50.0,
            submit_delay_ms: 1_500,
            welcome_message: Some(DEFAULT_WELCOME.to_string()),
            welcome_delay_ms: 1_000,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            reveal: RevealConfig::default(),
            tilt: TiltConfig::default(),
            notification: NotificationConfig::default(),
        }
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Selector groups whose elements fade and slide in. Stagger restarts per group.
    pub selectors: Vec<String>,

    /// Visible fraction at which an element is revealed.
    pub threshold: f64,

    /// Intersection root margin, CSS shorthand.
    pub root_margin: String,

    /// Delay added per element index within its group.
    pub stagger_ms: u64,

    /// Initial downward offset of hidden elements.
    pub offset_px: f64,

    /// Fade and slide duration.
    pub duration_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".section-header",
                ".about-content",
                ".skill-category",
                ".project-card",
                ".timeline-item",
                ".contact-card",
                ".contact-form",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            stagger_ms: 100,
            offset_px: 30.0,
            duration_ms: 600,
        }
    }
}

/// Tilt effect settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub selector: String,
    /// Rotation at the element's edge.
    pub max_degrees: f64,
    /// Forward translation while tilted.
    pub lift_px: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            selector: "[data-tilt]".to_string(),
            max_degrees: 12.0,
            lift_px: 8.0,
            perspective_px: 900.0,
        }
    }
}

/// Notification timings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delay before the slide-in starts, so the off-screen position is laid out first.
    pub enter_delay_ms: u64,
    /// Slide-out duration; the element is removed afterwards.
    pub exit_ms: u64,
    /// Time on screen before self-dismissal.
    pub lifetime_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            exit_ms: 300,
            lifetime_ms: 5_000,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Toml`] for malformed TOML and
    /// [`PortfolioError::Config`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Builds a configuration from flat string attributes.
    ///
    /// Intended for `data-*` attributes on the page's `<body>`. Values that
    /// fail to parse, and non-finite numbers, fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use portfolio_ui::Config;
    ///
    /// let mut attrs = BTreeMap::new();
    /// attrs.insert("header_offset".to_string(), "64".to_string());
    /// attrs.insert("reveal_threshold".to_string(), "oops".to_string());
    ///
    /// let config = Config::from_attributes(&attrs);
    /// assert_eq!(config.header_offset, 64.0);
    /// assert_eq!(config.reveal.threshold, 0.1);
    /// ```
    #[must_use]
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> Self {
        fn parsed<T: std::str::FromStr>(attrs: &BTreeMap<String, String>, key: &str, fallback: T) -> T {
            attrs
                .get(key)
                .and_then(|s| s.trim().parse::<T>().ok())
                .unwrap_or(fallback)
        }

        fn finite(attrs: &BTreeMap<String, String>, key: &str, fallback: f64) -> f64 {
            Some(parsed(attrs, key, fallback))
                .filter(|v| v.is_finite())
                .unwrap_or(fallback)
        }

        let defaults = Self::default();

        let selectors = attrs
            .get("reveal_selectors")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or(defaults.reveal.selectors);

        Self {
            header_offset: finite(attrs, "header_offset", defaults.header_offset),
            active_section_offset: finite(attrs, "active_section_offset", defaults.active_section_offset),
            active_section_throttle_ms: parsed(
                attrs,
                "active_section_throttle_ms",
                defaults.active_section_throttle_ms,
            ),
            nav_scroll_throttle_ms: parsed(attrs, "nav_scroll_throttle_ms", defaults.nav_scroll_throttle_ms),
            nav_scrolled_threshold: finite(attrs, "nav_scrolled_threshold", defaults.nav_scrolled_threshold),
            submit_delay_ms: parsed(attrs, "submit_delay_ms", defaults.submit_delay_ms),
            welcome_message: attrs
                .get("welcome_message")
                .cloned()
                .or(defaults.welcome_message),
            welcome_delay_ms: parsed(attrs, "welcome_delay_ms", defaults.welcome_delay_ms),
            theme_name: attrs.get("theme").cloned(),
            theme_file: attrs.get("theme_file").cloned(),
            trace_level: attrs.get("trace_level").cloned(),
            reveal: RevealConfig {
                selectors,
                threshold: finite(attrs, "reveal_threshold", defaults.reveal.threshold).clamp(0.0, 1.0),
                root_margin: attrs
                    .get("reveal_root_margin")
                    .cloned()
                    .unwrap_or(defaults.reveal.root_margin),
                stagger_ms: parsed(attrs, "reveal_stagger_ms", defaults.reveal.stagger_ms),
                ..defaults.reveal
            },
            tilt: TiltConfig {
                selector: attrs
                    .get("tilt_selector")
                    .cloned()
                    .unwrap_or(defaults.tilt.selector),
                ..defaults.tilt
            },
            notification: NotificationConfig {
                lifetime_ms: parsed(attrs, "notification_lifetime_ms", defaults.notification.lifetime_ms),
                ..defaults.notification
            },
        }
    }

    /// The welcome text, if the welcome notification is enabled.
    #[must_use]
    pub fn welcome(&self) -> Option<&str> {
        self.welcome_message.as_deref().filter(|m| !m.trim().is_empty())
    }

    fn validate(&self) -> Result<()> {
        let lengths = [
            ("header_offset", self.header_offset),
            ("active_section_offset", self.active_section_offset),
            ("nav_scrolled_threshold", self.nav_scrolled_threshold),
            ("reveal.offset_px", self.reveal.offset_px),
            ("tilt.max_degrees", self.tilt.max_degrees),
            ("tilt.lift_px", self.tilt.lift_px),
        ];
        if let Some((key, value)) = lengths.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PortfolioError::Config(format!("{key} must be a finite number, got {value}")));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(PortfolioError::Config(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if !(self.tilt.perspective_px.is_finite() && self.tilt.perspective_px > 0.0) {
            return Err(PortfolioError::Config(format!(
                "tilt.perspective_px must be positive, got {}",
                self.tilt.perspective_px
            )));
        }
        Ok(())
    }
}

/// Initializes application state from configuration.
///
/// Resolves the theme (file, then name, then default) and builds every
/// controller. Theme problems are logged and the default theme is used.
///
/// # Example
///
/// ```rust
/// use portfolio_ui::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.notifications.entries().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing portfolio page state");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}
