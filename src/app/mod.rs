//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host driver (`host::Page`) and the domain
//! and timing layers. Every page component is a small controller that owns
//! its state as a tagged enum; nothing here touches a document.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Host
//!                           ↑                   │
//!                           │                   └→ Scheduler (deferred Tasks)
//!                           └──────── TimerFired ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Host commands and deferred tasks emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Tagged state enums for each component
//! - [`state`]: Central application state container and view model computation
//! - [`navigation`], [`reveal`], [`tilt`], [`hover`], [`contact`], [`notifier`]: Component controllers
//!
//! # Example
//!
//! ```rust
//! use portfolio_ui::app::{handle_event, AppState, Event, Key};
//! use portfolio_ui::ui::Theme;
//! use portfolio_ui::Config;
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::KeyPressed(Key::Escape))?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), portfolio_ui::PortfolioError>(())
//! ```

pub mod actions;
pub mod contact;
pub mod handler;
pub mod hover;
pub mod modes;
pub mod navigation;
pub mod notifier;
pub mod reveal;
pub mod state;
pub mod tilt;

pub use actions::{Action, Task};
pub use contact::{ContactForm, SubmitOutcome};
pub use handler::{handle_event, Event, Key};
pub use hover::{HoverController, HoverGroup};
pub use modes::{FieldState, HoverState, MenuState, RevealState, SubmitState, TiltState};
pub use navigation::{AnchorOrigin, NavigationController};
pub use notifier::NotificationManager;
pub use reveal::{ObserverOptions, RevealController};
pub use state::AppState;
pub use tilt::TiltController;
