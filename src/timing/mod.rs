//! Deferred execution: timers and rate limiting.
//!
//! Every suspension point of the page (throttle windows, notification
//! transitions, the simulated submission delay) is expressed with the two
//! primitives here, both driven by a virtual clock the host advances.
//!
//! - [`scheduler`]: deadline-ordered task queue with cancellable handles
//! - [`throttle`]: leading-edge rate limiter

pub mod scheduler;
pub mod throttle;

pub use scheduler::{Scheduler, TimerHandle};
pub use throttle::Throttle;
