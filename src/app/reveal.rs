//! Scroll reveal engine.
//!
//! Reveal-eligible elements start transparent and shifted down. The first
//! time one is seen at or above the visibility threshold it fades and slides
//! into place, then stops being observed. Revealed elements never hide again.

use super::modes::RevealState;
use crate::domain::ElementId;
use crate::RevealConfig;
use std::collections::BTreeMap;

/// A watched element and its progress.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub element: ElementId,
    /// Position within its selector group, used for the stagger delay.
    pub index: usize,
    pub state: RevealState,
}

impl RevealTarget {
    #[must_use]
    pub fn has_been_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }
}

/// Options the host passes to its intersection watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Debug, Clone)]
pub struct RevealController {
    targets: BTreeMap<ElementId, RevealTarget>,
    threshold: f64,
    root_margin: String,
    stagger_ms: u64,
    offset_px: f64,
    duration_ms: u64,
}

impl RevealController {
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            targets: BTreeMap::new(),
            threshold: config.threshold,
            root_margin: config.root_margin.clone(),
            stagger_ms: config.stagger_ms,
            offset_px: config.offset_px,
            duration_ms: config.duration_ms,
        }
    }

    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }

    /// Starts tracking an element. Re-registering an element keeps its first index.
    pub fn register(&mut self, element: ElementId, index: usize) {
        self.targets.entry(element).or_insert(RevealTarget {
            element,
            index,
            state: RevealState::Hidden,
        });
    }

    #[must_use]
    pub fn target(&self, element: ElementId) -> Option<&RevealTarget> {
        self.targets.get(&element)
    }

    pub fn targets(&self) -> impl Iterator<Item = &RevealTarget> {
        self.targets.values()
    }

    #[must_use]
    pub fn is_target(&self, element: ElementId) -> bool {
        self.targets.contains_key(&element)
    }

    /// Reports that `ratio` of `element` is visible.
    ///
    /// Returns `true` exactly once per element: on the report that reveals it.
    pub fn on_intersection(&mut self, element: ElementId, ratio: f64) -> bool {
        let Some(target) = self.targets.get_mut(&element) else {
            return false;
        };
        if target.state == RevealState::Revealed || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }

        target.state = RevealState::Revealed;
        tracing::debug!(element = %element, ratio, index = target.index, "element revealed");
        true
    }

    /// Transition delay for the element at `index` in its group, in seconds.
    #[must_use]
    pub fn delay_secs(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let delay_ms = (index as u64).saturating_mul(self.stagger_ms) as f64;
        delay_ms / 1_000.0
    }

    #[must_use]
    pub const fn offset_px(&self) -> f64 {
        self.offset_px
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let ms = self.duration_ms as f64;
        ms / 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RevealController {
        RevealController::new(&RevealConfig::default())
    }

    #[test]
    fn reveals_once_at_threshold() {
        let mut reveal = controller();
        let el = ElementId(7);
        reveal.register(el, 0);

        assert!(!reveal.on_intersection(el, 0.05));
        assert!(reveal.on_intersection(el, 0.15));
        assert!(!reveal.on_intersection(el, 0.0));
        assert!(!reveal.on_intersection(el, 0.9));
        assert!(reveal.target(el).unwrap().has_been_revealed());
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut reveal = controller();
        assert!(!reveal.is_target(ElementId(1)));
        assert!(!reveal.on_intersection(ElementId(1), 1.0));
        reveal.register(ElementId(1), 0);
        assert!(reveal.is_target(ElementId(1)));
    }

    #[test]
    fn stagger_grows_with_index() {
        let reveal = controller();
        assert_eq!(reveal.delay_secs(0), 0.0);
        assert!((reveal.delay_secs(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn zero_threshold_still_needs_some_visibility() {
        let mut reveal = RevealController::new(&RevealConfig {
            threshold: 0.0,
            ..RevealConfig::default()
        });
        reveal.register(ElementId(1), 0);
        assert!(!reveal.on_intersection(ElementId(1), 0.0));
        assert!(reveal.on_intersection(ElementId(1), 0.01));
    }
}
