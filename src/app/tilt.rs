//! Tilt effect controller.
//!
//! While the pointer moves over a tilt element, the element rotates toward
//! the pointer: `rotateX = -(dy / height) × max` and
//! `rotateY = (dx / width) × max`, where `(dx, dy)` is the pointer offset
//! from the element's center. Leaving the element returns it to neutral with
//! the same perspective depth.

use super::modes::TiltState;
use crate::domain::{ElementId, Rect};
use crate::TiltConfig;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct TiltController {
    elements: BTreeSet<ElementId>,
    states: BTreeMap<ElementId, TiltState>,
    max_degrees: f64,
    lift_px: f64,
    perspective_px: f64,
}

impl TiltController {
    #[must_use]
    pub const fn new(config: &TiltConfig) -> Self {
        Self {
            elements: BTreeSet::new(),
            states: BTreeMap::new(),
            max_degrees: config.max_degrees,
            lift_px: config.lift_px,
            perspective_px: config.perspective_px,
        }
    }

    pub fn register(&mut self, element: ElementId) {
        self.elements.insert(element);
    }

    #[must_use]
    pub fn state(&self, element: ElementId) -> Option<TiltState> {
        self.states.get(&element).copied()
    }

    /// Elements the pointer has interacted with, and their current tilt.
    pub fn touched(&self) -> impl Iterator<Item = (ElementId, TiltState)> + '_ {
        self.states.iter().map(|(&el, &state)| (el, state))
    }

    /// Tilts `element` toward the pointer at `(x, y)`. Returns `true` if applied.
    ///
    /// Degenerate rectangles and pointers outside `rect` are ignored. Inside
    /// it, each rotation stays within half of `max_degrees`.
    pub fn on_pointer_move(&mut self, element: ElementId, x: f64, y: f64, rect: Rect) -> bool {
        let degenerate = rect.width <= 0.0 || rect.height <= 0.0;
        if !self.elements.contains(&element) || degenerate || !rect.contains(x, y) {
            return false;
        }

        let (cx, cy) = rect.center();
        let dx = x - cx;
        let dy = y - cy;
        let state = TiltState::Tilted {
            rotate_x: -(dy / rect.height) * self.max_degrees,
            rotate_y: (dx / rect.width) * self.max_degrees,
        };
        tracing::trace!(element = %element, ?state, "tilt updated");
        self.states.insert(element, state);
        true
    }

    /// Resets `element` to neutral. Returns `true` if it was tracked.
    pub fn on_pointer_leave(&mut self, element: ElementId) -> bool {
        if !self.elements.contains(&element) {
            return false;
        }
        self.states.insert(element, TiltState::Neutral);
        true
    }

    /// CSS transform for a tilt state.
    #[must_use]
    pub fn transform(&self, state: TiltState) -> String {
        let (rotate_x, rotate_y, lift) = match state {
            TiltState::Neutral => (0.0, 0.0, 0.0),
            TiltState::Tilted { rotate_x, rotate_y } => (rotate_x, rotate_y, self.lift_px),
        };
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            number(self.perspective_px),
            number(rotate_x),
            number(rotate_y),
            number(lift),
        )
    }
}

/// Two decimals, trailing zeros trimmed, no negative zero.
pub(crate) fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> (TiltController, ElementId) {
        let mut tilt = TiltController::new(&TiltConfig::default());
        let el = ElementId(3);
        tilt.register(el);
        (tilt, el)
    }

    const RECT: Rect = Rect::new(100.0, 100.0, 200.0, 100.0);

    #[test]
    fn corner_reaches_half_max() {
        let (mut tilt, el) = controller();
        assert!(tilt.on_pointer_move(el, 300.0, 100.0, RECT));
        assert_eq!(
            tilt.state(el),
            Some(TiltState::Tilted {
                rotate_x: 6.0,
                rotate_y: 6.0
            })
        );
        assert_eq!(
            tilt.transform(tilt.state(el).unwrap()),
            "perspective(900px) rotateX(6deg) rotateY(6deg) translateZ(8px)"
        );
    }

    #[test]
    fn center_is_flat_but_lifted() {
        let (mut tilt, el) = controller();
        tilt.on_pointer_move(el, 200.0, 150.0, RECT);
        assert_eq!(
            tilt.transform(tilt.state(el).unwrap()),
            "perspective(900px) rotateX(0deg) rotateY(0deg) translateZ(8px)"
        );
    }

    #[test]
    fn leave_resets_with_same_perspective() {
        let (mut tilt, el) = controller();
        tilt.on_pointer_move(el, 120.0, 180.0, RECT);
        assert!(tilt.on_pointer_leave(el));
        assert_eq!(
            tilt.transform(tilt.state(el).unwrap()),
            "perspective(900px) rotateX(0deg) rotateY(0deg) translateZ(0px)"
        );
    }

    #[test]
    fn ignores_unregistered_and_degenerate() {
        let (mut tilt, el) = controller();
        assert!(!tilt.on_pointer_move(ElementId(99), 0.0, 0.0, RECT));
        assert!(!tilt.on_pointer_move(el, 0.0, 0.0, Rect::new(0.0, 0.0, 0.0, 10.0)));
        assert!(!tilt.on_pointer_leave(ElementId(99)));
        assert_eq!(tilt.touched().count(), 0);
    }

    #[test]
    fn pointer_outside_bounds_is_ignored() {
        let (mut tilt, el) = controller();
        assert!(!tilt.on_pointer_move(el, 1_000.0, 150.0, RECT));
        assert!(!tilt.on_pointer_move(el, 200.0, 99.0, RECT));
        assert_eq!(tilt.state(el), None);

        tilt.on_pointer_move(el, 300.0, 200.0, RECT);
        let Some(TiltState::Tilted { rotate_x, rotate_y }) = tilt.state(el) else {
            panic!("edge of the element should tilt");
        };
        assert!(rotate_x.abs() <= 6.0 && rotate_y.abs() <= 6.0);
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(number(-0.0001), "0");
        assert_eq!(number(-3.456), "-3.46");
        assert_eq!(number(2.5), "2.5");
    }
}
