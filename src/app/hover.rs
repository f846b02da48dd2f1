//! Decorative hover and press effects.
//!
//! Each decorated element belongs to a [`HoverGroup`] that fixes its styles
//! at rest, under the pointer and (for buttons) while pressed. Only elements
//! the pointer has touched get styles written, so untouched elements keep
//! whatever the stylesheet or the reveal engine gave them.

use super::modes::HoverState;
use crate::domain::ElementId;
use std::collections::BTreeMap;

/// Element families with their own hover treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HoverGroup {
    Button,
    Card,
    Stat,
    ProjectLink,
    SocialLink,
    SkillTag,
}

impl HoverGroup {
    pub const ALL: [Self; 6] = [
        Self::Button,
        Self::Card,
        Self::Stat,
        Self::ProjectLink,
        Self::SocialLink,
        Self::SkillTag,
    ];

    /// Selectors matching this group's elements.
    #[must_use]
    pub const fn selectors(self) -> &'static [&'static str] {
        match self {
            Self::Button => &[".btn"],
            Self::Card => &[".skill-category", ".project-card", ".timeline-item"],
            Self::Stat => &[".stat"],
            Self::ProjectLink => &[".project-link"],
            Self::SocialLink => &[".social-link"],
            Self::SkillTag => &[".skill-tag"],
        }
    }

    /// Inline styles for `state`, as `(property, value)` pairs. An empty
    /// value clears the property.
    #[must_use]
    pub const fn styles(self, state: HoverState) -> &'static [(&'static str, &'static str)] {
        match (self, state) {
            (Self::Button, HoverState::Rest) => &[("transform", "translateY(0)"), ("box-shadow", "")],
            (Self::Button, HoverState::Hovered) => &[
                ("transform", "translateY(-2px) scale(1)"),
                ("box-shadow", "0 8px 25px rgba(0, 0, 0, 0.3)"),
            ],
            (Self::Button, HoverState::Pressed) => &[
                ("transform", "translateY(0) scale(0.98)"),
                ("box-shadow", "0 8px 25px rgba(0, 0, 0, 0.3)"),
            ],
            (Self::Card, HoverState::Rest) => &[("transform", "translateY(0)")],
            (Self::Card, _) => &[("transform", "translateY(-8px)")],
            (Self::Stat, HoverState::Rest) => &[
                ("transform", "translateY(0)"),
                ("border-color", "var(--border-color)"),
            ],
            (Self::Stat, _) => &[
                ("transform", "translateY(-4px)"),
                ("border-color", "var(--accent-color)"),
            ],
            (Self::ProjectLink, HoverState::Rest) => &[("transform", "translateX(0)")],
            (Self::ProjectLink, _) => &[("transform", "translateX(5px)")],
            (Self::SocialLink, HoverState::Rest) => &[("transform", "translateY(0)"), ("background-color", "")],
            (Self::SocialLink, _) => &[
                ("transform", "translateY(-2px)"),
                ("background-color", "rgba(99, 102, 241, 0.2)"),
            ],
            (Self::SkillTag, HoverState::Rest) => &[
                ("transform", "translateY(0) scale(1)"),
                ("background-color", "rgba(99, 102, 241, 0.1)"),
            ],
            (Self::SkillTag, _) => &[
                ("transform", "translateY(-2px) scale(1.05)"),
                ("background-color", "rgba(99, 102, 241, 0.2)"),
            ],
        }
    }

    const fn pressable(self) -> bool {
        matches!(self, Self::Button)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HoverController {
    groups: BTreeMap<ElementId, HoverGroup>,
    states: BTreeMap<ElementId, HoverState>,
}

impl HoverController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element. The first group an element is registered with wins.
    pub fn register(&mut self, element: ElementId, group: HoverGroup) {
        self.groups.entry(element).or_insert(group);
    }

    #[must_use]
    pub fn group(&self, element: ElementId) -> Option<HoverGroup> {
        self.groups.get(&element).copied()
    }

    #[must_use]
    pub fn state(&self, element: ElementId) -> Option<HoverState> {
        self.states.get(&element).copied()
    }

    /// Every registered element with its group.
    pub fn registered(&self) -> impl Iterator<Item = (ElementId, HoverGroup)> + '_ {
        self.groups.iter().map(|(el, &group)| (*el, group))
    }

    /// Touched elements with their group and state.
    pub fn touched(&self) -> impl Iterator<Item = (ElementId, HoverGroup, HoverState)> + '_ {
        self.states
            .iter()
            .filter_map(|(el, &state)| self.groups.get(el).map(|&group| (*el, group, state)))
    }

    pub fn on_enter(&mut self, element: ElementId) -> bool {
        self.set(element, HoverState::Hovered, |_| true)
    }

    pub fn on_leave(&mut self, element: ElementId) -> bool {
        self.set(element, HoverState::Rest, |_| true)
    }

    pub fn on_press(&mut self, element: ElementId) -> bool {
        self.set(element, HoverState::Pressed, HoverGroup::pressable)
    }

    pub fn on_release(&mut self, element: ElementId) -> bool {
        let pressed = self.state(element) == Some(HoverState::Pressed);
        pressed && self.set(element, HoverState::Hovered, HoverGroup::pressable)
    }

    fn set(&mut self, element: ElementId, state: HoverState, allowed: impl Fn(HoverGroup) -> bool) -> bool {
        match self.groups.get(&element) {
            Some(&group) if allowed(group) => {
                self.states.insert(element, state);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_elements_have_no_state() {
        let mut hover = HoverController::new();
        hover.register(ElementId(1), HoverGroup::Card);
        assert_eq!(hover.touched().count(), 0);
    }

    #[test]
    fn registered_lists_every_element_once() {
        let mut hover = HoverController::new();
        hover.register(ElementId(3), HoverGroup::Card);
        hover.register(ElementId(1), HoverGroup::Button);
        hover.register(ElementId(3), HoverGroup::Button);
        let all: Vec<_> = hover.registered().collect();
        assert_eq!(all, vec![(ElementId(1), HoverGroup::Button), (ElementId(3), HoverGroup::Card)]);
    }

    #[test]
    fn button_press_cycle() {
        let mut hover = HoverController::new();
        let btn = ElementId(1);
        hover.register(btn, HoverGroup::Button);

        assert!(hover.on_enter(btn));
        assert!(hover.on_press(btn));
        assert_eq!(hover.state(btn), Some(HoverState::Pressed));
        assert!(hover.on_release(btn));
        assert_eq!(hover.state(btn), Some(HoverState::Hovered));
        assert!(hover.on_leave(btn));
        assert_eq!(hover.state(btn), Some(HoverState::Rest));
    }

    #[test]
    fn only_buttons_press() {
        let mut hover = HoverController::new();
        let card = ElementId(2);
        hover.register(card, HoverGroup::Card);
        hover.on_enter(card);
        assert!(!hover.on_press(card));
        assert!(!hover.on_release(card));
        assert_eq!(hover.state(card), Some(HoverState::Hovered));
    }

    #[test]
    fn first_group_wins() {
        let mut hover = HoverController::new();
        hover.register(ElementId(5), HoverGroup::Button);
        hover.register(ElementId(5), HoverGroup::Card);
        assert_eq!(hover.group(ElementId(5)), Some(HoverGroup::Button));
    }

    #[test]
    fn stat_hover_swaps_border_color() {
        let styles = HoverGroup::Stat.styles(HoverState::Hovered);
        assert!(styles.contains(&("border-color", "var(--accent-color)")));
    }
}
