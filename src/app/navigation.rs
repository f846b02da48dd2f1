//! Navigation controller: mobile menu, anchor scrolling and active link.

use super::modes::MenuState;
use crate::domain::SectionBounds;
use crate::timing::Throttle;
use crate::Config;

/// Which control an anchor click came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOrigin {
    /// A link inside the navigation menu. Closes the mobile menu.
    NavLink,
    /// A call-to-action button in the hero section. Leaves the menu alone.
    HeroButton,
}

/// State of the page header and its menu.
#[derive(Debug, Clone)]
pub struct NavigationController {
    pub menu: MenuState,

    /// Anchor (`#id`) of the highlighted link. Never cleared once set.
    pub active_link: Option<String>,

    /// Whether the page has scrolled past the header threshold.
    pub scrolled: bool,

    header_offset: f64,
    section_offset: f64,
    scrolled_threshold: f64,
    section_throttle: Throttle,
    header_throttle: Throttle,
}

impl NavigationController {
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self {
            menu: MenuState::Closed,
            active_link: None,
            scrolled: false,
            header_offset: config.header_offset,
            section_offset: config.active_section_offset,
            scrolled_threshold: config.nav_scrolled_threshold,
            section_throttle: Throttle::new(config.active_section_throttle_ms),
            header_throttle: Throttle::new(config.nav_scroll_throttle_ms),
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
        tracing::debug!(menu = ?self.menu, "menu toggled");
    }

    /// Closes the menu. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu == MenuState::Open;
        self.menu = MenuState::Closed;
        was_open
    }

    /// Handles a click on an in-page anchor.
    ///
    /// Returns the scroll target if `href` is `#<id>` and the host found the
    /// element at `target_top`. Anything else is left to the browser.
    pub fn follow_anchor(&mut self, href: &str, target_top: Option<f64>, origin: AnchorOrigin) -> Option<f64> {
        if !is_fragment(href) {
            tracing::debug!(href = %href, "not an in-page anchor");
            return None;
        }
        let Some(target_top) = target_top else {
            tracing::debug!(href = %href, "anchor target missing");
            return None;
        };

        if origin == AnchorOrigin::NavLink {
            self.close_menu();
        }
        self.active_link = Some(href.to_string());

        Some(target_top - self.header_offset)
    }

    /// Handles a scroll to `scroll_y` at `now_ms`. Returns `true` if anything changed.
    ///
    /// The header check and the active-link scan are throttled separately.
    pub fn on_scroll(&mut self, now_ms: u64, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let mut changed = false;

        if self.header_throttle.try_fire(now_ms) {
            let scrolled = scroll_y > self.scrolled_threshold;
            changed |= scrolled != self.scrolled;
            self.scrolled = scrolled;
        }

        if self.section_throttle.try_fire(now_ms) {
            let marker = scroll_y + self.section_offset;
            if let Some(section) = current_section(sections, marker) {
                let anchor = section.anchor();
                if self.active_link.as_deref() != Some(anchor.as_str()) {
                    tracing::debug!(section = %anchor, "active section changed");
                    self.active_link = Some(anchor);
                    changed = true;
                }
            }
        }

        changed
    }
}

/// The section whose span contains `marker`. Later sections win on overlap.
#[must_use]
pub fn current_section(sections: &[SectionBounds], marker: f64) -> Option<&SectionBounds> {
    sections.iter().rev().find(|s| s.contains(marker))
}

fn is_fragment(href: &str) -> bool {
    href.strip_prefix('#').is_some_and(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 800.0),
            SectionBounds::new("contact", 1400.0, 500.0),
        ]
    }

    fn nav() -> NavigationController {
        NavigationController::new(&Config::default())
    }

    #[test]
    fn toggle_flips_menu() {
        let mut nav = nav();
        nav.toggle_menu();
        assert_eq!(nav.menu, MenuState::Open);
        nav.toggle_menu();
        assert_eq!(nav.menu, MenuState::Closed);
    }

    #[test]
    fn anchor_scrolls_below_header_and_activates() {
        let mut nav = nav();
        nav.toggle_menu();

        let top = nav.follow_anchor("#about", Some(600.0), AnchorOrigin::NavLink);
        assert_eq!(top, Some(520.0));
        assert_eq!(nav.active_link.as_deref(), Some("#about"));
        assert_eq!(nav.menu, MenuState::Closed);
    }

    #[test]
    fn hero_button_keeps_menu_state() {
        let mut nav = nav();
        nav.toggle_menu();
        nav.follow_anchor("#contact", Some(1400.0), AnchorOrigin::HeroButton);
        assert_eq!(nav.menu, MenuState::Open);
    }

    #[test]
    fn missing_target_is_ignored() {
        let mut nav = nav();
        assert_eq!(nav.follow_anchor("#nowhere", None, AnchorOrigin::NavLink), None);
        assert_eq!(nav.follow_anchor("https://example.com", Some(0.0), AnchorOrigin::NavLink), None);
        assert_eq!(nav.follow_anchor("#", Some(0.0), AnchorOrigin::NavLink), None);
        assert_eq!(nav.active_link, None);
    }

    #[test]
    fn scroll_picks_section_under_marker() {
        let mut nav = nav();
        assert!(nav.on_scroll(0, 500.0, &sections()));
        assert_eq!(nav.active_link.as_deref(), Some("#about"));
        assert!(nav.scrolled);
    }

    #[test]
    fn scroll_outside_sections_keeps_previous_link() {
        let mut nav = nav();
        nav.on_scroll(0, 500.0, &sections());
        nav.on_scroll(1_000, 5_000.0, &sections());
        assert_eq!(nav.active_link.as_deref(), Some("#about"));
    }

    #[test]
    fn scroll_scan_is_throttled() {
        let mut nav = nav();
        nav.on_scroll(0, 0.0, &sections());
        assert_eq!(nav.active_link.as_deref(), Some("#home"));

        nav.on_scroll(50, 1_300.0, &sections());
        assert_eq!(nav.active_link.as_deref(), Some("#home"));

        nav.on_scroll(100, 1_300.0, &sections());
        assert_eq!(nav.active_link.as_deref(), Some("#contact"));
    }

    #[test]
    fn header_threshold_is_exclusive() {
        let mut nav = nav();
        nav.on_scroll(0, 50.0, &[]);
        assert!(!nav.scrolled);
        nav.on_scroll(20, 51.0, &[]);
        assert!(nav.scrolled);
    }
}
