//! Navigation bar: sticky marker, mobile menu, and active-section highlight.
//!
//! The three behaviors share the link list but are otherwise independent.
//! Scroll handling is unthrottled; each scroll event is O(sections + links).

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::event::{Action, Target};

/// Measured geometry of one `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub struct NavController {
    /// `href` of every `.nav-link`, in document order.
    links: Vec<String>,
    scrolled_threshold: f64,
    probe_offset: f64,
    menu_open: bool,
    scrolled: Option<bool>,
    active_section: Option<String>,
}

impl NavController {
    #[must_use]
    pub fn new(links: Vec<String>, scrolled_threshold: f64, probe_offset: f64) -> Self {
        Self {
            links,
            scrolled_threshold,
            probe_offset,
            menu_open: false,
            scrolled: None,
            active_section: None,
        }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Id of the section whose link is currently highlighted.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Flip the mobile menu. Opening locks page scroll; closing restores it.
    pub fn toggle_menu(&mut self) -> Vec<Action> {
        self.menu_open = !self.menu_open;
        log::debug!("nav: menu open={}", self.menu_open);
        self.menu_actions()
    }

    /// A nav link was clicked: always close the menu and restore scroll.
    pub fn link_clicked(&mut self) -> Vec<Action> {
        self.menu_open = false;
        self.menu_actions()
    }

    fn menu_actions(&self) -> Vec<Action> {
        vec![
            Action::SetClass { target: Target::Hamburger, class: "active", on: self.menu_open },
            Action::SetClass { target: Target::NavMenu, class: "active", on: self.menu_open },
            Action::SetScrollLock(self.menu_open),
        ]
    }

    /// Re-evaluate the sticky marker and the active link for a scroll position.
    ///
    /// Only changes are emitted. When no section contains the probe point the
    /// previous highlight is left as it is.
    pub fn scrolled(&mut self, page_y: f64, sections: &[SectionBounds]) -> Vec<Action> {
        let mut actions = Vec::new();

        let scrolled = page_y > self.scrolled_threshold;
        if self.scrolled != Some(scrolled) {
            self.scrolled = Some(scrolled);
            actions.push(Action::SetClass { target: Target::Navbar, class: "scrolled", on: scrolled });
        }

        let probe = page_y + self.probe_offset;
        let Some(section) = sections.iter().find(|s| s.contains(probe)) else {
            return actions;
        };
        if self.active_section.as_deref() == Some(section.id.as_str()) {
            return actions;
        }

        let href = format!("#{}", section.id);
        for (index, link) in self.links.iter().enumerate() {
            actions.push(Action::SetClass { target: Target::NavLink(index), class: "active", on: *link == href });
        }
        log::debug!("nav: active section {}", section.id);
        self.active_section = Some(section.id.clone());
        actions
    }
}
