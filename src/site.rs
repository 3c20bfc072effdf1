//! Page-level dispatcher: one optional controller per component.
//!
//! [`Site`] is the browser-independent core. The host scans the document into
//! a [`PageLayout`], builds a `Site`, then feeds it [`Event`]s and applies the
//! returned [`Action`]s. Components whose elements are missing from the page
//! are never constructed, and events aimed at them produce nothing.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::event::{Action, Control, Event};
use crate::filter::FilterController;
use crate::modal::ModalController;
use crate::nav::NavController;
use crate::schedule::{Task, Timers};
use crate::scroll::ScrollRouter;
use crate::stats::{StatCounter, StatsAnimator};
use crate::theme::ThemeController;

/// What the host found in the document at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    /// Value under the theme storage key, if any.
    pub stored_theme: Option<String>,
    /// `href` of every `.nav-link`, or `None` if the navbar pieces are missing.
    pub nav_links: Option<Vec<String>>,
    /// `data-filter` of every `.filter-btn`.
    pub filter_buttons: Vec<String>,
    /// `data-category` of every project card.
    pub project_categories: Vec<Option<String>>,
    /// `Some(has_content)` if `#project-modal` exists.
    pub modal: Option<bool>,
    pub has_contact_form: bool,
    /// Counters inside `.about-stats`, or `None` if the container is missing.
    pub stat_counters: Option<Vec<StatCounter>>,
}

pub struct Site {
    timers: Timers,
    theme: ThemeController,
    scroll: ScrollRouter,
    nav: Option<NavController>,
    filter: Option<FilterController>,
    modal: Option<ModalController>,
    contact: Option<ContactForm>,
    stats: Option<StatsAnimator>,
}

impl Site {
    /// Build every controller the layout supports. Returns the actions that
    /// bring the page into its initial state.
    pub fn new(layout: PageLayout, config: &SiteConfig) -> (Self, Vec<Action>) {
        let (theme, actions) = ThemeController::init(layout.stored_theme.as_deref(), &config.theme_storage_key);

        let nav = layout.nav_links.map(|links| {
            NavController::new(links, config.nav_scrolled_threshold_px, config.section_probe_offset_px)
        });
        let filter = (!layout.filter_buttons.is_empty())
            .then(|| FilterController::new(layout.filter_buttons, layout.project_categories));
        let modal = layout
            .modal
            .map(|has_content| ModalController::new(has_content, config.carousel_settle_ms, config.modal_close_ms));
        let contact = layout.has_contact_form.then(|| ContactForm::new(config.form_status_ms));
        let stats = layout.stat_counters.map(|counters| {
            StatsAnimator::new(
                counters,
                config.stats_frames(),
                config.stats_tick_ms(),
                config.stats_visibility_threshold,
            )
        });

        log::info!(
            "site: nav={} filter={} modal={} contact={} stats={}",
            nav.is_some(),
            filter.is_some(),
            modal.is_some(),
            contact.is_some(),
            stats.is_some(),
        );

        let site = Self {
            timers: Timers::new(),
            theme,
            scroll: ScrollRouter::new(config.header_offset_px),
            nav,
            filter,
            modal,
            contact,
            stats,
        };
        (site, actions)
    }

    /// Route one event to the controller that owns it.
    pub fn dispatch(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::Activate(control) => self.activate(control),
            Event::KeyPress(key) => self.with_modal(|m, t| m.key(&key, t)),
            Event::ScrollChanged { page_y, sections } => {
                self.nav.as_mut().map(|nav| nav.scrolled(page_y, &sections)).unwrap_or_default()
            }
            Event::VisibilityChanged { ratio } => {
                let timers = &mut self.timers;
                self.stats.as_mut().map(|s| s.visibility_changed(ratio, timers)).unwrap_or_default()
            }
            Event::Submit(fields) => {
                let timers = &mut self.timers;
                self.contact.as_mut().map(|c| c.submit(&fields, timers)).unwrap_or_default()
            }
            Event::TimerFired { handle, task } => match task {
                Task::ReleaseCarouselLock | Task::FinishModalClose => {
                    self.modal.as_mut().map(|m| m.timer_fired(handle, task)).unwrap_or_default()
                }
                Task::ClearFormStatus => self.contact.as_mut().map(|c| c.timer_fired(handle)).unwrap_or_default(),
                Task::StatsTick => self.stats.as_mut().map(|s| s.tick(handle)).unwrap_or_default(),
            },
        }
    }

    fn activate(&mut self, control: Control) -> Vec<Action> {
        match control {
            Control::ThemeToggle => self.theme.toggle(),
            Control::Hamburger => self.nav.as_mut().map(NavController::toggle_menu).unwrap_or_default(),
            Control::NavLink => self.nav.as_mut().map(NavController::link_clicked).unwrap_or_default(),
            Control::Anchor(click) => self.scroll.route(&click),
            Control::FilterButton(index) => self.filter.as_mut().map(|f| f.select(index)).unwrap_or_default(),
            Control::ProjectPreview { images } => {
                self.modal.as_mut().map(|m| m.open(images.as_deref())).unwrap_or_default()
            }
            Control::ModalClose | Control::ModalOverlay => self.with_modal(ModalController::close),
            Control::Slide { click_x, width } => self.with_modal(|m, t| m.slide_clicked(click_x, width, t)),
            Control::Dot(index) => self.with_modal(|m, t| m.go_to(index, t)),
        }
    }

    fn with_modal(&mut self, f: impl FnOnce(&mut ModalController, &mut Timers) -> Vec<Action>) -> Vec<Action> {
        let timers = &mut self.timers;
        self.modal.as_mut().map(|m| f(m, timers)).unwrap_or_default()
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    #[must_use]
    pub fn nav(&self) -> Option<&NavController> {
        self.nav.as_ref()
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalController> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> Option<&StatsAnimator> {
        self.stats.as_ref()
    }
}
