use super::*;
use crate::contact::ContactFields;
use crate::event::{AnchorClick, Key, Target};
use crate::modal::ModalState;
use crate::nav::SectionBounds;
use crate::schedule::TaskHandle;
use crate::theme::Theme;

// =============================================================
// Helpers
// =============================================================

fn full_layout() -> PageLayout {
    PageLayout {
        stored_theme: None,
        nav_links: Some(vec!["#home".into(), "#projects".into()]),
        filter_buttons: vec!["all".into(), "web".into(), "mobile".into()],
        project_categories: vec![Some("web".into()), Some("mobile".into())],
        modal: Some(true),
        has_contact_form: true,
        stat_counters: Some(vec![StatCounter::parse("150", "0+").unwrap()]),
    }
}

fn site() -> Site {
    Site::new(full_layout(), &SiteConfig::default()).0
}

fn scheduled(actions: &[Action]) -> Vec<(TaskHandle, Task)> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Schedule { handle, task, .. } => Some((*handle, *task)),
            _ => None,
        })
        .collect()
}

/// Fire every timer the actions scheduled, once.
fn fire_all(site: &mut Site, actions: &[Action]) -> Vec<Action> {
    scheduled(actions)
        .into_iter()
        .flat_map(|(handle, task)| site.dispatch(Event::TimerFired { handle, task }))
        .collect()
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_applies_stored_theme() {
    let layout = PageLayout { stored_theme: Some("light".into()), ..PageLayout::default() };
    let (site, actions) = Site::new(layout, &SiteConfig::default());
    assert_eq!(actions, vec![Action::ApplyTheme(Theme::Light)]);
    assert_eq!(site.theme().current(), Theme::Light);
}

#[test]
fn empty_page_builds_no_optional_components() {
    let (site, _) = Site::new(PageLayout::default(), &SiteConfig::default());
    assert!(site.nav().is_none());
    assert!(site.modal().is_none());
    assert!(site.stats().is_none());
}

#[test]
fn events_for_missing_components_are_noops() {
    let (mut site, _) = Site::new(PageLayout::default(), &SiteConfig::default());
    assert!(site.dispatch(Event::Activate(Control::Hamburger)).is_empty());
    assert!(site.dispatch(Event::Activate(Control::FilterButton(0))).is_empty());
    assert!(site.dispatch(Event::Activate(Control::ProjectPreview { images: Some("a.jpg".into()) })).is_empty());
    assert!(site.dispatch(Event::KeyPress(Key::Escape)).is_empty());
    assert!(site.dispatch(Event::Submit(ContactFields::default())).is_empty());
    assert!(site.dispatch(Event::VisibilityChanged { ratio: 1.0 }).is_empty());
    assert!(site.dispatch(Event::ScrollChanged { page_y: 500.0, sections: Vec::new() }).is_empty());
}

// =============================================================
// Routing
// =============================================================

#[test]
fn theme_toggle_routes_to_theme() {
    let mut site = site();
    let actions = site.dispatch(Event::Activate(Control::ThemeToggle));
    assert!(actions.contains(&Action::ApplyTheme(Theme::Light)));
}

#[test]
fn anchor_routes_with_header_offset() {
    let mut site = site();
    let click = AnchorClick { href: "#projects".into(), target_top: Some(100.0), page_y: 0.0 };
    assert_eq!(site.dispatch(Event::Activate(Control::Anchor(click))), vec![Action::ScrollTo { top: 20.0 }]);
}

#[test]
fn scroll_routes_to_nav() {
    let mut site = site();
    let sections = vec![SectionBounds { id: "projects".into(), top: 0.0, height: 1000.0 }];
    let actions = site.dispatch(Event::ScrollChanged { page_y: 60.0, sections });
    assert!(actions.contains(&Action::SetClass { target: Target::Navbar, class: "scrolled", on: true }));
    assert!(actions.contains(&Action::SetClass { target: Target::NavLink(1), class: "active", on: true }));
    assert_eq!(site.nav().and_then(NavController::active_section), Some("projects"));
}

#[test]
fn filter_buttons_route_by_index() {
    let mut site = site();
    site.dispatch(Event::Activate(Control::FilterButton(2)));
    let actions = site.dispatch(Event::Activate(Control::FilterButton(1)));
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::MarkFilter { index: 1, direction: crate::filter::Direction::FromLeft }
    )));
}

// =============================================================
// Modal lifecycle through the dispatcher
// =============================================================

#[test]
fn modal_open_navigate_close() {
    let mut site = site();
    let images = Some("a.jpg,b.jpg,c.jpg".to_owned());
    site.dispatch(Event::Activate(Control::ProjectPreview { images }));
    assert_eq!(site.modal().map(ModalController::state), Some(ModalState::OpenIdle));

    let step = site.dispatch(Event::KeyPress(Key::ArrowRight));
    assert_eq!(site.modal().map(ModalController::state), Some(ModalState::OpenTransitioning));
    fire_all(&mut site, &step);
    assert_eq!(site.modal().map(ModalController::state), Some(ModalState::OpenIdle));

    let step = site.dispatch(Event::Activate(Control::Dot(2)));
    fire_all(&mut site, &step);
    assert_eq!(site.modal().and_then(ModalController::carousel).map(|c| c.index()), Some(2));

    let closing = site.dispatch(Event::Activate(Control::ModalOverlay));
    assert_eq!(site.modal().map(ModalController::state), Some(ModalState::Closing));
    let closed = fire_all(&mut site, &closing);
    assert!(closed.contains(&Action::SetScrollLock(false)));
    assert!(closed.contains(&Action::ClearSlides));
    assert_eq!(site.modal().map(ModalController::state), Some(ModalState::Closed));
}

#[test]
fn timers_are_routed_by_task_kind() {
    let mut site = site();
    let submit = site.dispatch(Event::Submit(ContactFields::default()));
    let cleared = fire_all(&mut site, &submit);
    assert_eq!(cleared, vec![Action::ClearFormStatus]);
}

// =============================================================
// Stats through the dispatcher
// =============================================================

#[test]
fn stats_run_to_completion_once() {
    let mut site = site();
    let start = site.dispatch(Event::VisibilityChanged { ratio: 0.6 });
    let ticks = scheduled(&start);
    assert_eq!(ticks.len(), 1, "expected one stats ticker");
    let (handle, task) = ticks[0];
    let mut last = Vec::new();
    for _ in 0..120 {
        last = site.dispatch(Event::TimerFired { handle, task });
    }
    assert!(last.contains(&Action::SetStatText { index: 0, text: "150+".into() }));
    assert!(last.contains(&Action::Cancel(handle)));
    assert!(site.dispatch(Event::VisibilityChanged { ratio: 1.0 }).is_empty());
}
