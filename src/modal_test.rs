use super::*;
use crate::carousel::SlideRole;

// =============================================================
// Helpers
// =============================================================

const THREE: &str = "a.jpg,b.jpg,c.jpg";

fn modal() -> (ModalController, Timers) {
    (ModalController::new(true, 500, 300), Timers::new())
}

fn scheduled(actions: &[Action], want: Task) -> Option<TaskHandle> {
    actions.iter().find_map(|a| match a {
        Action::Schedule { handle, task, .. } if *task == want => Some(*handle),
        _ => None,
    })
}

fn settle(m: &mut ModalController, actions: &[Action]) {
    if let Some(h) = scheduled(actions, Task::ReleaseCarouselLock) {
        m.timer_fired(h, Task::ReleaseCarouselLock);
    }
}

fn index(m: &ModalController) -> usize {
    m.carousel().map(Carousel::index).unwrap()
}

// =============================================================
// Opening
// =============================================================

#[test]
fn open_builds_slides_and_dots() {
    let (mut m, _) = modal();
    let actions = m.open(Some(THREE));
    assert_eq!(m.state(), ModalState::OpenIdle);
    assert!(actions.contains(&Action::SetClass { target: Target::Modal, class: "active", on: true }));
    assert!(actions.contains(&Action::SetScrollLock(true)));
    assert!(actions.contains(&Action::BuildSlides(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])));
    assert!(actions.contains(&Action::RenderDots { count: 3, active: 0 }));
    assert!(actions.contains(&Action::SetClass { target: Target::CarouselDots, class: "hidden", on: false }));
}

#[test]
fn open_with_single_image_hides_dots() {
    let (mut m, _) = modal();
    let actions = m.open(Some("only.jpg"));
    assert!(actions.contains(&Action::SetClass { target: Target::CarouselDots, class: "hidden", on: true }));
    assert!(actions.contains(&Action::SetSlideRoles(vec![SlideRole::Single])));
    assert!(!actions.iter().any(|a| matches!(a, Action::RenderDots { .. })));
}

#[test]
fn open_without_images_stays_closed() {
    let (mut m, _) = modal();
    assert!(m.open(Some(" , ")).is_empty());
    assert!(m.open(None).is_empty());
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn open_resets_index() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.next(&mut t);
    settle(&mut m, &a);
    m.open(Some(THREE));
    assert_eq!(index(&m), 0);
}

// =============================================================
// Transitions and the lock
// =============================================================

#[test]
fn next_twice_reaches_last_with_wrapped_roles() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.next(&mut t);
    settle(&mut m, &a);
    let a = m.next(&mut t);
    assert_eq!(index(&m), 2);
    assert!(a.contains(&Action::SetSlideRoles(vec![SlideRole::Next, SlideRole::Prev, SlideRole::Active])));
    assert!(a.contains(&Action::SetActiveDot(2)));
}

#[test]
fn input_while_transitioning_is_dropped() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let first = m.next(&mut t);
    assert_eq!(m.state(), ModalState::OpenTransitioning);
    assert!(m.next(&mut t).is_empty());
    assert!(m.go_to(0, &mut t).is_empty());
    assert_eq!(index(&m), 1);
    settle(&mut m, &first);
    assert_eq!(m.state(), ModalState::OpenIdle);
}

#[test]
fn transition_schedules_settle_delay() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.prev(&mut t);
    assert_eq!(
        a.last(),
        Some(&Action::Schedule {
            handle: scheduled(&a, Task::ReleaseCarouselLock).unwrap(),
            task: Task::ReleaseCarouselLock,
            delay_ms: 500,
            repeat: false,
        })
    );
    assert_eq!(index(&m), 2);
}

#[test]
fn stale_lock_release_is_ignored() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let first = m.next(&mut t);
    let stale = scheduled(&first, Task::ReleaseCarouselLock).unwrap();
    // Reopening cancels the pending release.
    let reopen = m.open(Some(THREE));
    assert!(reopen.contains(&Action::Cancel(stale)));
    let second = m.next(&mut t);
    m.timer_fired(stale, Task::ReleaseCarouselLock);
    assert_eq!(m.state(), ModalState::OpenTransitioning);
    settle(&mut m, &second);
    assert_eq!(m.state(), ModalState::OpenIdle);
}

#[test]
fn current_dot_is_ignored_without_locking() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    assert!(m.go_to(0, &mut t).is_empty());
    assert_eq!(m.state(), ModalState::OpenIdle);
    assert!(!m.go_to(2, &mut t).is_empty());
    assert_eq!(index(&m), 2);
}

#[test]
fn slide_halves_choose_direction() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.slide_clicked(10.0, 400.0, &mut t);
    assert_eq!(index(&m), 2);
    settle(&mut m, &a);
    m.slide_clicked(200.0, 400.0, &mut t);
    assert_eq!(index(&m), 0);
}

#[test]
fn single_image_ignores_navigation() {
    let (mut m, mut t) = modal();
    m.open(Some("only.jpg"));
    assert!(m.next(&mut t).is_empty());
    assert!(m.key(&Key::ArrowLeft, &mut t).is_empty());
    assert_eq!(m.state(), ModalState::OpenIdle);
}

#[test]
fn two_images_keep_active_and_next() {
    let (mut m, mut t) = modal();
    m.open(Some("a.jpg,b.jpg"));
    for _ in 0..3 {
        let a = m.next(&mut t);
        let roles = a.iter().find_map(|x| match x {
            Action::SetSlideRoles(r) => Some(r.clone()),
            _ => None,
        });
        let roles = roles.unwrap();
        assert!(roles.contains(&SlideRole::Active));
        assert!(roles.contains(&SlideRole::Next));
        assert!(!roles.contains(&SlideRole::Prev));
        assert!(!roles.contains(&SlideRole::Hidden));
        settle(&mut m, &a);
    }
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn keys_are_ignored_while_closed() {
    let (mut m, mut t) = modal();
    assert!(m.key(&Key::Escape, &mut t).is_empty());
    assert!(m.key(&Key::ArrowRight, &mut t).is_empty());
}

#[test]
fn arrow_keys_navigate() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.key(&Key::ArrowRight, &mut t);
    assert_eq!(index(&m), 1);
    settle(&mut m, &a);
    m.key(&Key::ArrowLeft, &mut t);
    assert_eq!(index(&m), 0);
}

#[test]
fn other_keys_do_nothing() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    assert!(m.key(&Key::Other("Enter".into()), &mut t).is_empty());
}

// =============================================================
// Closing
// =============================================================

#[test]
fn escape_starts_delayed_close() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.key(&Key::Escape, &mut t);
    assert_eq!(m.state(), ModalState::Closing);
    assert!(a.contains(&Action::SetClass { target: Target::ModalContent, class: "closing", on: true }));
    assert!(!a.contains(&Action::SetScrollLock(false)));
    let h = scheduled(&a, Task::FinishModalClose).unwrap();

    let done = m.timer_fired(h, Task::FinishModalClose);
    assert_eq!(m.state(), ModalState::Closed);
    assert!(done.contains(&Action::SetScrollLock(false)));
    assert!(done.contains(&Action::ClearSlides));
    assert!(done.contains(&Action::SetClass { target: Target::Modal, class: "active", on: false }));
}

#[test]
fn close_schedules_300ms() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let a = m.close(&mut t);
    assert!(a.iter().any(|x| matches!(
        x,
        Action::Schedule { task: Task::FinishModalClose, delay_ms: 300, repeat: false, .. }
    )));
}

#[test]
fn closing_twice_cancels_stale_close() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let first = scheduled(&m.close(&mut t), Task::FinishModalClose).unwrap();
    let again = m.close(&mut t);
    assert!(again.contains(&Action::Cancel(first)));
    assert!(m.timer_fired(first, Task::FinishModalClose).is_empty());
    assert_eq!(m.state(), ModalState::Closing);
    let second = scheduled(&again, Task::FinishModalClose).unwrap();
    assert!(!m.timer_fired(second, Task::FinishModalClose).is_empty());
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn reopening_while_closing_cancels_close() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    let pending = scheduled(&m.close(&mut t), Task::FinishModalClose).unwrap();
    let reopen = m.open(Some("x.jpg,y.jpg"));
    assert!(reopen.contains(&Action::Cancel(pending)));
    assert!(reopen.contains(&Action::SetClass { target: Target::ModalContent, class: "closing", on: false }));
    assert!(m.timer_fired(pending, Task::FinishModalClose).is_empty());
    assert_eq!(m.state(), ModalState::OpenIdle);
}

#[test]
fn navigation_is_ignored_while_closing() {
    let (mut m, mut t) = modal();
    m.open(Some(THREE));
    m.close(&mut t);
    assert!(m.next(&mut t).is_empty());
}

#[test]
fn missing_content_closes_immediately() {
    let mut m = ModalController::new(false, 500, 300);
    let mut t = Timers::new();
    m.open(Some(THREE));
    let a = m.close(&mut t);
    assert_eq!(m.state(), ModalState::Closed);
    assert!(a.contains(&Action::SetScrollLock(false)));
    assert!(!a.iter().any(|x| matches!(x, Action::Schedule { .. })));
}

#[test]
fn close_while_closed_is_noop() {
    let (mut m, mut t) = modal();
    assert!(m.close(&mut t).is_empty());
}
