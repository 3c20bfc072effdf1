use super::*;

#[test]
fn handles_are_unique_and_increasing() {
    let mut timers = Timers::new();
    let a = timers.allocate();
    let b = timers.allocate();
    assert_ne!(a, b);
    assert!(b.id() > a.id());
}

#[test]
fn arm_returns_replaced_handle() {
    let mut timers = Timers::new();
    let mut pending = Pending::default();
    let first = timers.allocate();
    let second = timers.allocate();
    assert_eq!(pending.arm(first), None);
    assert_eq!(pending.arm(second), Some(first));
    assert!(pending.is(second));
}

#[test]
fn settle_rejects_stale_handle() {
    let mut timers = Timers::new();
    let mut pending = Pending::default();
    let stale = timers.allocate();
    let live = timers.allocate();
    pending.arm(stale);
    pending.arm(live);
    assert!(!pending.settle(stale));
    assert!(pending.is_armed());
    assert!(pending.settle(live));
    assert!(!pending.is_armed());
}

#[test]
fn take_clears_slot() {
    let mut timers = Timers::new();
    let mut pending = Pending::default();
    let h = timers.allocate();
    pending.arm(h);
    assert_eq!(pending.take(), Some(h));
    assert_eq!(pending.take(), None);
}
