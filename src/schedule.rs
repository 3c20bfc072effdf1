//! Scheduled-task model shared by the controllers and the browser host.
//!
//! Controllers never touch real timers. They allocate a [`TaskHandle`], emit
//! [`crate::event::Action::Schedule`], and later receive
//! [`crate::event::Event::TimerFired`] with the same handle. A controller
//! keeps the handle it is waiting on; a fired handle that no longer matches
//! is stale and ignored, so cancelling works even if the host fires late.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Opaque identifier for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Raw numeric id, used by the host as a map key.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Clear the carousel's input lock after a transition settles.
    ReleaseCarouselLock,
    /// Hide the modal once its closing animation has had time to run.
    FinishModalClose,
    /// Clear the contact form's status message.
    ClearFormStatus,
    /// Advance every stats counter by one frame.
    StatsTick,
}

/// Allocates task handles. One per [`crate::site::Site`].
#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh handle. Handles are never reused.
    pub fn allocate(&mut self) -> TaskHandle {
        self.next += 1;
        TaskHandle(self.next)
    }
}

/// A single pending task slot owned by a controller.
///
/// Holds at most one handle; arming a new task over a pending one yields the
/// stale handle so the caller can emit a cancellation for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pending(Option<TaskHandle>);

impl Pending {
    /// Replace the pending handle, returning the one that was replaced.
    pub fn arm(&mut self, handle: TaskHandle) -> Option<TaskHandle> {
        self.0.replace(handle)
    }

    /// Take the pending handle, if any.
    pub fn take(&mut self) -> Option<TaskHandle> {
        self.0.take()
    }

    /// Consume the pending handle if `fired` is it. Returns `false` for stale handles.
    pub fn settle(&mut self, fired: TaskHandle) -> bool {
        if self.0 == Some(fired) {
            self.0 = None;
            true
        } else {
            false
        }
    }

    /// Whether `handle` is the one currently pending.
    #[must_use]
    pub fn is(&self, handle: TaskHandle) -> bool {
        self.0 == Some(handle)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }
}
