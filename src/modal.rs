//! Project lightbox: open/close lifecycle and the carousel's animation lock.
//!
//! STATES
//! ======
//! `Closed` → `OpenIdle` on a preview click with at least one image.
//! `OpenIdle` → `OpenTransitioning` on any navigation input; back to
//! `OpenIdle` when the settle timer fires. Input while transitioning is
//! dropped, not queued. Any open state → `Closing` on close, and `Closing`
//! → `Closed` when the close timer fires.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::carousel::{Carousel, parse_image_list};
use crate::event::{Action, Key, Target};
use crate::schedule::{Pending, Task, TaskHandle, Timers};

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenIdle,
    OpenTransitioning,
    /// Closing animation running; hidden when the close timer fires.
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open,
    Closing,
}

enum Step {
    Next,
    Prev,
    To(usize),
}

pub struct ModalController {
    /// Whether `.modal-content` exists; without it closing skips the animation.
    has_content: bool,
    settle_ms: u32,
    close_ms: u32,
    phase: Phase,
    carousel: Option<Carousel>,
    lock: Pending,
    close: Pending,
}

impl ModalController {
    #[must_use]
    pub fn new(has_content: bool, settle_ms: u32, close_ms: u32) -> Self {
        Self {
            has_content,
            settle_ms,
            close_ms,
            phase: Phase::Closed,
            carousel: None,
            lock: Pending::default(),
            close: Pending::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        match self.phase {
            Phase::Closed => ModalState::Closed,
            Phase::Closing => ModalState::Closing,
            Phase::Open if self.lock.is_armed() => ModalState::OpenTransitioning,
            Phase::Open => ModalState::OpenIdle,
        }
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    /// Open for a project's raw `data-images` attribute.
    ///
    /// A missing attribute or an empty list leaves the modal untouched.
    pub fn open(&mut self, raw_images: Option<&str>) -> Vec<Action> {
        let Some(carousel) = raw_images.map(parse_image_list).and_then(Carousel::new) else {
            log::debug!("modal: project has no images");
            return Vec::new();
        };

        let mut actions = Vec::new();
        actions.extend(self.close.take().map(Action::Cancel));
        actions.extend(self.lock.take().map(Action::Cancel));

        let single = carousel.is_single();
        if self.has_content {
            actions.push(Action::SetClass { target: Target::ModalContent, class: "closing", on: false });
        }
        actions.push(Action::SetClass { target: Target::Modal, class: "active", on: true });
        actions.push(Action::SetScrollLock(true));
        actions.push(Action::SetClass { target: Target::CarouselDots, class: "hidden", on: single });
        actions.push(Action::BuildSlides(carousel.images().to_vec()));
        actions.push(Action::SetSlideRoles(carousel.roles()));
        if !single {
            actions.push(Action::RenderDots { count: carousel.len(), active: 0 });
        }

        log::debug!("modal: open with {} images", carousel.len());
        self.phase = Phase::Open;
        self.carousel = Some(carousel);
        actions
    }

    pub fn next(&mut self, timers: &mut Timers) -> Vec<Action> {
        self.transition(Step::Next, timers)
    }

    pub fn prev(&mut self, timers: &mut Timers) -> Vec<Action> {
        self.transition(Step::Prev, timers)
    }

    /// Dot click. Clicking the current dot does nothing.
    pub fn go_to(&mut self, index: usize, timers: &mut Timers) -> Vec<Action> {
        self.transition(Step::To(index), timers)
    }

    /// Slide click: left half goes back, right half goes forward.
    pub fn slide_clicked(&mut self, click_x: f64, width: f64, timers: &mut Timers) -> Vec<Action> {
        if click_x < width / 2.0 {
            self.prev(timers)
        } else {
            self.next(timers)
        }
    }

    /// Keyboard input. Ignored entirely while closed.
    pub fn key(&mut self, key: &Key, timers: &mut Timers) -> Vec<Action> {
        if self.phase == Phase::Closed {
            return Vec::new();
        }
        match key {
            Key::Escape => self.close(timers),
            Key::ArrowLeft => self.prev(timers),
            Key::ArrowRight => self.next(timers),
            Key::Other(_) => Vec::new(),
        }
    }

    fn transition(&mut self, step: Step, timers: &mut Timers) -> Vec<Action> {
        if self.phase != Phase::Open || self.lock.is_armed() {
            return Vec::new();
        }
        let Some(carousel) = self.carousel.as_mut() else {
            return Vec::new();
        };
        if carousel.len() <= 1 {
            return Vec::new();
        }
        match step {
            Step::Next => carousel.next(),
            Step::Prev => carousel.prev(),
            Step::To(index) => {
                if !carousel.go_to(index) {
                    return Vec::new();
                }
            }
        }

        let handle = timers.allocate();
        self.lock.arm(handle);
        vec![
            Action::SetSlideRoles(carousel.roles()),
            Action::SetActiveDot(carousel.index()),
            Action::Schedule { handle, task: Task::ReleaseCarouselLock, delay_ms: self.settle_ms, repeat: false },
        ]
    }

    /// Start closing. Re-closing while already closing restarts the delay.
    pub fn close(&mut self, timers: &mut Timers) -> Vec<Action> {
        if self.phase == Phase::Closed {
            return Vec::new();
        }
        if !self.has_content {
            return self.finish_close();
        }

        let mut actions = Vec::new();
        let handle = timers.allocate();
        actions.extend(self.close.arm(handle).map(Action::Cancel));
        actions.push(Action::SetClass { target: Target::ModalContent, class: "closing", on: true });
        actions.push(Action::Schedule { handle, task: Task::FinishModalClose, delay_ms: self.close_ms, repeat: false });
        self.phase = Phase::Closing;
        actions
    }

    fn finish_close(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        actions.extend(self.lock.take().map(Action::Cancel));
        actions.push(Action::SetClass { target: Target::Modal, class: "active", on: false });
        actions.push(Action::SetScrollLock(false));
        actions.push(Action::ClearSlides);
        self.phase = Phase::Closed;
        self.carousel = None;
        log::debug!("modal: closed");
        actions
    }

    /// A timer fired. Stale handles are ignored.
    pub fn timer_fired(&mut self, handle: TaskHandle, task: Task) -> Vec<Action> {
        match task {
            Task::ReleaseCarouselLock => {
                self.lock.settle(handle);
                Vec::new()
            }
            Task::FinishModalClose if self.close.settle(handle) => self.finish_close(),
            _ => Vec::new(),
        }
    }
}
