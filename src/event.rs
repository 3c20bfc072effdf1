//! Event and action vocabulary between the browser host and the controllers.
//!
//! The host translates raw DOM callbacks into [`Event`]s, hands them to
//! [`crate::site::Site::dispatch`], and applies the returned [`Action`]s to
//! the document. Nothing in here depends on a browser, so every controller
//! can be driven from plain unit tests.

use crate::carousel::SlideRole;
use crate::contact::{ContactFields, StatusKind};
use crate::filter::Direction;
use crate::nav::SectionBounds;
use crate::schedule::{Task, TaskHandle};
use crate::theme::Theme;

/// A keyboard key, as far as the page cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any other key, by its `KeyboardEvent.key` name.
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// An in-page anchor click, with the target already resolved by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorClick {
    /// Raw `href` attribute, e.g. `"#about"`.
    pub href: String,
    /// `getBoundingClientRect().top` of the target, or `None` if it does not exist.
    pub target_top: Option<f64>,
    /// `pageYOffset` at click time.
    pub page_y: f64,
}

/// Every element the user can activate.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    ThemeToggle,
    Hamburger,
    /// A `.nav-link`; closes the mobile menu.
    NavLink,
    Anchor(AnchorClick),
    /// A `.filter-btn`, by document order.
    FilterButton(usize),
    /// A `.project-preview` or `.view-project-btn`, carrying its card's raw
    /// `data-images` attribute (`None` when the card or attribute is missing).
    ProjectPreview { images: Option<String> },
    ModalClose,
    ModalOverlay,
    /// A carousel slide, with the click offset from the slide's left edge.
    Slide { click_x: f64, width: f64 },
    /// A pagination dot, by index.
    Dot(usize),
}

/// Input to [`crate::site::Site::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Activate(Control),
    KeyPress(Key),
    /// The window scrolled. `sections` are measured at the time of the event.
    ScrollChanged { page_y: f64, sections: Vec<SectionBounds> },
    /// Intersection ratio of the stats container changed.
    VisibilityChanged { ratio: f64 },
    Submit(ContactFields),
    TimerFired { handle: TaskHandle, task: Task },
}

/// Elements an [`Action`] can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Navbar,
    Hamburger,
    NavMenu,
    /// A `.nav-link`, by document order.
    NavLink(usize),
    Modal,
    ModalContent,
    CarouselDots,
}

/// Document changes requested by the controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the theme attribute on the root element.
    ApplyTheme(Theme),
    /// Write a preference to durable storage.
    PersistPreference { key: String, value: String },
    /// Add (`on = true`) or remove a class on an element.
    SetClass { target: Target, class: &'static str, on: bool },
    /// Lock (`overflow: hidden`) or restore page scrolling.
    SetScrollLock(bool),
    /// Smooth-scroll the window so its top lands at `top`.
    ScrollTo { top: f64 },
    /// Remove `active` and `data-direction` from every filter button and force a reflow.
    ClearFilterMarkers,
    /// Mark one filter button active with a direction hint.
    MarkFilter { index: usize, direction: Direction },
    /// Show or hide a project card, both by class and inline display.
    SetCardVisible { index: usize, visible: bool },
    /// Replace the carousel track with one lazy-loaded slide per URL.
    BuildSlides(Vec<String>),
    /// Assign the visual role of every slide, in slide order.
    SetSlideRoles(Vec<SlideRole>),
    /// Replace the dots container with `count` dots, `active` highlighted.
    RenderDots { count: usize, active: usize },
    /// Move the dot highlight.
    SetActiveDot(usize),
    /// Empty the carousel track.
    ClearSlides,
    ShowFormStatus { message: String, kind: StatusKind },
    ClearFormStatus,
    ResetForm,
    /// Replace the text of a stats counter.
    SetStatText { index: usize, text: String },
    /// Arm a timer. `repeat` timers keep firing until cancelled.
    Schedule { handle: TaskHandle, task: Task, delay_ms: u32, repeat: bool },
    /// Drop a timer. Unknown handles are ignored.
    Cancel(TaskHandle),
}
