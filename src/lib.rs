//! Client-side behavior for a static portfolio page, compiled to WebAssembly.
//!
//! The crate splits into a browser-independent core and a thin host. Each
//! page component is a small controller that takes typed [`event::Event`]s
//! and returns [`event::Action`]s; [`site::Site`] routes between them. The
//! [`dom`] host (feature `browser`) scans the document, wires DOM listeners
//! and timers to the dispatcher, and applies actions to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Dispatcher owning one controller per component |
//! | [`event`] | Event, control, and action vocabulary |
//! | [`schedule`] | Task handles and pending-timer slots |
//! | [`theme`] | Dark/light preference |
//! | [`nav`] | Sticky navbar, mobile menu, active-section highlight |
//! | [`scroll`] | In-page anchor scrolling |
//! | [`filter`] | Project gallery filter |
//! | [`carousel`] | Slide index arithmetic and roles |
//! | [`modal`] | Project lightbox lifecycle and animation lock |
//! | [`contact`] | Contact form validation |
//! | [`stats`] | One-shot statistics count-up |
//! | [`config`] | Runtime tunables |
//! | [`consts`] | Default thresholds, delays, and names |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod contact;
pub mod event;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod schedule;
pub mod scroll;
pub mod site;
pub mod stats;
pub mod theme;

#[cfg(feature = "browser")]
pub mod dom;
