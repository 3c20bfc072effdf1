//! Browser host: wires the document to [`Site`].
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It scans the page once,
//! turns DOM callbacks into [`Event`]s, applies the resulting [`Action`]s, and
//! backs [`Action::Schedule`] with `gloo-timers`. Timer ids are tracked per
//! [`crate::schedule::TaskHandle`] so [`Action::Cancel`] can clear them.

pub mod error;
mod apply;
mod listen;
mod page;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;

use crate::dom::error::DomError;
use crate::dom::page::Page;
use crate::event::{Action, Event};
use crate::schedule::{Task, TaskHandle};
use crate::site::Site;

/// A browser timer armed on behalf of a task handle.
struct Armed {
    id: i32,
    repeat: bool,
}

pub(crate) struct Host {
    site: Site,
    page: Page,
    timers: HashMap<u64, Armed>,
}

pub(crate) type Shared = Rc<RefCell<Host>>;

/// Entry point, run once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("folio: logger already set: {err}")));
    }
    if let Err(err) = mount() {
        log::error!("folio: startup failed: {err}");
    }
}

fn mount() -> Result<(), DomError> {
    let mut page = Page::scan()?;
    let config = page.config();
    let layout = page.layout(&config);
    let (site, actions) = Site::new(layout, &config);

    let shared = Rc::new(RefCell::new(Host { site, page, timers: HashMap::new() }));
    for action in actions {
        apply(&shared, action);
    }
    listen::attach(&shared, &config);
    Ok(())
}

/// Feed one event to the core and apply everything it asks for.
pub(crate) fn dispatch(shared: &Shared, event: Event) {
    let actions = shared.borrow_mut().site.dispatch(event);
    for action in actions {
        apply(shared, action);
    }
}

fn apply(shared: &Shared, action: Action) {
    match action {
        Action::Schedule { handle, task, delay_ms, repeat } => schedule(shared, handle, task, delay_ms, repeat),
        Action::Cancel(handle) => cancel(&mut shared.borrow_mut(), handle),
        other => {
            if let Err(err) = shared.borrow().page.apply(other) {
                log::warn!("dom: {err}");
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn schedule(shared: &Shared, handle: TaskHandle, task: Task, delay_ms: u32, repeat: bool) {
    let weak = Rc::downgrade(shared);
    let fire = move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        if !repeat {
            shared.borrow_mut().timers.remove(&handle.id());
        }
        dispatch(&shared, Event::TimerFired { handle, task });
    };

    // Timers are forgotten and cleared by id so a callback can cancel its own interval.
    let id = if repeat { Interval::new(delay_ms, fire).forget() } else { Timeout::new(delay_ms, fire).forget() };
    match id.as_f64() {
        Some(id) => {
            shared.borrow_mut().timers.insert(handle.id(), Armed { id: id as i32, repeat });
        }
        None => log::warn!("dom: timer for {task:?} returned no id"),
    }
}

fn cancel(host: &mut Host, handle: TaskHandle) {
    let Some(armed) = host.timers.remove(&handle.id()) else {
        return;
    };
    if armed.repeat {
        host.page.window.clear_interval_with_handle(armed.id);
    } else {
        host.page.window.clear_timeout_with_handle(armed.id);
    }
}
