//! DOM listener registration. Listeners live for the page lifetime.
//!
//! Carousel slides and dots are rebuilt on every open, so they use one
//! delegated listener on their container instead of per-element closures.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, EventTarget, FormData, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use crate::config::SiteConfig;
use crate::contact::{ContactFields, FIELD_NAMES};
use crate::dom::error::DomError;
use crate::dom::page::{select_all, select_in};
use crate::dom::{Shared, dispatch};
use crate::event::{AnchorClick, Control, Event, Key};
use crate::scroll::anchor_target;

/// Register `handler` for `kind` events on `target`.
fn on(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Register a click that dispatches a fixed control.
fn on_click(shared: &Shared, target: &EventTarget, control: Control) -> Result<(), DomError> {
    let shared = shared.clone();
    on(target, "click", move |_| dispatch(&shared, Event::Activate(control.clone())))
}

fn report(component: &str, result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!("dom: {component} listeners not attached: {err}");
    }
}

/// Attach every listener the page supports.
pub(crate) fn attach(shared: &Shared, config: &SiteConfig) {
    report("theme", theme(shared));
    report("nav", nav(shared));
    report("scroll", anchors(shared));
    report("filter", filters(shared));
    report("modal", modal(shared));
    report("contact", contact(shared));
    report("stats", stats(shared, config));
}

fn theme(shared: &Shared) -> Result<(), DomError> {
    let toggle = shared.borrow().page.document.get_element_by_id("theme-toggle");
    let toggle = toggle.ok_or(DomError::MissingElement("#theme-toggle"))?;
    on_click(shared, &toggle, Control::ThemeToggle)
}

fn nav(shared: &Shared) -> Result<(), DomError> {
    let (hamburger, links, window) = {
        let host = shared.borrow();
        if host.site.nav().is_none() {
            return Ok(());
        }
        (host.page.hamburger.clone(), host.page.nav_links.clone(), host.page.window.clone())
    };
    if let Some(hamburger) = hamburger {
        on_click(shared, &hamburger, Control::Hamburger)?;
    }
    for link in &links {
        on_click(shared, link, Control::NavLink)?;
    }

    let for_scroll = shared.clone();
    let scroll_window = window.clone();
    on(&window, "scroll", move |_| {
        let page_y = scroll_window.page_y_offset().unwrap_or(0.0);
        let sections = for_scroll.borrow().page.section_bounds();
        dispatch(&for_scroll, Event::ScrollChanged { page_y, sections });
    })
}

fn anchors(shared: &Shared) -> Result<(), DomError> {
    let (anchors, document, window) = {
        let host = shared.borrow();
        (select_all(&host.page.document, r##"a[href^="#"]"##), host.page.document.clone(), host.page.window.clone())
    };
    for anchor in anchors {
        let shared = shared.clone();
        let document = document.clone();
        let window = window.clone();
        let href_source = anchor.clone();
        on(&anchor, "click", move |event| {
            event.prevent_default();
            let href = href_source.get_attribute("href").unwrap_or_default();
            let target_top = anchor_target(&href)
                .and_then(|id| document.get_element_by_id(id))
                .map(|el| el.get_bounding_client_rect().top());
            let page_y = window.page_y_offset().unwrap_or(0.0);
            dispatch(&shared, Event::Activate(Control::Anchor(AnchorClick { href, target_top, page_y })));
        })?;
    }
    Ok(())
}

fn filters(shared: &Shared) -> Result<(), DomError> {
    let buttons = shared.borrow().page.filter_buttons.clone();
    for (index, button) in buttons.iter().enumerate() {
        on_click(shared, button, Control::FilterButton(index))?;
    }
    Ok(())
}

/// Element an event was dispatched on, narrowed to the closest `selector`.
fn closest_target(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    match element.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("dom: closest({selector}) failed: {}", DomError::from(err));
            None
        }
    }
}

fn modal(shared: &Shared) -> Result<(), DomError> {
    let (modal, document, track, dots) = {
        let host = shared.borrow();
        let Some(modal) = host.page.modal.clone() else {
            return Ok(());
        };
        (modal, host.page.document.clone(), host.page.carousel_track.clone(), host.page.carousel_dots.clone())
    };

    for trigger in select_all(&document, ".project-preview, .view-project-btn") {
        let shared = shared.clone();
        let source = trigger.clone();
        on(&trigger, "click", move |event| {
            event.prevent_default();
            let images = match source.closest(".project-horizontal") {
                Ok(card) => card.and_then(|card| card.get_attribute("data-images")),
                Err(err) => {
                    log::warn!("dom: project lookup failed: {}", DomError::from(err));
                    None
                }
            };
            dispatch(&shared, Event::Activate(Control::ProjectPreview { images }));
        })?;
    }

    if let Some(close) = document.get_element_by_id("modal-close") {
        on_click(shared, &close, Control::ModalClose)?;
    }
    if let Some(overlay) = select_in(&modal, ".modal-overlay") {
        on_click(shared, &overlay, Control::ModalOverlay)?;
    }

    if let Some(track) = track {
        let shared = shared.clone();
        on(&track, "click", move |event| {
            let Some(slide) = closest_target(&event, ".carousel-slide") else {
                return;
            };
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = slide.get_bounding_client_rect();
            let click_x = f64::from(mouse.client_x()) - rect.left();
            dispatch(&shared, Event::Activate(Control::Slide { click_x, width: rect.width() }));
        })?;
    }

    if let Some(dots) = dots {
        let shared = shared.clone();
        on(&dots, "click", move |event| {
            let Some(raw) = closest_target(&event, ".carousel-dot").and_then(|dot| dot.get_attribute("data-index"))
            else {
                return;
            };
            match raw.parse::<usize>() {
                Ok(index) => dispatch(&shared, Event::Activate(Control::Dot(index))),
                Err(err) => log::warn!("dom: bad dot index {raw:?}: {err}"),
            }
        })?;
    }

    let for_keys = shared.clone();
    on(&document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(&for_keys, Event::KeyPress(Key::from_name(&key.key())));
        }
    })
}

/// Text entries for the contact fields, in the order `FormData` yields them.
fn form_entries(form: &HtmlFormElement) -> Result<Vec<(String, String)>, DomError> {
    let data = FormData::new_with_form(form)?;
    let mut entries = Vec::new();
    for name in FIELD_NAMES {
        for value in data.get_all(name).iter() {
            match value.as_string() {
                Some(value) => entries.push((name.to_owned(), value)),
                None => log::debug!("dom: non-text entry for {name} ignored"),
            }
        }
    }
    Ok(entries)
}

fn contact(shared: &Shared) -> Result<(), DomError> {
    let form = {
        let host = shared.borrow();
        match (&host.page.form, &host.page.form_status) {
            (Some(form), Some(_)) => form.clone(),
            _ => return Ok(()),
        }
    };
    let shared = shared.clone();
    let source = form.clone();
    on(&form, "submit", move |event| {
        event.prevent_default();
        match form_entries(&source) {
            Ok(entries) => dispatch(&shared, Event::Submit(ContactFields::from_entries(entries))),
            Err(err) => log::warn!("dom: reading contact form failed: {err}"),
        }
    })
}

fn stats(shared: &Shared, config: &SiteConfig) -> Result<(), DomError> {
    let section = shared.borrow().page.stats_section.clone();
    let Some(section) = section else {
        return Ok(());
    };
    let for_observer = shared.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    dispatch(&for_observer, Event::VisibilityChanged { ratio: entry.intersection_ratio() });
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.stats_visibility_threshold));
    options.set_root_margin("0px");
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&section);
    callback.forget();
    Ok(())
}
