//! Element lookup: scans the document once at startup into [`Page`] and the
//! [`PageLayout`] the core is built from.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Storage, Window};

use crate::config::SiteConfig;
use crate::dom::error::DomError;
use crate::nav::SectionBounds;
use crate::site::PageLayout;
use crate::stats::StatCounter;

/// Id of the optional `<script type="application/json">` config override.
const CONFIG_SCRIPT_ID: &str = "folio-config";

/// Every element the host reads from or writes to, looked up once.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,
    pub storage: Option<Storage>,
    pub navbar: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub filter_buttons: Vec<HtmlElement>,
    pub cards: Vec<HtmlElement>,
    pub modal: Option<Element>,
    pub modal_content: Option<Element>,
    pub carousel_track: Option<Element>,
    pub carousel_dots: Option<Element>,
    pub form: Option<HtmlFormElement>,
    pub form_status: Option<Element>,
    pub stats_section: Option<Element>,
    /// Parallel to the counters handed to the core; unparsable ones are left out.
    pub stat_elements: Vec<Element>,
}

/// All elements matching `selector`, in document order.
pub fn select_all(root: &Document, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("dom: bad selector {selector}: {}", DomError::from(err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// First element matching `selector` inside `scope`.
pub fn select_in(scope: &Element, selector: &str) -> Option<Element> {
    match scope.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("dom: bad selector {selector}: {}", DomError::from(err));
            None
        }
    }
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    select_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

fn local_storage(window: &Window) -> Option<Storage> {
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("dom: localStorage unavailable: {}", DomError::from(err));
            None
        }
    }
}

impl Page {
    /// Look up every element the page controllers use.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or document; missing page elements
    /// just leave the matching fields empty.
    pub fn scan() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let by_id = |id: &str| document.get_element_by_id(id);

        let modal = by_id("project-modal");
        let modal_content = modal.as_ref().and_then(|m| select_in(m, ".modal-content"));
        let form = by_id("contact-form").and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
        let stats_section = document.query_selector(".about-stats").map_err(DomError::from)?;

        Ok(Self {
            root: document.document_element(),
            body: document.body(),
            storage: local_storage(&window),
            navbar: by_id("navbar"),
            hamburger: by_id("hamburger"),
            nav_menu: by_id("nav-menu"),
            nav_links: select_all(&document, ".nav-link"),
            filter_buttons: html_elements(&document, ".filter-btn"),
            cards: html_elements(&document, ".project-horizontal"),
            carousel_track: by_id("carousel-track"),
            carousel_dots: by_id("carousel-dots"),
            form_status: by_id("form-status"),
            stat_elements: Vec::new(),
            modal,
            modal_content,
            form,
            stats_section,
            window,
            document,
        })
    }

    /// Build the core's view of the page. Also fills `stat_elements`.
    pub fn layout(&mut self, config: &SiteConfig) -> PageLayout {
        let stored_theme = self.storage.as_ref().and_then(|storage| match storage.get_item(&config.theme_storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("dom: reading theme failed: {}", DomError::from(err));
                None
            }
        });

        let nav_links = match (&self.navbar, &self.hamburger, &self.nav_menu) {
            (Some(_), Some(_), Some(_)) => Some(
                self.nav_links
                    .iter()
                    .map(|link| link.get_attribute("href").unwrap_or_default())
                    .collect(),
            ),
            _ => {
                log::debug!("dom: navbar incomplete, navigation disabled");
                None
            }
        };

        let stat_counters = self.stats_section.as_ref().map(|_| {
            let mut counters = Vec::new();
            for el in select_all(&self.document, ".stat-number[data-count]") {
                let count = el.get_attribute("data-count").unwrap_or_default();
                let text = el.text_content().unwrap_or_default();
                match StatCounter::parse(&count, &text) {
                    Some(counter) => {
                        counters.push(counter);
                        self.stat_elements.push(el);
                    }
                    None => log::warn!("dom: skipping stat with data-count={count:?}"),
                }
            }
            counters
        });

        PageLayout {
            stored_theme,
            nav_links,
            filter_buttons: self
                .filter_buttons
                .iter()
                .map(|b| b.get_attribute("data-filter").unwrap_or_default())
                .collect(),
            project_categories: self.cards.iter().map(|c| c.get_attribute("data-category")).collect(),
            modal: self.modal.as_ref().map(|_| self.modal_content.is_some()),
            has_contact_form: self.form.is_some() && self.form_status.is_some(),
            stat_counters,
        }
    }

    /// `offsetTop`/`offsetHeight` of every `section[id]`, in document order.
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        select_all(&self.document, "section[id]")
            .into_iter()
            .filter_map(|el| {
                let section = el.dyn_ref::<HtmlElement>()?;
                Some(SectionBounds {
                    id: section.id(),
                    top: f64::from(section.offset_top()),
                    height: f64::from(section.offset_height()),
                })
            })
            .collect()
    }

    /// Read the optional JSON config override, falling back to defaults.
    #[must_use]
    pub fn config(&self) -> SiteConfig {
        let Some(raw) = self.document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
            return SiteConfig::default();
        };
        match SiteConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("dom: {err}; using defaults");
                SiteConfig::default()
            }
        }
    }
}
