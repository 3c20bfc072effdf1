//! Applies core [`Action`]s to the document.
//!
//! Scheduling actions are handled by the host, not here.

use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::carousel::SlideRole;
use crate::consts::THEME_ATTRIBUTE;
use crate::dom::error::DomError;
use crate::dom::page::Page;
use crate::event::{Action, Target};

const SLIDE_CLASS: &str = "carousel-slide";
const DOT_CLASS: &str = "carousel-dot";

impl Page {
    fn target(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Navbar => self.navbar.as_ref(),
            Target::Hamburger => self.hamburger.as_ref(),
            Target::NavMenu => self.nav_menu.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::Modal => self.modal.as_ref(),
            Target::ModalContent => self.modal_content.as_ref(),
            Target::CarouselDots => self.carousel_dots.as_ref(),
        }
    }

    /// Apply one DOM action. Missing elements are skipped silently.
    ///
    /// # Errors
    ///
    /// Propagates JavaScript exceptions from the underlying DOM calls.
    pub fn apply(&self, action: Action) -> Result<(), DomError> {
        match action {
            Action::ApplyTheme(theme) => {
                if let Some(root) = &self.root {
                    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
                }
            }
            Action::PersistPreference { key, value } => {
                if let Some(storage) = &self.storage {
                    storage.set_item(&key, &value)?;
                }
            }
            Action::SetClass { target, class, on } => {
                if let Some(el) = self.target(target) {
                    el.class_list().toggle_with_force(class, on)?;
                }
            }
            Action::SetScrollLock(locked) => {
                if let Some(body) = &self.body {
                    body.style().set_property("overflow", if locked { "hidden" } else { "" })?;
                }
            }
            Action::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::ClearFilterMarkers => {
                for button in &self.filter_buttons {
                    button.class_list().remove_1("active")?;
                    button.remove_attribute("data-direction")?;
                    // Reading layout forces a reflow so the CSS animation replays.
                    let _reflow = button.offset_height();
                }
            }
            Action::MarkFilter { index, direction } => {
                if let Some(button) = self.filter_buttons.get(index) {
                    button.class_list().add_1("active")?;
                    button.set_attribute("data-direction", direction.as_str())?;
                }
            }
            Action::SetCardVisible { index, visible } => {
                if let Some(card) = self.cards.get(index) {
                    card.class_list().toggle_with_force("hidden", !visible)?;
                    card.style().set_property("display", if visible { "" } else { "none" })?;
                }
            }
            Action::BuildSlides(urls) => self.build_slides(&urls)?,
            Action::SetSlideRoles(roles) => self.set_slide_roles(&roles)?,
            Action::RenderDots { count, active } => self.render_dots(count, active)?,
            Action::SetActiveDot(active) => {
                for (i, dot) in self.dots().iter().enumerate() {
                    dot.class_list().toggle_with_force("active", i == active)?;
                }
            }
            Action::ClearSlides => {
                if let Some(track) = &self.carousel_track {
                    track.set_inner_html("");
                }
            }
            Action::ShowFormStatus { message, kind } => {
                if let Some(status) = &self.form_status {
                    status.set_text_content(Some(&message));
                    status.set_class_name(&format!("form-status {}", kind.as_class()));
                }
            }
            Action::ClearFormStatus => {
                if let Some(status) = &self.form_status {
                    status.set_class_name("form-status");
                    status.set_text_content(Some(""));
                }
            }
            Action::ResetForm => {
                if let Some(form) = &self.form {
                    form.reset();
                }
            }
            Action::SetStatText { index, text } => {
                if let Some(el) = self.stat_elements.get(index) {
                    el.set_text_content(Some(&text));
                }
            }
            Action::Schedule { .. } | Action::Cancel(_) => {
                log::warn!("dom: scheduling action reached the DOM applier");
            }
        }
        Ok(())
    }

    fn build_slides(&self, urls: &[String]) -> Result<(), DomError> {
        let Some(track) = &self.carousel_track else {
            return Ok(());
        };
        track.set_inner_html("");
        for (index, url) in urls.iter().enumerate() {
            let slide = self.document.create_element("div")?;
            slide.set_class_name(SLIDE_CLASS);
            slide.set_attribute("data-index", &index.to_string())?;

            let img = self.document.create_element("img")?;
            img.set_attribute("src", url)?;
            img.set_attribute("alt", &format!("Project Screenshot {}", index + 1))?;
            img.set_attribute("loading", "lazy")?;

            slide.append_child(&img)?;
            track.append_child(&slide)?;
        }
        Ok(())
    }

    fn slides(&self) -> Vec<Element> {
        match &self.carousel_track {
            Some(track) => children_with_class(track, SLIDE_CLASS),
            None => Vec::new(),
        }
    }

    fn dots(&self) -> Vec<Element> {
        match &self.carousel_dots {
            Some(dots) => children_with_class(dots, DOT_CLASS),
            None => Vec::new(),
        }
    }

    fn set_slide_roles(&self, roles: &[SlideRole]) -> Result<(), DomError> {
        for (slide, role) in self.slides().iter().zip(roles) {
            let classes = slide.class_list();
            for any in SlideRole::ALL {
                classes.remove_1(any.as_class())?;
            }
            classes.add_1(role.as_class())?;
        }
        Ok(())
    }

    fn render_dots(&self, count: usize, active: usize) -> Result<(), DomError> {
        let Some(container) = &self.carousel_dots else {
            return Ok(());
        };
        container.set_inner_html("");
        for index in 0..count {
            let dot = self.document.create_element("span")?;
            dot.set_class_name(if index == active { "carousel-dot active" } else { DOT_CLASS });
            dot.set_attribute("data-index", &index.to_string())?;
            container.append_child(&dot)?;
        }
        Ok(())
    }
}

fn children_with_class(parent: &Element, class: &str) -> Vec<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|child| child.class_list().contains(class))
        .collect()
}
