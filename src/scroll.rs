//! In-page anchor routing with a fixed-header offset.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::event::{Action, AnchorClick};

/// Element id an in-page `href` points at, or `None` for `"#"` and non-anchors.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

pub struct ScrollRouter {
    header_offset: f64,
}

impl ScrollRouter {
    #[must_use]
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// Scroll so the target's top sits `header_offset` below the viewport top.
    pub fn route(&self, click: &AnchorClick) -> Vec<Action> {
        if anchor_target(&click.href).is_none() {
            return Vec::new();
        }
        let Some(target_top) = click.target_top else {
            log::debug!("scroll: no element for {}", click.href);
            return Vec::new();
        };
        vec![Action::ScrollTo { top: target_top + click.page_y - self.header_offset }]
    }
}
