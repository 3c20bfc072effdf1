//! Project gallery filter and its directional transition hint.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::event::Action;

/// Filter value that shows every card.
pub const FILTER_ALL: &str = "all";

/// Which side the active-button effect should come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// First selection on the page.
    Left,
    /// Moved to a button on the left (or re-selected the same one).
    FromLeft,
    /// Moved to a button on the right.
    FromRight,
}

impl Direction {
    /// Value written to `data-direction`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::FromLeft => "fromleft",
            Self::FromRight => "fromright",
        }
    }

    /// Direction for a move from `previous` to `next`, by button index.
    #[must_use]
    pub fn between(previous: Option<usize>, next: usize) -> Self {
        match previous {
            None => Self::Left,
            Some(prev) if next > prev => Self::FromRight,
            Some(_) => Self::FromLeft,
        }
    }
}

pub struct FilterController {
    /// `data-filter` of each `.filter-btn`, in document order.
    buttons: Vec<String>,
    /// `data-category` of each project card, in document order.
    cards: Vec<Option<String>>,
    previous: Option<usize>,
}

impl FilterController {
    #[must_use]
    pub fn new(buttons: Vec<String>, cards: Vec<Option<String>>) -> Self {
        Self { buttons, cards, previous: None }
    }

    /// Currently selected filter value, if any button was clicked.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.previous.and_then(|i| self.buttons.get(i)).map(String::as_str)
    }

    /// Select the button at `index`: re-mark buttons and show/hide cards.
    pub fn select(&mut self, index: usize) -> Vec<Action> {
        let Some(value) = self.buttons.get(index) else {
            log::warn!("filter: no button at index {index}");
            return Vec::new();
        };
        let direction = Direction::between(self.previous, index);
        self.previous = Some(index);
        log::debug!("filter: {value} ({})", direction.as_str());

        let mut actions = vec![Action::ClearFilterMarkers, Action::MarkFilter { index, direction }];
        actions.extend(self.cards.iter().enumerate().map(|(card, category)| Action::SetCardVisible {
            index: card,
            visible: value == FILTER_ALL || category.as_deref() == Some(value.as_str()),
        }));
        actions
    }
}
