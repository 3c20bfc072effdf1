//! Theme preference: read at startup, flipped by the toggle, persisted on change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::event::Action;

/// Two-valued display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value. Anything other than `"light"` is dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

pub struct ThemeController {
    current: Theme,
    storage_key: String,
}

impl ThemeController {
    /// Build from the stored preference and return the action applying it.
    pub fn init(stored: Option<&str>, storage_key: &str) -> (Self, Vec<Action>) {
        let current = Theme::from_stored(stored);
        log::debug!("theme: initial {}", current.as_str());
        let controller = Self { current, storage_key: storage_key.to_owned() };
        (controller, vec![Action::ApplyTheme(current)])
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, apply it, and persist it.
    pub fn toggle(&mut self) -> Vec<Action> {
        self.current = self.current.toggled();
        vec![
            Action::ApplyTheme(self.current),
            Action::PersistPreference {
                key: self.storage_key.clone(),
                value: self.current.as_str().to_owned(),
            },
        ]
    }
}
