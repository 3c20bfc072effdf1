//! Carousel index arithmetic and slide-role assignment.
//!
//! Pure data: no timers and no DOM. [`crate::modal`] drives it and owns the
//! animation lock.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Visual role of one slide, written as a class on the slide element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    Active,
    Prev,
    Next,
    Hidden,
    /// The only slide of a one-image carousel.
    Single,
}

impl SlideRole {
    pub const ALL: [Self; 5] = [Self::Active, Self::Prev, Self::Next, Self::Hidden, Self::Single];

    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Hidden => "hidden",
            Self::Single => "single",
        }
    }
}

/// Split a `data-images` attribute into trimmed, non-empty URLs.
#[must_use]
pub fn parse_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Role of `slide` when `current` is showing, out of `total` slides.
///
/// Two slides never use `Prev`: the other one always sits on the right.
/// With three or more, the offset from `current` wraps once so the first and
/// last slides are neighbours.
#[must_use]
pub fn slide_role(slide: usize, current: usize, total: usize) -> SlideRole {
    if total <= 1 {
        return SlideRole::Single;
    }
    if slide == current {
        return SlideRole::Active;
    }
    if total == 2 {
        return SlideRole::Next;
    }
    let total = total.cast_signed();
    let mut position = slide.cast_signed() - current.cast_signed();
    if position < -1 {
        position += total;
    }
    if position > 1 {
        position -= total;
    }
    match position {
        -1 => SlideRole::Prev,
        1 => SlideRole::Next,
        _ => SlideRole::Hidden,
    }
}

/// Image list plus the current index. The index is always in `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    /// `None` when there are no images.
    #[must_use]
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self { images, index: 0 })
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.images.len() == 1
    }

    /// Advance with wraparound (last → first).
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    /// Step back with wraparound (first → last).
    pub fn prev(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }

    /// Jump to `index`. Returns `false` (and does nothing) if it is out of
    /// range or already current.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    /// Role of every slide, in slide order.
    #[must_use]
    pub fn roles(&self) -> Vec<SlideRole> {
        (0..self.images.len())
            .map(|slide| slide_role(slide, self.index, self.images.len()))
            .collect()
    }
}
