//! Shared numeric and naming constants for the page controllers.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the root element that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Navigation ──────────────────────────────────────────────────

/// Vertical scroll past which the navbar gets its `scrolled` marker.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Added to `pageYOffset` before probing which section is current.
pub const SECTION_PROBE_OFFSET_PX: f64 = 100.0;

/// Height of the fixed header that in-page scrolling clears.
pub const HEADER_OFFSET_PX: f64 = 80.0;

// ── Modal carousel ──────────────────────────────────────────────

/// Time the carousel input lock is held after a transition starts.
pub const CAROUSEL_SETTLE_MS: u32 = 500;

/// Time the closing animation gets before the modal is hidden.
pub const MODAL_CLOSE_MS: u32 = 300;

// ── Contact form ────────────────────────────────────────────────

/// How long a form status message stays visible.
pub const FORM_STATUS_MS: u32 = 5000;

// ── Stats ───────────────────────────────────────────────────────

/// Total count-up duration.
pub const STATS_DURATION_MS: u32 = 2000;

/// Count-up frame rate.
pub const STATS_FPS: u32 = 60;

/// Fraction of the stats container that must be visible to start.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.5;
