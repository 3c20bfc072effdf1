//! Runtime tunables for the page controllers.
//!
//! Every field has a default taken from [`crate::consts`]. The browser host
//! may override any subset from a JSON blob embedded in the page; missing
//! fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded config blob is not valid JSON for [`SiteConfig`].
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The stats frame rate must be positive.
    #[error("stats fps must be greater than zero")]
    ZeroFps,
}

/// Tunables shared by all controllers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub nav_scrolled_threshold_px: f64,
    pub section_probe_offset_px: f64,
    pub header_offset_px: f64,
    pub carousel_settle_ms: u32,
    pub modal_close_ms: u32,
    pub form_status_ms: u32,
    pub stats_duration_ms: u32,
    pub stats_fps: u32,
    pub stats_visibility_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            nav_scrolled_threshold_px: consts::NAV_SCROLLED_THRESHOLD_PX,
            section_probe_offset_px: consts::SECTION_PROBE_OFFSET_PX,
            header_offset_px: consts::HEADER_OFFSET_PX,
            carousel_settle_ms: consts::CAROUSEL_SETTLE_MS,
            modal_close_ms: consts::MODAL_CLOSE_MS,
            form_status_ms: consts::FORM_STATUS_MS,
            stats_duration_ms: consts::STATS_DURATION_MS,
            stats_fps: consts::STATS_FPS,
            stats_visibility_threshold: consts::STATS_VISIBILITY_THRESHOLD,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::ZeroFps`] when `stats_fps` is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.stats_fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(config)
    }

    /// Number of count-up frames in one stats run.
    #[must_use]
    pub fn stats_frames(&self) -> u32 {
        let frames = u64::from(self.stats_duration_ms) * u64::from(self.stats_fps) / 1000;
        u32::try_from(frames).unwrap_or(u32::MAX).max(1)
    }

    /// Interval between count-up frames, in milliseconds.
    #[must_use]
    pub fn stats_tick_ms(&self) -> u32 {
        (1000 / self.stats_fps.max(1)).max(1)
    }
}
