//! Controller configuration.
//!
//! Every distance, delay and user-visible label the controller uses lives here.
//! The browser adapter may override any subset from a JSON block on the page.

use serde::Deserialize;

/// Height of the fixed header, subtracted from scroll targets (px).
pub const DEFAULT_HEADER_OFFSET: f64 = 70.0;

/// Scroll distance after which the header switches to its "scrolled" look (px).
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 80.0;

/// Upward shift applied to section tops when picking the active nav link (px).
pub const DEFAULT_ACTIVE_LINK_OFFSET: f64 = 100.0;

/// Fraction of a section that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root margin pulling the reveal trigger point up (px).
pub const DEFAULT_REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Delay between the skills section appearing and its bars filling (ms).
pub const DEFAULT_SKILL_FILL_DELAY_MS: u32 = 300;

/// Simulated submission round-trip (ms).
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;

/// Delay between page load and the hero reveal (ms).
pub const DEFAULT_HERO_REVEAL_DELAY_MS: u32 = 100;

/// Hero offset per scrolled pixel.
pub const DEFAULT_PARALLAX_RATE: f64 = -0.2;

/// How far a hovered project card lifts (px).
pub const DEFAULT_CARD_LIFT: f64 = 8.0;

/// Runtime configuration for [`crate::UiState`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub header_offset: f64,
    pub scrolled_threshold: f64,
    pub active_link_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: f64,
    pub skill_fill_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub hero_reveal_delay_ms: u32,
    pub parallax_rate: f64,
    pub card_lift: f64,
    /// Submit button label while a submission is pending.
    pub pending_label: String,
    /// Notice shown once the simulated submission completes.
    pub confirmation_notice: String,
    /// Key of the persisted theme preference.
    pub theme_storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            active_link_offset: DEFAULT_ACTIVE_LINK_OFFSET,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
            skill_fill_delay_ms: DEFAULT_SKILL_FILL_DELAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            hero_reveal_delay_ms: DEFAULT_HERO_REVEAL_DELAY_MS,
            parallax_rate: DEFAULT_PARALLAX_RATE,
            card_lift: DEFAULT_CARD_LIFT,
            pending_label: "Sending...".to_string(),
            confirmation_notice: "Thank you for your message! I'll get back to you soon."
                .to_string(),
            theme_storage_key: "theme".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::UiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Root margin string for the reveal observer, e.g. `0px 0px -50px 0px`.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin)
    }
}
