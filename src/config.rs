use serde::Deserialize;
use web_sys::Document;

use crate::error::BehaviorError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional inline JSON block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "behavior-config";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug // Chatty while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Tunables shared by the page behaviors. Every field falls back to its
/// default when missing from the JSON override block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub nav_offset: f64,
    pub scrolled_threshold: f64,
    pub mobile_breakpoint: f64,
    pub resize_debounce_ms: u32,
    pub scroll_gap: f64,
    pub reveal_translate: f64,
    pub reveal_duration_s: f64,
    pub reveal_stagger_s: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub counter_duration_ms: f64,
    pub counter_start_delay_ms: u32,
    pub parallax_rate: f64,
    pub parallax_debounce_ms: u32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav_offset: 100.0,
            scrolled_threshold: 50.0,
            mobile_breakpoint: 768.0,
            resize_debounce_ms: 250,
            scroll_gap: 20.0,
            reveal_translate: 30.0,
            reveal_duration_s: 0.6,
            reveal_stagger_s: 0.1,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            counter_duration_ms: 2000.0,
            counter_start_delay_ms: 500,
            parallax_rate: -0.5,
            parallax_debounce_ms: 10,
        }
    }
}

impl BehaviorConfig {
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from the page, falling back to defaults when the block
    /// is absent or malformed.
    pub fn load(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let raw = element.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
