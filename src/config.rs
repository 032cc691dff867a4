use log::{warn, Level};
use serde::Deserialize;
use yew::prelude::*;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` island in index.html.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every page behavior. Keys missing from the JSON island keep
/// their default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub navbar_threshold: f64,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
    pub scroll_margin: f64,
    pub parallax_rate: f64,
    pub glow_rate: f64,
    pub subscribe_reset_ms: u32,
    pub contact_reset_ms: u32,
    pub toast_duration_ms: u32,
    pub preload_images: Vec<String>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            reveal_threshold: 0.1,
            counter_threshold: 0.5,
            counter_duration_ms: 2000.0,
            scroll_margin: 20.0,
            parallax_rate: 0.3,
            glow_rate: 0.02,
            subscribe_reset_ms: 2000,
            contact_reset_ms: 3000,
            toast_duration_ms: 3000,
            preload_images: vec![
                "images/hero-bg.jpg".to_string(),
                "images/product-mockup.jpg".to_string(),
            ],
        }
    }
}

impl LandingConfig {
    /// Visibility thresholds outside `[0, 1]` keep their default.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.with_valid_thresholds())
    }

    fn with_valid_thresholds(mut self) -> Self {
        let defaults = Self::default();
        self.reveal_threshold = checked_ratio("reveal_threshold", self.reveal_threshold, defaults.reveal_threshold);
        self.counter_threshold = checked_ratio("counter_threshold", self.counter_threshold, defaults.counter_threshold);
        self
    }

    /// Reads the config island from the current document, falling back to
    /// defaults when it is absent or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring landing config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

fn checked_ratio(key: &str, value: f64, default: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        warn!("{} must be between 0 and 1, got {}; using {}", key, value, default);
        default
    }
}

#[hook]
pub fn use_landing_config() -> LandingConfig {
    use_context::<LandingConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_island_keeps_remaining_defaults() {
        let config = LandingConfig::from_json(r#"{ "navbar_threshold": 120, "toast_duration_ms": 5000 }"#)
            .unwrap();

        assert_eq!(config.navbar_threshold, 120.0);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.counter_duration_ms, 2000.0);
        assert_eq!(config.preload_images.len(), 2);
    }

    #[test]
    fn malformed_island_is_an_error() {
        assert!(matches!(
            LandingConfig::from_json("{ navbar_threshold: }"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_thresholds_keep_defaults() {
        let config = LandingConfig::from_json(r#"{ "reveal_threshold": 1.5, "counter_threshold": -0.2 }"#)
            .unwrap();

        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.counter_threshold, 0.5);
    }

    #[test]
    fn threshold_bounds_are_accepted() {
        let config = LandingConfig::from_json(r#"{ "reveal_threshold": 0, "counter_threshold": 1 }"#)
            .unwrap();

        assert_eq!(config.reveal_threshold, 0.0);
        assert_eq!(config.counter_threshold, 1.0);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(LandingConfig::from_json("{}").unwrap(), LandingConfig::default());
    }
}
