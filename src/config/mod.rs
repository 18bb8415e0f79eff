// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration: the selectors locating the
//! page structure and the timings of every component.
//!
//! In the browser the configuration is read from an optional inline
//! `<script type="application/toml" id="site-config">` element; natively it
//! can be loaded from and saved to a TOML file.
//!
//! # Examples
//!
//! ```
//! use pumpey_site::config::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str(
//!     r#"
//!     language = "fr"
//!
//!     [notifications]
//!     display_ms = 6000
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.language.as_deref(), Some("fr"));
//! assert_eq!(config.notifications.display_ms, 6000);
//! // Unspecified sections keep their defaults
//! assert_eq!(config.signup.simulated_delay_ms, 1500);
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Id of the inline element the web host reads configuration from.
pub const INLINE_CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub language: Option<String>,
    pub selectors: Selectors,
    pub notifications: NotificationTimings,
    pub signup: SignupSettings,
    pub reveal: RevealSettings,
    pub parallax: ParallaxSettings,
    pub scroll: ScrollSettings,
}

impl SiteConfig {
    /// Parses a TOML document; missing keys fall back to their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_panel: String,
    pub year: String,
    pub form: String,
    pub email: String,
    /// Resolved inside the form element.
    pub submit: String,
    pub header: String,
    pub hero: String,
    pub anchors: String,
    pub reveal: Vec<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: DEFAULT_NAV_TOGGLE_SELECTOR.to_string(),
            nav_panel: DEFAULT_NAV_PANEL_SELECTOR.to_string(),
            year: DEFAULT_YEAR_SELECTOR.to_string(),
            form: DEFAULT_FORM_SELECTOR.to_string(),
            email: DEFAULT_EMAIL_SELECTOR.to_string(),
            submit: DEFAULT_SUBMIT_SELECTOR.to_string(),
            header: DEFAULT_HEADER_SELECTOR.to_string(),
            hero: DEFAULT_HERO_SELECTOR.to_string(),
            anchors: DEFAULT_ANCHOR_SELECTOR.to_string(),
            reveal: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    pub enter_delay_ms: u64,
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl NotificationTimings {
    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    #[must_use]
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    #[must_use]
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Total time between insertion and removal.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.display() + self.exit()
    }
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_NOTIFICATION_ENTER_DELAY_MS,
            display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupSettings {
    pub simulated_delay_ms: u64,
}

impl SignupSettings {
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for SignupSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_SIMULATED_SUBMIT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub bottom_margin_px: f64,
    pub offset_rem: f64,
    pub transition_secs: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            offset_rem: DEFAULT_REVEAL_OFFSET_REM,
            transition_secs: DEFAULT_REVEAL_TRANSITION_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    pub rate: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_PARALLAX_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub spacing_rem: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            spacing_rem: DEFAULT_SCROLL_SPACING_REM,
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    SiteConfig::from_toml_str(&content)
}

pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = SiteConfig::default();
        config.language = Some("fr".to_string());
        config.notifications.display_ms = 2500;
        config.parallax.rate = -0.25;
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("site.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_reports_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("site.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_toml_str("").expect("empty toml is valid");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn default_timings_match_notification_lifecycle() {
        let timings = NotificationTimings::default();
        assert_eq!(timings.enter_delay(), Duration::from_millis(100));
        assert_eq!(timings.lifetime(), Duration::from_millis(4300));
    }

    #[test]
    fn partial_selector_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [selectors]
            hero = ".banner"
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.selectors.hero, ".banner");
        assert_eq!(config.selectors.nav_toggle, DEFAULT_NAV_TOGGLE_SELECTOR);
        assert_eq!(config.selectors.reveal.len(), 3);
    }
}
