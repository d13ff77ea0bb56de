//! Page behavior configuration.
//!
//! Every constant the components consume lives here so timings and literals
//! can be overridden from a JSON block embedded in the page:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "filter": { "hide_delay_ms": 300 } }
//! </script>
//! ```
//!
//! Absent fields keep their defaults, which reproduce the stock page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::PortfolioError;

/// Id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_EMAIL_ADDRESS: &str = "taidinh5@outlook.com";
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/xblkndrj";
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";
pub const DEFAULT_OFFSET_LABEL: &str = "GMT-5:00 Eastern Time";
pub const DEFAULT_CREDENTIAL_IMAGE: &str = "img/googcert.png";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub theme_storage_key: String,
    pub typewriter: TypewriterConfig,
    pub clock: ClockConfig,
    pub nav: NavConfig,
    pub parallax: ParallaxConfig,
    pub email: EmailConfig,
    pub credentials: CredentialConfig,
    pub rocket: RocketConfig,
    pub filter: FilterConfig,
    pub contact: ContactConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            typewriter: TypewriterConfig::default(),
            clock: ClockConfig::default(),
            nav: NavConfig::default(),
            parallax: ParallaxConfig::default(),
            email: EmailConfig::default(),
            credentials: CredentialConfig::default(),
            rocket: RocketConfig::default(),
            filter: FilterConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] when the block is not valid JSON
    /// for this shape.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(PortfolioError::Config)
    }

    /// Parse an optional override block, falling back to defaults on any
    /// parse failure.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page config: {err}");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub start_delay_ms: u32,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec!["Welcome to my portfolio!".to_owned(), "Seeking data analyst roles".to_owned()],
            start_delay_ms: 1000,
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub time_zone: String,
    pub offset_label: String,
    pub refresh_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_owned(),
            offset_label: DEFAULT_OFFSET_LABEL.to_owned(),
            refresh_ms: 60_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// How far above a section's top the viewport may be and still count
    /// as "in" that section.
    pub threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { threshold_px: 200.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub factor: f64,
    pub depth_step: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { factor: 0.03, depth_step: 0.4 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub address: String,
    pub feedback_ms: u32,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self { address: DEFAULT_EMAIL_ADDRESS.to_owned(), feedback_ms: 2000 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub images: BTreeMap<String, String>,
    pub fallback: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        let images = ["googcert", "aofcert", "bacert"]
            .into_iter()
            .map(|tag| (tag.to_owned(), format!("img/{tag}.png")))
            .collect();
        Self { images, fallback: DEFAULT_CREDENTIAL_IMAGE.to_owned() }
    }
}

impl CredentialConfig {
    /// Image path for a certificate tag, or the fallback image.
    pub fn image_for(&self, tag: Option<&str>) -> &str {
        tag.and_then(|tag| self.images.get(tag))
            .map_or(self.fallback.as_str(), String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    pub height_px: f64,
    pub tilt_deg: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self { height_px: 40.0, tilt_deg: 45.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub show_delay_ms: u32,
    /// Must match the stylesheet's opacity/transform transition.
    pub hide_delay_ms: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { show_delay_ms: 50, hide_delay_ms: 200 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub revert_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_RELAY_ENDPOINT.to_owned(), revert_ms: 3000 }
    }
}
