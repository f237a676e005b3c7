use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` element holding a
/// page-specific [`NavConfig`].
pub const CONFIG_ELEMENT_ID: &str = "mobile-nav-config";

/// Viewport width (in CSS pixels) at or below which the mobile layout applies.
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    /// Page-relative link, e.g. `features.html`.
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub target: String,
    /// Accessible name, the link itself only shows an icon.
    pub label: String,
    /// Font Awesome brand icon class, e.g. `fa-linkedin-in`.
    pub icon: String,
}

/// Everything the widget renders from. Menu order follows list order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub items: Vec<NavigationItem>,
    pub social: Vec<SocialLink>,
    pub breakpoint: u32,
}

impl NavigationItem {
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }
}

impl SocialLink {
    pub fn new(target: &str, label: &str, icon: &str) -> Self {
        Self {
            target: target.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            items: vec![
                NavigationItem::new("Home", "index.html"),
                NavigationItem::new("Features", "features.html"),
                NavigationItem::new("Privacy", "privacy.html"),
                NavigationItem::new("About", "about.html"),
                NavigationItem::new("Blog", "blog.html"),
            ],
            social: vec![
                SocialLink::new(
                    "https://www.linkedin.com/company/omoomi",
                    "LinkedIn",
                    "fa-linkedin-in",
                ),
                SocialLink::new(
                    "https://www.instagram.com/omoomi.ai",
                    "Instagram",
                    "fa-instagram",
                ),
                SocialLink::new("https://x.com/omoomiAI", "X (Twitter)", "fa-x-twitter"),
            ],
            breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

impl NavConfig {
    /// Parses a JSON config. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config embedded in the page, falling back to the defaults
    /// when the element is absent or unparsable.
    pub fn from_document(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
