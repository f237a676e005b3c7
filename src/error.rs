use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the widget could not be attached to the page.
///
/// None of these are fatal for the page; the lifecycle layer logs them and
/// leaves the desktop navigation in place.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("navigation element not found")]
    MissingNavigation,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for AttachError {
    fn from(value: JsValue) -> Self {
        AttachError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigation config: {0}")]
    Parse(#[from] serde_json::Error),
}
