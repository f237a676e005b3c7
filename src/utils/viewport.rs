use once_cell::sync::Lazy;
use regex::Regex;
use web_sys::Window;

use crate::error::AttachError;

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user agent pattern is valid")
});

/// Snapshot of the browser signals the widget reads at attachment time.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub pathname: String,
    pub viewport_width: f64,
    pub user_agent: String,
}

impl Environment {
    pub fn capture(window: &Window) -> Result<Self, AttachError> {
        Ok(Self {
            pathname: window.location().pathname()?,
            viewport_width: viewport_width(window),
            user_agent: window.navigator().user_agent().unwrap_or_default(),
        })
    }

    /// Heuristic gate, not a security boundary: narrow viewport or a
    /// phone/tablet user agent.
    pub fn is_mobile(&self, breakpoint: u32) -> bool {
        self.viewport_width <= f64::from(breakpoint) || is_mobile_user_agent(&self.user_agent)
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent)
}

/// `innerWidth`, or 0 when the browser refuses to report it.
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}
