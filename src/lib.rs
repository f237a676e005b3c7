//! Mobile navigation overlay for the marketing site: a hamburger toggle, a
//! full-screen menu with the current page highlighted, and keyboard handling
//! (Escape to close, focus trapped while open).

use wasm_bindgen::prelude::*;

pub mod attach;
pub mod components;
pub mod config;
pub mod error;
pub mod nav;
pub mod utils;

pub use attach::{attach, AttachOutcome};
pub use config::{NavConfig, NavigationItem, SocialLink};
pub use error::{AttachError, ConfigError};

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    attach::attach_when_ready();
}
