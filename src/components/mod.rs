pub mod mobile_nav;
pub mod mobile_overlay;
pub mod mobile_toggle;

pub use mobile_nav::{MobileNav, MobileNavProps};
pub use mobile_overlay::{MobileOverlay, MobileOverlayProps};
pub use mobile_toggle::{MobileToggle, MobileToggleProps};
