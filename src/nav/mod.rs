pub mod focus_trap;
pub mod location;
pub mod menu;

pub use location::{NavEntry, PageLocation};
pub use menu::{MenuEvent, MenuState, Transition};
