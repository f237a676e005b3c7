use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};
use yew::AppHandle;

use crate::components::mobile_nav::set_scroll_locked;
use crate::components::{MobileNav, MobileNavProps};
use crate::config::NavConfig;
use crate::error::AttachError;
use crate::nav::PageLocation;
use crate::utils::viewport::Environment;

/// Id of the element the overlay is rendered into.
pub const HOST_ID: &str = "mobile-nav-root";
/// Added to the desktop menu list so page styles can hide it on mobile.
pub const DESKTOP_NAV_CLASS: &str = "desktop-nav";

thread_local! {
    static APP: RefCell<Option<AppHandle<MobileNav>>> = RefCell::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    AlreadyAttached,
    /// Desktop viewport with a desktop user agent.
    NotMobile,
}

pub fn is_attached(document: &Document) -> bool {
    APP.with(|app| app.borrow().is_some()) || document.get_element_by_id(HOST_ID).is_some()
}

/// Inserts the toggle and overlay into the current page. Safe to call more
/// than once; later calls return [`AttachOutcome::AlreadyAttached`].
pub fn attach(config: NavConfig) -> Result<AttachOutcome, AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;
    let env = Environment::capture(&window)?;
    attach_to(&document, &env, config)
}

/// [`attach`] against an explicit document and environment snapshot.
pub fn attach_to(
    document: &Document,
    env: &Environment,
    config: NavConfig,
) -> Result<AttachOutcome, AttachError> {
    if is_attached(document) {
        return Ok(AttachOutcome::AlreadyAttached);
    }

    if !env.is_mobile(config.breakpoint) {
        return Ok(AttachOutcome::NotMobile);
    }

    let nav = document
        .query_selector("nav")?
        .ok_or(AttachError::MissingNavigation)?;

    let host = document.create_element("div")?;
    host.set_id(HOST_ID);
    match document.query_selector("header")? {
        Some(header) => {
            header.insert_adjacent_element("afterend", &host)?;
        }
        None => {
            let body = document.body().ok_or(AttachError::NoBody)?;
            body.insert_adjacent_element("afterbegin", &host)?;
        }
    }

    // Undo the insertion so `is_attached` stays false.
    if let Err(e) = mark_desktop_nav(&nav) {
        host.remove();
        return Err(e);
    }

    let props = MobileNavProps {
        config: Rc::new(config),
        location: PageLocation::from_pathname(&env.pathname),
        toggle_host: nav,
    };
    let handle = yew::Renderer::<MobileNav>::with_root_and_props(host, props).render();
    APP.with(|app| *app.borrow_mut() = Some(handle));

    Ok(AttachOutcome::Attached)
}

/// Unmounts the widget, removes its host and unlocks page scroll.
pub fn detach(document: &Document) {
    if let Some(handle) = APP.with(|app| app.borrow_mut().take()) {
        handle.destroy();
    }
    if let Some(host) = document.get_element_by_id(HOST_ID) {
        host.remove();
    }
    set_scroll_locked(false);
}

fn mark_desktop_nav(nav: &Element) -> Result<(), AttachError> {
    if let Some(list) = nav.query_selector("ul")? {
        list.class_list().add_1(DESKTOP_NAV_CLASS)?;
    }
    Ok(())
}

fn attach_and_log(config: NavConfig) {
    match attach(config) {
        Ok(AttachOutcome::Attached) => log::info!("Mobile navigation attached"),
        Ok(outcome) => log::debug!("Mobile navigation not attached: {:?}", outcome),
        Err(e) => log::warn!("Mobile navigation skipped: {}", e),
    }
}

/// Attaches once the DOM is parsed: immediately if it already is, otherwise
/// on `DOMContentLoaded`. The config is read from the page at that point.
pub fn attach_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("Mobile navigation skipped: {}", AttachError::NoDocument);
        return;
    };

    if document.ready_state() != "loading" {
        attach_and_log(NavConfig::from_document(&document));
        return;
    }

    let on_ready = Closure::once_into_js({
        let document = document.clone();
        move || attach_and_log(NavConfig::from_document(&document))
    });
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::warn!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}
