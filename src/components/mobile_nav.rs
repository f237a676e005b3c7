use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};
use yew::{create_portal, TargetCast};
use yew::prelude::*;

use crate::components::mobile_overlay::MobileOverlay;
use crate::components::mobile_toggle::MobileToggle;
use crate::config::NavConfig;
use crate::nav::focus_trap;
use crate::nav::{MenuEvent, MenuState, PageLocation, Transition};
use crate::utils::viewport::viewport_width;

/// Gives the overlay time to become interactive before focusing into it.
const FOCUS_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileNavProps {
    pub config: Rc<NavConfig>,
    pub location: PageLocation,
    /// Primary navigation landmark; the toggle is rendered at its end.
    pub toggle_host: Element,
}

pub(crate) fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!("Failed to update body overflow: {:?}", e);
    }
}

fn focus(node_ref: &NodeRef) {
    if let Some(element) = node_ref.cast::<HtmlElement>() {
        if let Err(e) = element.focus() {
            log::debug!("Failed to move focus: {:?}", e);
        }
    }
}

#[function_component(MobileNav)]
pub fn mobile_nav(props: &MobileNavProps) -> Html {
    let breakpoint = props.config.breakpoint;
    let menu = use_reducer(move || MenuState::closed(breakpoint));

    let toggle_ref = use_node_ref();
    let overlay_ref = use_node_ref();

    let entries = use_memo(
        |(items, location)| location.entries(items),
        (props.config.items.clone(), props.location.clone()),
    );
    let social = use_memo(|social| social.clone(), props.config.social.clone());
    let link_refs = use_memo(
        |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        entries.len(),
    );
    let social_refs = use_memo(
        |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        social.len(),
    );

    // Body scroll and focus follow each state change
    {
        let toggle_ref = toggle_ref.clone();
        let link_refs = link_refs.clone();
        use_effect_with_deps(
            move |transition| {
                match *transition {
                    Transition::Opened => {
                        set_scroll_locked(true);
                        if let Some(first) = link_refs.first().cloned() {
                            // Not cancelled by a quick close.
                            Timeout::new(FOCUS_DELAY_MS, move || focus(&first)).forget();
                        }
                    }
                    Transition::Closed { restore_focus } => {
                        set_scroll_locked(false);
                        if restore_focus {
                            focus(&toggle_ref);
                        }
                    }
                    Transition::Unchanged => {}
                }
                || ()
            },
            menu.last,
        );
    }

    // Close when the viewport grows past the breakpoint
    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            dispatcher.dispatch(MenuEvent::Resized {
                                width: viewport_width(&win),
                            });
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to listen for resize: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Escape and the focus trap, only while open
    {
        let dispatcher = menu.dispatcher();
        let toggle_ref = toggle_ref.clone();
        let link_refs = link_refs.clone();
        let social_refs = social_refs.clone();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|w| w.document());
                let destructor: Box<dyn FnOnce()> = match document {
                    Some(document) if *open => {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new({
                            let document = document.clone();
                            move |event: KeyboardEvent| match event.key().as_str() {
                                "Escape" => dispatcher.dispatch(MenuEvent::EscapePressed),
                                "Tab" => {
                                    let elements = focus_trap::focusable_elements(
                                        link_refs
                                            .iter()
                                            .chain(social_refs.iter())
                                            .chain(std::iter::once(&toggle_ref)),
                                    );
                                    focus_trap::trap_tab(&document, &event, &elements);
                                }
                                _ => {}
                            }
                        });
                        if let Err(e) = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Failed to listen for keydown: {:?}", e);
                        }
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            menu.open,
        );
    }

    let on_toggle = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuEvent::ToggleActivated))
    };

    // Only clicks on the backdrop itself, not on the menu inside it
    let on_backdrop = {
        let dispatcher = menu.dispatcher();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let on_backdrop = match (overlay_ref.get(), event.target_dyn_into::<Node>()) {
                (Some(overlay), Some(target)) => overlay.is_same_node(Some(&target)),
                _ => false,
            };
            if on_backdrop {
                dispatcher.dispatch(MenuEvent::BackdropClicked);
            }
        })
    };

    let on_link = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuEvent::LinkActivated))
    };

    let toggle = html! {
        <MobileToggle open={menu.open} onclick={on_toggle} node_ref={toggle_ref.clone()} />
    };

    html! {
        <>
            { create_portal(toggle, props.toggle_host.clone()) }
            <MobileOverlay
                open={menu.open}
                entries={entries}
                social={social}
                link_refs={link_refs}
                social_refs={social_refs}
                overlay_ref={overlay_ref}
                on_backdrop={on_backdrop}
                on_link={on_link}
            />
        </>
    }
}
