use std::rc::Rc;

use yew::prelude::*;

use crate::config::SocialLink;
use crate::nav::NavEntry;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileOverlayProps {
    pub open: bool,
    pub entries: Rc<Vec<NavEntry>>,
    pub social: Rc<Vec<SocialLink>>,
    /// One ref per entry, in the same order.
    #[prop_or_default]
    pub link_refs: Rc<Vec<NodeRef>>,
    /// One ref per social link, in the same order.
    #[prop_or_default]
    pub social_refs: Rc<Vec<NodeRef>>,
    #[prop_or_default]
    pub overlay_ref: NodeRef,
    pub on_backdrop: Callback<MouseEvent>,
    pub on_link: Callback<MouseEvent>,
}

/// Full-viewport menu layer. Hidden while closed.
#[function_component(MobileOverlay)]
pub fn mobile_overlay(props: &MobileOverlayProps) -> Html {
    let links = props.entries.iter().enumerate().map(|(i, entry)| {
        let node_ref = props.link_refs.get(i).cloned().unwrap_or_default();
        html! {
            <li>
                <a
                    ref={node_ref}
                    href={entry.href.clone()}
                    class={classes!("mobile-nav-link", entry.active.then_some("active"))}
                    onclick={props.on_link.clone()}
                >
                    { entry.label.clone() }
                </a>
            </li>
        }
    });

    let social = props.social.iter().enumerate().map(|(i, link)| {
        let node_ref = props.social_refs.get(i).cloned().unwrap_or_default();
        html! {
            <a
                ref={node_ref}
                href={link.target.clone()}
                class="mobile-social-link"
                aria-label={link.label.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                <i class={classes!("fa-brands", link.icon.clone())}></i>
            </a>
        }
    });

    html! {
        <div
            ref={props.overlay_ref.clone()}
            class="mobile-nav-overlay"
            hidden={!props.open}
            onclick={props.on_backdrop.clone()}
        >
            <nav class="mobile-nav-menu" aria-label="Mobile navigation">
                <ul class="mobile-nav-list">
                    { for links }
                </ul>
                <div class="mobile-social-links">
                    { for social }
                </div>
            </nav>
        </div>
    }
}
