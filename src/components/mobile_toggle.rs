use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileToggleProps {
    pub open: bool,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

/// Three-line hamburger button.
#[function_component(MobileToggle)]
pub fn mobile_toggle(props: &MobileToggleProps) -> Html {
    let expanded = if props.open { "true" } else { "false" };

    html! {
        <button
            ref={props.node_ref.clone()}
            class="mobile-menu-toggle"
            aria-label="Toggle mobile menu"
            aria-expanded={expanded}
            onclick={props.onclick.clone()}
        >
            <span></span>
            <span></span>
            <span></span>
        </button>
    }
}
