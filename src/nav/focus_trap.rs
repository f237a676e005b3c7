use std::cmp::Ordering;

use web_sys::{Document, HtmlElement, KeyboardEvent, Node};
use yew::NodeRef;

/// Index to move focus to when Tab would leave the focusable set, or `None`
/// when the key press should pass through untouched.
pub fn wrap_target(len: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (active, backwards) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Resolves the refs that are still mounted and sorts them into document order.
pub fn focusable_elements<'a>(refs: impl IntoIterator<Item = &'a NodeRef>) -> Vec<HtmlElement> {
    let mut elements: Vec<HtmlElement> = refs
        .into_iter()
        .filter_map(|node_ref| node_ref.cast::<HtmlElement>())
        .collect();
    elements.sort_by(document_order);
    elements
}

fn document_order(a: &HtmlElement, b: &HtmlElement) -> Ordering {
    let b: &Node = b;
    if a.is_same_node(Some(b)) {
        return Ordering::Equal;
    }
    if a.compare_document_position(b) & Node::DOCUMENT_POSITION_FOLLOWING != 0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Keeps Tab / Shift+Tab cycling inside `elements`.
pub fn trap_tab(document: &Document, event: &KeyboardEvent, elements: &[HtmlElement]) {
    let active: Option<Node> = document.active_element().map(Into::into);
    let position = active
        .as_ref()
        .and_then(|active| elements.iter().position(|el| el.is_same_node(Some(active))));

    if let Some(target) = wrap_target(elements.len(), position, event.shift_key()) {
        event.prevent_default();
        if let Err(e) = elements[target].focus() {
            log::debug!("focus trap could not move focus: {:?}", e);
        }
    }
}
