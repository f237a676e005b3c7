#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use mobile_nav::attach::{
    attach_to, attach_when_ready, detach, is_attached, AttachOutcome, DESKTOP_NAV_CLASS, HOST_ID,
};
use mobile_nav::utils::viewport::Environment;
use mobile_nav::{AttachError, NavConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit, Node};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = "<header><nav><ul><li><a href=\"index.html\">Home</a></li></ul></nav></header>\
                    <main><p>Content</p></main>";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn phone(pathname: &str) -> Environment {
    Environment {
        pathname: pathname.to_string(),
        viewport_width: 390.0,
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".to_string(),
    }
}

fn desktop() -> Environment {
    Environment {
        pathname: "/".to_string(),
        viewport_width: 1440.0,
        user_agent: "Mozilla/5.0 (X11; Linux x86_64)".to_string(),
    }
}

async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Tears down any earlier widget and replaces the body markup.
async fn fresh_page(html: &str) -> Document {
    let document = document();
    detach(&document);
    settle(10).await;
    document.body().unwrap().set_inner_html(html);
    document
}

/// Attaches to `PAGE` as a phone on the features page and waits for the first render.
async fn mounted_page() -> Document {
    let document = fresh_page(PAGE).await;
    let outcome = attach_to(&document, &phone("/features.html"), NavConfig::default()).unwrap();
    assert_eq!(outcome, AttachOutcome::Attached);
    settle(20).await;
    document
}

fn element(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn last_element(document: &Document, selector: &str) -> HtmlElement {
    let nodes = document.query_selector_all(selector).unwrap();
    nodes
        .item(nodes.length() - 1)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn has_focus(document: &Document, node: &Node) -> bool {
    document.active_element().map_or(false, |active| {
        let active: Node = active.into();
        node.is_same_node(Some(&active))
    })
}

fn body_overflow(document: &Document) -> String {
    document
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

/// Dispatches a keydown on the document; returns whether it was prevented.
fn press(document: &Document, key: &str, shift: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn is_open(document: &Document) -> bool {
    !element(document, ".mobile-nav-overlay").has_attribute("hidden")
}

#[wasm_bindgen_test]
async fn attaches_once_and_degrades_without_navigation() {
    let document = fresh_page(PAGE).await;

    // Desktop signals never touch the page
    let outcome = attach_to(&document, &desktop(), NavConfig::default()).unwrap();
    assert_eq!(outcome, AttachOutcome::NotMobile);
    assert!(document.get_element_by_id(HOST_ID).is_none());

    // No primary navigation: nothing inserted, no panic
    let document = fresh_page("<header><h1>Site</h1></header><main></main>").await;
    let body = document.body().unwrap();
    let before = body.inner_html();
    let err = attach_to(&document, &phone("/"), NavConfig::default()).unwrap_err();
    assert!(matches!(err, AttachError::MissingNavigation));
    assert_eq!(body.inner_html(), before);
    assert!(document.get_element_by_id(HOST_ID).is_none());

    // Normal page: host lands right after the header, desktop list is marked
    let document = fresh_page(PAGE).await;
    let outcome = attach_to(&document, &phone("/features.html"), NavConfig::default()).unwrap();
    assert_eq!(outcome, AttachOutcome::Attached);

    let host = document.get_element_by_id(HOST_ID).unwrap();
    let header = document.query_selector("header").unwrap().unwrap();
    assert!(header
        .next_element_sibling()
        .map(|el| el.is_same_node(Some(&*host)))
        .unwrap_or(false));

    let list = document.query_selector("nav ul").unwrap().unwrap();
    assert!(list.class_list().contains(DESKTOP_NAV_CLASS));

    let again = attach_to(&document, &phone("/features.html"), NavConfig::default()).unwrap();
    assert_eq!(again, AttachOutcome::AlreadyAttached);
}

#[wasm_bindgen_test]
async fn falls_back_to_body_start_without_header() {
    let document = fresh_page("<main><nav><ul></ul></nav></main>").await;
    let outcome = attach_to(&document, &phone("/"), NavConfig::default()).unwrap();
    assert_eq!(outcome, AttachOutcome::Attached);

    let first = document.body().unwrap().first_element_child().unwrap();
    assert_eq!(first.id(), HOST_ID);
}

#[wasm_bindgen_test]
async fn failed_insertion_leaves_no_host_behind() {
    let _ = fresh_page(PAGE).await;

    // A header that is the document element has no room for a sibling
    let broken = document()
        .implementation()
        .unwrap()
        .create_html_document()
        .unwrap();
    let header = broken.create_element("header").unwrap();
    header.set_inner_html("<nav><ul></ul></nav>");
    let root = broken.document_element().unwrap();
    broken.replace_child(&header, &root).unwrap();

    let err = attach_to(&broken, &phone("/"), NavConfig::default()).unwrap_err();
    assert!(matches!(err, AttachError::Dom(_)));
    assert!(broken.get_element_by_id(HOST_ID).is_none());
    assert!(!is_attached(&broken));

    let list = broken.query_selector("ul").unwrap().unwrap();
    assert!(!list.class_list().contains(DESKTOP_NAV_CLASS));
}

#[wasm_bindgen_test]
async fn toggle_twice_restores_scroll_and_focus() {
    let document = mounted_page().await;
    let toggle = element(&document, ".mobile-menu-toggle");
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!is_open(&document));

    toggle.click();
    settle(20).await;
    assert!(is_open(&document));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(body_overflow(&document), "hidden");

    // First link receives focus once the overlay is interactive
    settle(150).await;
    assert!(has_focus(&document, &element(&document, ".mobile-nav-link")));

    toggle.click();
    settle(20).await;
    assert!(!is_open(&document));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(body_overflow(&document), "");
    assert!(has_focus(&document, &toggle));
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_only_on_the_overlay_itself() {
    let document = mounted_page().await;
    element(&document, ".mobile-menu-toggle").click();
    settle(20).await;
    assert!(is_open(&document));

    element(&document, ".mobile-nav-menu").click();
    settle(20).await;
    assert!(is_open(&document));

    element(&document, ".mobile-nav-overlay").click();
    settle(20).await;
    assert!(!is_open(&document));
    assert_eq!(body_overflow(&document), "");
}

#[wasm_bindgen_test]
async fn escape_closes_only_while_open() {
    let document = mounted_page().await;
    let toggle = element(&document, ".mobile-menu-toggle");

    assert!(!press(&document, "Escape", false));
    settle(20).await;
    assert!(!is_open(&document));

    toggle.click();
    settle(150).await;
    assert!(is_open(&document));

    press(&document, "Escape", false);
    settle(20).await;
    assert!(!is_open(&document));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(has_focus(&document, &toggle));
}

#[wasm_bindgen_test]
async fn tab_wraps_in_document_order() {
    let document = mounted_page().await;
    let toggle = element(&document, ".mobile-menu-toggle");
    toggle.click();
    settle(150).await;

    // The toggle sits in the header, ahead of the overlay
    let last_social = last_element(&document, ".mobile-social-link");
    last_social.focus().unwrap();
    assert!(press(&document, "Tab", false));
    assert!(has_focus(&document, &toggle));

    assert!(press(&document, "Tab", true));
    assert!(has_focus(&document, &last_social));

    let first_link = element(&document, ".mobile-nav-link");
    first_link.focus().unwrap();
    assert!(!press(&document, "Tab", true));
    assert!(!press(&document, "Tab", false));
    assert!(has_focus(&document, &first_link));

    press(&document, "Escape", false);
    settle(20).await;
}

#[wasm_bindgen_test]
async fn attach_when_ready_attaches_a_single_widget() {
    // Breakpoint above any test viewport so the width gate passes
    let document = fresh_page(&format!(
        "<script type=\"application/json\" id=\"mobile-nav-config\">{}</script>{}",
        r#"{"breakpoint": 100000}"#, PAGE
    ))
    .await;

    attach_when_ready();
    attach_when_ready();
    settle(20).await;

    assert_eq!(document.query_selector_all(&format!("#{HOST_ID}")).unwrap().length(), 1);
    assert_eq!(document.query_selector_all(".mobile-menu-toggle").unwrap().length(), 1);
    assert_eq!(document.query_selector_all(".mobile-nav-overlay").unwrap().length(), 1);
}
