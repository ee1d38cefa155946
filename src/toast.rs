//! Alert banner helper. Every failure class (network, backend business
//! error, client validation) funnels through here so the user always sees
//! the same kind of blocking banner with the raw human-readable message.
//!
//! A `#alert-root` container is created once per page; banners stack and
//! dismiss themselves after a few seconds.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug, Clone, Copy)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

pub fn success(msg: &str) {
    show(msg, AlertKind::Success);
}

pub fn error(msg: &str) {
    show(msg, AlertKind::Error);
}

#[allow(dead_code)]
pub fn info(msg: &str) {
    show(msg, AlertKind::Info);
}

pub fn show(message: &str, kind: AlertKind) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    let root = ensure_root(&document);

    let banner = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    banner.set_class_name(match kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
        AlertKind::Info => "alert alert-info",
    });
    banner.set_text_content(Some(message));

    let _ = root.append_child(&banner);

    // Errors linger longer than confirmations.
    let timeout_ms = match kind {
        AlertKind::Error => 6000,
        _ => 3000,
    };
    let banner_el: HtmlElement = banner.unchecked_into();
    Timeout::new(timeout_ms, move || {
        if let Some(parent) = banner_el.parent_node() {
            let _ = parent.remove_child(&banner_el);
        }
    })
    .forget();

    ensure_styles(&document);
}

fn ensure_root(document: &Document) -> Element {
    if let Some(el) = document.get_element_by_id("alert-root") {
        return el;
    }
    let root = document.create_element("div").unwrap();
    root.set_id("alert-root");
    root.set_class_name("alert-root");
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("alert-styles").is_some() {
        return;
    }

    let css = "
.alert-root{position:fixed;top:0;left:50%;transform:translateX(-50%);display:flex;flex-direction:column;gap:6px;padding-top:12px;z-index:9999;font-family:'Noto Sans TC',Arial,sans-serif}
.alert{padding:12px 20px;border-radius:6px;color:#fff;box-shadow:0 2px 6px rgba(0,0,0,.15);opacity:0;animation:alert-in .15s forwards;max-width:80vw;white-space:pre-wrap}
.alert-success{background:#059669}
.alert-error{background:#dc2626}
.alert-info{background:#0284c7}
.spinner{display:inline-block;width:14px;height:14px;border:2px solid currentColor;border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle}
@keyframes spin{to{transform:rotate(360deg)}}
@keyframes alert-in{to{opacity:1}}
";

    let style = document.create_element("style").unwrap();
    style.set_id("alert-styles");
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        let _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&style);
    }
}
