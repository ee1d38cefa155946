//! DOM helpers shared by the screen components. Rendering is plain
//! create-element / set-class / append; these helpers keep that terse.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
}

pub fn hide(el: &Element) {
    let _ = el.class_list().add_1("hidden");
}

/// Create an element with a class name, optionally with text content.
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub fn text_el(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Remove all children of a container before a re-render.
pub fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// Toggle the disabled flag on a button by element id.
pub fn set_button_disabled(document: &Document, id: &str, disabled: bool) {
    if let Some(btn) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
    {
        btn.set_disabled(disabled);
    }
}

/// Read the current value of an `<input>` by id; empty string when missing.
pub fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Read the current value of a `<textarea>` by id; empty string when missing.
pub fn textarea_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

/// Attach a click handler to an element and leak the closure, which is the
/// intended lifecycle for handlers that live as long as the page.
pub fn on_click<F>(el: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach an input handler that receives the current field value.
pub fn on_input<F>(el: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let value = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|i| i.value())
            .or_else(|| {
                event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
                    .map(|t| t.value())
            })
            .unwrap_or_default();
        handler(value);
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
