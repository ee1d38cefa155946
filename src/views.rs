// src/views.rs
//
// Top-level view dispatch. Every state change funnels through here; the
// active view's component rebuilds the app container from current state.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::state::ActiveView;

pub fn render_active_view_by_type(view: ActiveView, document: &Document) -> Result<(), JsValue> {
    match view {
        ActiveView::Landing => crate::components::landing::render(document),
        ActiveView::AgentHome => crate::components::agent_home::render(document),
        ActiveView::Wizard => crate::components::wizard::render(document),
        ActiveView::Review => crate::components::review::render(document),
        ActiveView::Demo => crate::components::demo::render(document),
        ActiveView::Deploy => crate::components::deploy::render(document),
        ActiveView::Dashboard => crate::components::dashboard::render(document),
    }
}

/// Fetch the app container and clear it for a fresh render.
pub fn app_root(document: &Document) -> Result<Element, JsValue> {
    let root = document
        .get_element_by_id("app-container")
        .ok_or_else(|| JsValue::from_str("app-container missing"))?;
    crate::dom_utils::clear_children(&root);
    Ok(root)
}
