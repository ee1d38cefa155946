//! Playground tab: the same chat panel as the wizard demo, scoped to the
//! currently selected agent.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::chat_panel::{self, ChatSurface};
use crate::dom_utils::{el, text_el};
use crate::state::APP_STATE;

pub fn render(document: &Document, content: &Element) -> Result<(), JsValue> {
    let (transcript, is_sending) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.transcript.clone(), s.is_sending_chat)
    });

    content.append_child(&text_el(document, "h2", "", "測試區")?.into())?;

    let split = el(document, "div", "demo-split")?;
    split.append_child(&chat_panel::render(
        document,
        &transcript,
        is_sending,
        ChatSurface::DashboardPlayground,
    )?.into())?;
    split.append_child(&crate::components::analysis_panel::render(
        document,
        &transcript,
    )?.into())?;
    content.append_child(&split)?;
    Ok(())
}
