//! The sub-agent marketplace modal: modules the agent has not unlocked yet.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{el, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn render(document: &Document) -> Result<Element, JsValue> {
    let available = APP_STATE.with(|s| s.borrow().available_subagents.clone());

    let overlay = el(document, "div", "modal-overlay")?;
    let modal = el(document, "div", "modal market-modal")?;
    modal.append_child(&text_el(document, "h2", "", "模組市集")?.into())?;

    if available.is_empty() {
        modal.append_child(&text_el(
            document,
            "p",
            "empty-hint",
            "目前沒有可解鎖的模組。",
        )?.into())?;
    } else {
        let list = el(document, "div", "market-list")?;
        for info in &available {
            let row = el(document, "div", "market-row")?;
            row.append_child(&text_el(document, "h3", "", &info.name)?.into())?;
            row.append_child(&text_el(document, "p", "card-subtitle", &info.description)?.into())?;

            if info.status.as_deref() == Some("used") {
                row.append_child(&text_el(document, "span", "market-owned", "已啟用")?.into())?;
            } else {
                let unlock = text_el(document, "button", "primary-btn", "解鎖")?;
                let subagent_id = info.subagent_id.clone();
                on_click(&unlock, move |_| {
                    dispatch_global_message(Message::UnlockSubagent(subagent_id.clone()));
                })?;
                row.append_child(&unlock)?;
            }
            list.append_child(&row)?;
        }
        modal.append_child(&list)?;
    }

    let close = text_el(document, "button", "secondary-btn", "關閉")?;
    on_click(&close, move |_| {
        dispatch_global_message(Message::ShowSubagentMarket(false));
    })?;
    modal.append_child(&close)?;

    overlay.append_child(&modal)?;
    Ok(overlay)
}
