//! Channels tab: LINE deployment status and the credentials modal.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{el, input_value, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn render(document: &Document, content: &Element) -> Result<(), JsValue> {
    let agent = APP_STATE.with(|s| s.borrow().current_agent.clone());

    content.append_child(&text_el(document, "h2", "", "頻道")?.into())?;

    let card = el(document, "div", "channel-card")?;
    card.append_child(&text_el(document, "h3", "", "LINE 官方帳號")?.into())?;

    let deployed = agent
        .as_ref()
        .map(|a| a.deploy_type.as_deref() == Some("line"))
        .unwrap_or(false);

    if deployed {
        card.append_child(&text_el(document, "p", "channel-status live", "● 已上線")?.into())?;
        let rebind = text_el(document, "button", "secondary-btn", "更新憑證")?;
        on_click(&rebind, move |_| {
            dispatch_global_message(Message::ShowLineModal(true));
        })?;
        card.append_child(&rebind)?;
    } else {
        card.append_child(&text_el(document, "p", "channel-status", "○ 尚未連接")?.into())?;
        let connect = text_el(document, "button", "primary-btn", "連接 LINE")?;
        on_click(&connect, move |_| {
            dispatch_global_message(Message::ShowLineModal(true));
        })?;
        card.append_child(&connect)?;
    }

    content.append_child(&card)?;
    Ok(())
}

pub fn render_line_modal(document: &Document) -> Result<Element, JsValue> {
    let is_deploying = APP_STATE.with(|s| s.borrow().is_deploying);

    let overlay = el(document, "div", "modal-overlay")?;
    let modal = el(document, "div", "modal line-modal")?;
    modal.append_child(&text_el(document, "h2", "", "連接 LINE 頻道")?.into())?;

    modal.append_child(&text_el(
        document,
        "label",
        "field-label",
        "Channel Access Token",
    )?.into())?;
    let token = el(document, "input", "field-input")?;
    token.set_id("modal-line-token");
    modal.append_child(&token)?;

    modal.append_child(&text_el(document, "label", "field-label", "Channel Secret")?.into())?;
    let secret = el(document, "input", "field-input")?;
    secret.set_id("modal-line-secret");
    modal.append_child(&secret)?;

    let submit = text_el(
        document,
        "button",
        "primary-btn",
        if is_deploying { "部署中…" } else { "開始部署" },
    )?;
    if is_deploying {
        submit.set_attribute("disabled", "true")?;
    }
    {
        let document = document.clone();
        on_click(&submit, move |_| {
            dispatch_global_message(Message::DeployLine {
                access_token: input_value(&document, "modal-line-token"),
                channel_secret: input_value(&document, "modal-line-secret"),
            });
        })?;
    }
    modal.append_child(&submit)?;

    let cancel = text_el(document, "button", "secondary-btn", "取消")?;
    on_click(&cancel, move |_| {
        dispatch_global_message(Message::ShowLineModal(false));
    })?;
    modal.append_child(&cancel)?;

    overlay.append_child(&modal)?;
    Ok(overlay)
}
