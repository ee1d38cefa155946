//! Demo screen shown after a confirmed setup: the playground chat next to
//! the analysis panel, plus the jump to LINE deployment.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::chat_panel::{self, ChatSurface};
use crate::dom_utils::{el, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, ActiveView, APP_STATE};

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let (transcript, is_sending) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.transcript.clone(), s.is_sending_chat)
    });

    let page = el(document, "div", "demo-page")?;
    page.append_child(&text_el(document, "h2", "wizard-title", "試用你的客服")?.into())?;
    page.append_child(&text_el(
        document,
        "p",
        "demo-hint",
        "用顧客的口吻問問題，看看客服怎麼回答。",
    )?.into())?;

    let split = el(document, "div", "demo-split")?;
    split.append_child(&chat_panel::render(
        document,
        &transcript,
        is_sending,
        ChatSurface::Demo,
    )?.into())?;
    split.append_child(&crate::components::analysis_panel::render(
        document,
        &transcript,
    )?.into())?;
    page.append_child(&split)?;

    let footer = el(document, "div", "wizard-footer")?;
    let deploy = text_el(document, "button", "primary-btn", "上線到 LINE")?;
    deploy.set_id("go-deploy-btn");
    on_click(&deploy, move |_| {
        dispatch_global_message(Message::NavigateTo(ActiveView::Deploy));
    })?;
    footer.append_child(&deploy)?;
    page.append_child(&footer)?;

    root.append_child(&page)?;
    Ok(())
}
