//! Shared chat transcript UI used by the wizard demo and the dashboard
//! playground. The two differ only in how a reset is scoped.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom_utils::{el, input_value, on_click, text_el};
use crate::messages::Message;
use crate::models::ChatMessage;
use crate::state::dispatch_global_message;

/// Which surface hosts the panel; decides the reset message.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChatSurface {
    Demo,
    DashboardPlayground,
}

pub fn render(
    document: &Document,
    transcript: &[ChatMessage],
    is_sending: bool,
    surface: ChatSurface,
) -> Result<Element, JsValue> {
    let panel = el(document, "div", "chat-panel")?;

    let messages = el(document, "div", "chat-messages")?;
    messages.set_id("chat-messages");
    for message in transcript {
        let class = if message.role == crate::constants::ROLE_USER {
            "chat-bubble user"
        } else {
            "chat-bubble model"
        };
        messages.append_child(&text_el(document, "div", class, &message.content)?.into())?;
    }
    if is_sending {
        let pending = el(document, "div", "chat-bubble model pending")?;
        pending.set_inner_html("<span class=\"spinner\"></span>");
        messages.append_child(&pending)?;
    }
    panel.append_child(&messages)?;

    let input_row = el(document, "div", "chat-input-row")?;
    let input = el(document, "input", "chat-input")?;
    input.set_id("chat-input");
    input.set_attribute("placeholder", "輸入訊息測試你的客服…")?;
    {
        // Enter sends, matching the button.
        let document = document.clone();
        let on_key = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Enter" {
                let text = input_value(&document, "chat-input");
                dispatch_global_message(Message::SendChatMessage(text));
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }
    input_row.append_child(&input)?;

    let send = text_el(document, "button", "primary-btn", "送出")?;
    send.set_id("chat-send-btn");
    if is_sending {
        send.set_attribute("disabled", "true")?;
    }
    {
        let document = document.clone();
        on_click(&send, move |_| {
            let text = input_value(&document, "chat-input");
            dispatch_global_message(Message::SendChatMessage(text));
        })?;
    }
    input_row.append_child(&send)?;

    let reset = text_el(document, "button", "link-btn", "重新開始")?;
    reset.set_id("chat-reset-btn");
    on_click(&reset, move |_| {
        dispatch_global_message(match surface {
            ChatSurface::Demo => Message::ResetChat,
            ChatSurface::DashboardPlayground => Message::ResetPlaygroundChat,
        });
    })?;
    input_row.append_child(&reset)?;

    panel.append_child(&input_row)?;
    Ok(panel)
}
