//! Agent home: the operator's list of configured agents plus the entry point
//! for creating a new one through the wizard.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{el, on_click, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, APP_STATE};

pub fn render(document: &Document) -> Result<(), JsValue> {
    let root = crate::views::app_root(document)?;

    let page = el(document, "div", "agent-home")?;
    let header = el(document, "div", "agent-home-header")?;
    header.append_child(&text_el(document, "h1", "", "我的客服")?.into())?;

    let create = text_el(document, "button", "primary-btn", "＋ 建立新客服")?;
    create.set_id("create-agent-btn");
    on_click(&create, move |_| {
        dispatch_global_message(Message::StartSetup);
    })?;
    header.append_child(&create)?;
    page.append_child(&header)?;

    let (agents, loading) =
        APP_STATE.with(|s| (s.borrow().agents.clone(), s.borrow().is_loading_agents));

    if loading {
        page.append_child(&text_el(document, "p", "loading-hint", "載入中…")?.into())?;
    } else if agents.is_empty() {
        page.append_child(&text_el(
            document,
            "p",
            "empty-hint",
            "還沒有任何客服，點擊上方按鈕開始建立。",
        )?.into())?;
    } else {
        let list = el(document, "div", "agent-list")?;
        for agent in &agents {
            let card = el(document, "div", "agent-card")?;
            let label = if agent.name.is_empty() {
                agent.id.as_str()
            } else {
                agent.name.as_str()
            };
            card.append_child(&text_el(document, "h3", "", label)?.into())?;
            if let Some(deploy_type) = &agent.deploy_type {
                card.append_child(&text_el(document, "span", "agent-badge", deploy_type)?.into())?;
            }
            if let Some(updated) = &agent.updated_at {
                card.append_child(&text_el(document, "span", "agent-updated", updated)?.into())?;
            }
            let agent_id = agent.id.clone();
            on_click(&card, move |_| {
                dispatch_global_message(Message::SelectAgent(agent_id.clone()));
            })?;
            list.append_child(&card)?;
        }
        page.append_child(&list)?;
    }

    root.append_child(&page)?;
    Ok(())
}
